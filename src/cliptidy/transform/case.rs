use crate::model::CaseMode;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w").unwrap());
static SENTENCE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^\W*|[.!?]\s*)(\w)").unwrap());

/// Converts `text` according to `mode`.
///
/// [`CaseMode::Unchanged`] returns the input as is; it is the fallback for
/// mode codes nobody recognizes, not an error.
pub fn change_case(text: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Upper => text.to_uppercase(),
        CaseMode::Lower => text.to_lowercase(),
        CaseMode::Title => title_case(text),
        CaseMode::Sentence => sentence_case(text),
        CaseMode::Unchanged(_) => text.to_string(),
    }
}

/// Integer-coded entry point: `0` upper, `1` lower, `2` title, `3` sentence,
/// anything else leaves the text untouched.
pub fn change_case_code(text: &str, code: i64) -> String {
    change_case(text, CaseMode::from_code(code))
}

fn title_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    WORD_START
        .replace_all(&lowered, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

fn sentence_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    SENTENCE_WORD
        .replace_all(&lowered, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}
