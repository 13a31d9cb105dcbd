use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static MISSING_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([,.!?])([A-Za-z])").unwrap());
static SENTENCE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?]\s+)([a-z])").unwrap());
static LONE_I: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bi\b").unwrap());

/// Applies a fixed sequence of low-risk spacing and capitalization fixes.
///
/// This is a handful of heuristics, not a grammar checker. The steps run in
/// order, each on the previous step's output, and nothing is rolled back:
///
/// 1. every whitespace run, line breaks included, becomes one space,
/// 2. a space is inserted after `,` `.` `!` `?` glued to a letter,
/// 3. the first character is uppercased,
/// 4. the first letter after a sentence terminator and whitespace is uppercased,
/// 5. the standalone word `i` becomes `I`.
///
/// Step 1 flattens multi-line text into a single line.
pub fn fix_grammar(text: &str) -> String {
    let flattened = WHITESPACE_RUN.replace_all(text, " ");
    let spaced = MISSING_SPACE.replace_all(&flattened, "${1} ${2}");
    let capitalized = capitalize_first(&spaced);
    let sentences = SENTENCE_START.replace_all(&capitalized, |caps: &Captures| {
        format!("{}{}", &caps[1], caps[2].to_uppercase())
    });
    LONE_I.replace_all(&sentences, "I").into_owned()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
