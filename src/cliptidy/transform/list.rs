use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix written in front of every list item.
pub const BULLET: &str = "• ";

// The capture is the whitespace after the terminator: that is where sentences split.
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?](\s+)").unwrap());
static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•]\s*").unwrap());

/// Reshapes free-form text into a bulleted list, one `• ` item per line.
///
/// The item splitter is picked by a strict cascade, first match wins:
///
/// 1. text with a line break is split into lines,
/// 2. text with a sentence terminator (`.`, `!`, `?`) followed by whitespace
///    is split into sentences, the terminator staying with its sentence,
/// 3. text with a comma is split on commas,
/// 4. anything else is a single item.
///
/// Items are trimmed and blank ones dropped. One existing bullet marker
/// (`-`, `*` or `•`) is stripped so already bulleted text is not bulleted twice.
pub fn convert_to_list(text: &str) -> String {
    split_items(text)
        .into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| format!("{}{}", BULLET, BULLET_MARKER.replace(item, "")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn split_items(text: &str) -> Vec<&str> {
    if text.contains('\n') {
        text.split('\n').collect()
    } else if SENTENCE_BREAK.is_match(text) {
        split_sentences(text)
    } else if text.contains(',') {
        text.split(',').collect()
    } else {
        vec![text]
    }
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;

    for caps in SENTENCE_BREAK.captures_iter(text) {
        if let Some(gap) = caps.get(1) {
            items.push(&text[start..gap.start()]);
            start = gap.end();
        }
    }
    items.push(&text[start..]);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sentences() {
        assert_eq!(
            convert_to_list("Buy milk. Walk dog. Call mom."),
            "• Buy milk.\n• Walk dog.\n• Call mom."
        );
    }

    #[test]
    fn mixed_terminators_stay_with_their_sentence() {
        assert_eq!(
            convert_to_list("Ready?  Go!\tNow."),
            "• Ready?\n• Go!\n• Now."
        );
    }

    #[test]
    fn line_breaks_take_precedence_over_sentences() {
        assert_eq!(
            convert_to_list("First. Still first\nSecond"),
            "• First. Still first\n• Second"
        );
    }

    #[test]
    fn sentences_take_precedence_over_commas() {
        assert_eq!(
            convert_to_list("eggs, ham. bread, jam"),
            "• eggs, ham.\n• bread, jam"
        );
    }

    #[test]
    fn splits_on_commas() {
        assert_eq!(
            convert_to_list("apples, pears,  plums"),
            "• apples\n• pears\n• plums"
        );
    }

    #[test]
    fn terminator_without_whitespace_is_not_a_sentence_break() {
        assert_eq!(convert_to_list("pi is 3.14"), "• pi is 3.14");
    }

    #[test]
    fn single_item() {
        assert_eq!(convert_to_list("  just one thing "), "• just one thing");
    }

    #[test]
    fn strips_existing_markers() {
        assert_eq!(
            convert_to_list("- one\n*two\n•   three\n  - four"),
            "• one\n• two\n• three\n• four"
        );
    }

    #[test]
    fn strips_only_one_marker() {
        assert_eq!(convert_to_list("- - nested"), "• - nested");
    }

    #[test]
    fn drops_blank_items() {
        assert_eq!(convert_to_list("a\n\n   \nb\n"), "• a\n• b");
        assert_eq!(convert_to_list("a,,b,"), "• a\n• b");
    }

    #[test]
    fn blank_input_is_empty_output() {
        assert_eq!(convert_to_list(""), "");
        assert_eq!(convert_to_list("   "), "");
    }

    #[test]
    fn every_line_is_bulleted() {
        let output = convert_to_list("x\n- y\n\nz. w");
        assert!(output.lines().all(|line| line.starts_with(BULLET)));
    }
}
