use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes spacing line by line.
///
/// Each line is trimmed and every inner whitespace run becomes one space.
/// Lines left empty are dropped. Unlike [`super::remove_duplicates`], repeated
/// lines are kept.
pub fn cleanup_format(text: &str) -> String {
    text.split('\n')
        .map(|line| WHITESPACE_RUN.replace_all(line.trim(), " "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims() {
        assert_eq!(
            cleanup_format("  hello   world  \n\n  foo  "),
            "hello world\nfoo"
        );
    }

    #[test]
    fn tabs_count_as_whitespace() {
        assert_eq!(cleanup_format("a\t\tb \t c"), "a b c");
    }

    #[test]
    fn keeps_duplicate_lines() {
        assert_eq!(cleanup_format("same\n same \nsame"), "same\nsame\nsame");
    }

    #[test]
    fn blank_input() {
        assert_eq!(cleanup_format(""), "");
        assert_eq!(cleanup_format(" \n \n\t"), "");
    }

    #[test]
    fn is_idempotent() {
        let input = "\t first   line \n\n second\t\tline\n   ";
        let once = cleanup_format(input);
        assert_eq!(cleanup_format(&once), once);
    }
}
