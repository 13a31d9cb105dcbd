//! Properties every transformation must keep, checked over a shared corpus of
//! awkward inputs.

use cliptidy::model::CaseMode;
use cliptidy::transform::{
    change_case, change_case_code, cleanup_format, convert_to_list, fix_grammar, remove_duplicates,
};
use std::collections::HashSet;

const CORPUS: &[&str] = &[
    "",
    " ",
    "\n\n\n",
    "a\na\nb\n\n",
    "  hello   world  \n\n  foo  ",
    "Buy milk. Walk dog. Call mom.",
    "- milk\n* eggs\n• bread\n- milk",
    "one, two,, three ,",
    "hello,world. this is i.",
    "\tTabs\tand  spaces\r\nand CRLF\r\n",
    "ünïcödé line\nÜNÏCÖDÉ LINE\nünïcödé line",
    "Wait!What?Really... yes.",
];

#[test]
fn dedupe_is_idempotent() {
    for input in CORPUS {
        let once = remove_duplicates(input);
        assert_eq!(remove_duplicates(&once), once, "input: {:?}", input);
    }
}

#[test]
fn cleanup_is_idempotent() {
    for input in CORPUS {
        let once = cleanup_format(input);
        assert_eq!(cleanup_format(&once), once, "input: {:?}", input);
    }
}

#[test]
fn dedupe_keeps_an_ordered_subsequence_without_repeats() {
    for input in CORPUS {
        let output = remove_duplicates(input);
        if output.is_empty() {
            continue;
        }
        let kept: Vec<&str> = output.split('\n').collect();

        let unique: HashSet<&str> = kept.iter().copied().collect();
        assert_eq!(unique.len(), kept.len(), "repeats in {:?}", output);

        let mut source = input.split('\n').map(str::trim);
        for line in &kept {
            assert!(
                source.any(|candidate| candidate == *line),
                "{:?} out of order for {:?}",
                line,
                input
            );
        }
    }
}

#[test]
fn list_lines_are_all_bulleted() {
    for input in CORPUS {
        let output = convert_to_list(input);
        if input.trim().is_empty() {
            assert_eq!(output, "", "input: {:?}", input);
            continue;
        }
        assert!(
            output.split('\n').all(|line| line.starts_with("• ")),
            "input: {:?}, output: {:?}",
            input,
            output
        );
    }
}

#[test]
fn grammar_output_is_single_line() {
    for input in CORPUS {
        let output = fix_grammar(input);
        assert!(!output.contains('\n'), "input: {:?}", input);
    }
}

#[test]
fn upper_matches_std_and_unknown_modes_pass_through() {
    for input in CORPUS {
        assert_eq!(change_case(input, CaseMode::Upper), input.to_uppercase());
        assert_eq!(change_case_code(input, 99), *input);
        assert_eq!(change_case_code(input, -3), *input);
    }
}

#[test]
fn transformations_are_deterministic() {
    for input in CORPUS {
        assert_eq!(fix_grammar(input), fix_grammar(input));
        assert_eq!(convert_to_list(input), convert_to_list(input));
        for code in 0..4 {
            assert_eq!(change_case_code(input, code), change_case_code(input, code));
        }
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(remove_duplicates("a\na\nb\n\n"), "a\nb");
    assert_eq!(
        cleanup_format("  hello   world  \n\n  foo  "),
        "hello world\nfoo"
    );
    assert_eq!(
        convert_to_list("Buy milk. Walk dog. Call mom."),
        "• Buy milk.\n• Walk dog.\n• Call mom."
    );
    assert_eq!(
        fix_grammar("hello,world. this is i."),
        "Hello, world. This is I."
    );
    assert_eq!(change_case("hello world", CaseMode::Title), "Hello World");
}
