use assert_cmd::Command;
use predicates::prelude::*;

fn cliptidy(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("cliptidy").unwrap();
    cmd.env("CLIPTIDY_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_dedupe_from_stdin() {
    let home = tempfile::tempdir().unwrap();
    cliptidy(home.path())
        .arg("dedupe")
        .write_stdin("a\na\nb\n\n")
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn test_list_from_arguments() {
    let home = tempfile::tempdir().unwrap();
    cliptidy(home.path())
        .args(["list", "Buy", "milk.", "Walk", "dog.", "Call", "mom."])
        .assert()
        .success()
        .stdout("• Buy milk.\n• Walk dog.\n• Call mom.\n");
}

#[test]
fn test_grammar_flattens_lines() {
    let home = tempfile::tempdir().unwrap();
    cliptidy(home.path())
        .arg("grammar")
        .write_stdin("hello,world.\nthis is i.\n")
        .assert()
        .success()
        .stdout("Hello, world. This is I.\n");
}

#[test]
fn test_case_modes() {
    let home = tempfile::tempdir().unwrap();
    cliptidy(home.path())
        .args(["case", "title", "hello world"])
        .assert()
        .success()
        .stdout("Hello World\n");

    cliptidy(home.path())
        .args(["case", "99", "Leave Me"])
        .assert()
        .success()
        .stdout("Leave Me\n");
}

#[test]
fn test_unknown_case_name_fails() {
    let home = tempfile::tempdir().unwrap();
    cliptidy(home.path())
        .args(["case", "camel", "x"])
        .assert()
        .failure();
}

#[test]
fn test_file_input_with_report() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("note.txt");
    std::fs::write(&file, "  one   two \n\n one two\nthree\n").unwrap();

    cliptidy(home.path())
        .args(["run", "-s", "cleanup", "-s", "dedupe", "--report", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout("one two\nthree\n")
        .stderr(predicate::str::contains("cleanup"))
        .stderr(predicate::str::contains("dedupe"));
}

#[test]
fn test_naked_run_uses_configured_pipeline() {
    let home = tempfile::tempdir().unwrap();

    cliptidy(home.path())
        .args(["config", "pipeline", "dedupe,upper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pipeline set to dedupe,case:upper"));

    cliptidy(home.path())
        .write_stdin("x\nx\ny\n")
        .assert()
        .success()
        .stdout("X\nY\n");
}

#[test]
fn test_config_show_all_and_key() {
    let home = tempfile::tempdir().unwrap();

    cliptidy(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("pipeline = cleanup,dedupe"))
        .stdout(predicate::str::contains("copy-result = false"));

    cliptidy(home.path())
        .args(["config", "show-report"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_config_rejects_unknown_step() {
    let home = tempfile::tempdir().unwrap();
    cliptidy(home.path())
        .args(["config", "pipeline", "list,sparkle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown step: sparkle"));

    assert!(!home.path().join("config.json").exists());
}

#[test]
fn test_no_input_is_an_error() {
    let home = tempfile::tempdir().unwrap();
    cliptidy(home.path())
        .arg("cleanup")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input"));
}

#[test]
fn test_steps_lists_everything() {
    let home = tempfile::tempdir().unwrap();
    cliptidy(home.path())
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("dedupe"))
        .stdout(predicate::str::contains("grammar"))
        .stdout(predicate::str::contains("case:<mode>"));
}

#[test]
fn test_flags_after_text_are_not_transformed() {
    let home = tempfile::tempdir().unwrap();
    let no_tools = tempfile::tempdir().unwrap();

    cliptidy(home.path())
        .env("PATH", no_tools.path())
        .args(["case", "title", "hello", "world", "--copy"])
        .assert()
        .success()
        .stdout("Hello World\n")
        .stderr(predicate::str::contains("Failed to copy"));

    cliptidy(home.path())
        .args(["list", "milk,", "eggs", "--report"])
        .assert()
        .success()
        .stdout("• milk\n• eggs\n")
        .stderr(predicate::str::contains("1. list"));
}

#[test]
fn test_dashed_text_after_double_dash() {
    let home = tempfile::tempdir().unwrap();
    cliptidy(home.path())
        .args(["case", "upper", "--", "-r", "milk"])
        .assert()
        .success()
        .stdout("-R MILK\n")
        .stderr(predicate::str::contains("case:upper").not());
}

#[test]
fn test_copy_failure_is_only_a_warning() {
    let home = tempfile::tempdir().unwrap();
    let no_tools = tempfile::tempdir().unwrap();

    cliptidy(home.path())
        .env("PATH", no_tools.path())
        .args(["--copy", "dedupe"])
        .write_stdin("a\na\n")
        .assert()
        .success()
        .stdout("a\n")
        .stderr(predicate::str::contains("Failed to copy to clipboard"));
}
