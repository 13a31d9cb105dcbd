//! # Rendering
//!
//! Turns command results into terminal strings. Functions return `String`s and
//! the handlers decide whether they go to stdout or stderr. Colors come from
//! `colored`, which turns itself off when the stream is not a terminal or
//! `NO_COLOR` is set.

use cliptidy::api::{CmdMessage, MessageLevel, StepReport};
use cliptidy::model::{CaseMode, Transform};
use colored::*;
use unicode_width::UnicodeWidthStr;

const ARROW: &str = "→";

/// Renders messages one per line. Info messages are only included when asked for.
pub fn render_messages(messages: &[CmdMessage], include_info: bool) -> String {
    messages
        .iter()
        .filter(|m| include_info || m.level != MessageLevel::Info)
        .map(|m| {
            let styled = match m.level {
                MessageLevel::Info => m.content.dimmed(),
                MessageLevel::Success => m.content.green(),
                MessageLevel::Warning => m.content.yellow(),
                MessageLevel::Error => m.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

/// Renders one aligned row per pipeline step:
/// `  1. cleanup      4 → 3 lines   52 → 40 chars`
pub fn render_report(steps: &[StepReport]) -> String {
    if steps.is_empty() {
        return format!("{}\n", "No steps were applied.".dimmed());
    }

    let names: Vec<String> = steps.iter().map(|r| r.step.to_string()).collect();
    let name_width = names.iter().map(|n| n.width()).max().unwrap_or(0);

    let mut output = String::new();
    for (i, (report, name)) in steps.iter().zip(&names).enumerate() {
        let lines = format!(
            "{:>4} {} {:<4} lines",
            report.lines_before, ARROW, report.lines_after
        );
        let chars = format!(
            "{:>6} {} {:<6} chars",
            report.chars_before, ARROW, report.chars_after
        );
        let name_cell = format!("{}{}", name, pad(name_width - name.width()));
        let name_cell = if report.changed {
            name_cell.bold()
        } else {
            name_cell.dimmed()
        };

        output.push_str(&format!("{:>3}. {} {} {}\n", i + 1, name_cell, lines, chars));
    }
    output
}

/// Renders the step catalog for `cliptidy steps`.
pub fn render_steps(steps: &[Transform]) -> String {
    let rows: Vec<(String, &str)> = steps
        .iter()
        .map(|step| {
            let name = match step {
                Transform::Case(_) => "case:<mode>".to_string(),
                other => other.to_string(),
            };
            (name, step.description())
        })
        .collect();
    let width = rows.iter().map(|(name, _)| name.width()).max().unwrap_or(0);

    let mut output = String::new();
    for (name, description) in &rows {
        output.push_str(&format!(
            "  {}{}  {}\n",
            name.bold(),
            pad(width - name.width()),
            description
        ));
    }

    let modes: Vec<String> = [
        CaseMode::Upper,
        CaseMode::Lower,
        CaseMode::Title,
        CaseMode::Sentence,
    ]
    .iter()
    .map(|mode| format!("{} ({})", mode, mode.code()))
    .collect();
    output.push('\n');
    output.push_str(&format!(
        "{}\n",
        format!("Case modes: {}; other codes leave text unchanged.", modes.join(", ")).dimmed()
    ));
    output
}

pub fn render_config(values: &[(&str, String)]) -> String {
    values
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

fn pad(width: usize) -> String {
    " ".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliptidy::api::CmdMessage;

    fn report(step: Transform, before: &str, after: &str) -> StepReport {
        StepReport::new(step, before, after)
    }

    #[test]
    fn test_render_messages_empty() {
        assert!(render_messages(&[], true).is_empty());
    }

    #[test]
    fn test_render_messages_hides_info_unless_asked() {
        let messages = vec![
            CmdMessage::info("Info message"),
            CmdMessage::warning("Warning message"),
        ];

        let quiet = render_messages(&messages, false);
        assert!(!quiet.contains("Info message"));
        assert!(quiet.contains("Warning message"));

        let loud = render_messages(&messages, true);
        assert!(loud.contains("Info message"));
        assert_eq!(loud.lines().count(), 2);
    }

    #[test]
    fn test_render_report_rows() {
        let steps = vec![
            report(Transform::Cleanup, "a  b\n\nc", "a b\nc"),
            report(Transform::Case(CaseMode::Title), "a b\nc", "A B\nC"),
        ];
        let output = render_report(&steps);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("1. "));
        assert!(lines[0].contains("cleanup"));
        assert!(lines[0].contains("3 → 2"));
        assert!(lines[1].contains("case:title"));
    }

    #[test]
    fn test_render_report_empty() {
        assert!(render_report(&[]).contains("No steps were applied."));
    }

    #[test]
    fn test_render_steps_lists_catalog() {
        let output = render_steps(&Transform::catalog());
        for name in ["dedupe", "cleanup", "list", "grammar", "case:<mode>"] {
            assert!(output.contains(name), "missing {} in {}", name, output);
        }
        assert!(output.contains("sentence (3)"));
    }

    #[test]
    fn test_render_config() {
        let output = render_config(&[("pipeline", "cleanup,dedupe".to_string())]);
        assert_eq!(output, "pipeline = cleanup,dedupe\n");
    }
}
