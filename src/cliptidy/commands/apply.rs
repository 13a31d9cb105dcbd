use crate::commands::{CmdMessage, CmdResult, StepReport};
use crate::error::Result;
use crate::model::Transform;

/// Runs `steps` over `text` in order, recording a report for every step.
pub fn run(text: &str, steps: &[Transform]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if steps.is_empty() {
        result.add_message(CmdMessage::info("No steps given, text left as is."));
        return Ok(result.with_output(text.to_string()));
    }

    let mut current = text.to_string();
    let mut reports = Vec::with_capacity(steps.len());

    for step in steps {
        if *step == Transform::Grammar && current.contains('\n') {
            log::debug!("grammar step flattens {} lines into one", current.lines().count());
        }

        let next = step.apply(&current);
        let report = StepReport::new(*step, &current, &next);
        log::debug!(
            "{}: {} -> {} lines, {} -> {} chars",
            step,
            report.lines_before,
            report.lines_after,
            report.chars_before,
            report.chars_after
        );

        if !report.changed {
            result.add_message(CmdMessage::info(format!("{}: nothing to change", step)));
        }
        reports.push(report);
        current = next;
    }

    Ok(result.with_output(current).with_steps(reports))
}
