use crate::config::TidyConfig;
use crate::model::Transform;

pub mod apply;
pub mod config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }

    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }
}

/// Size of the text before and after one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Transform,
    pub lines_before: usize,
    pub lines_after: usize,
    pub chars_before: usize,
    pub chars_after: usize,
    pub changed: bool,
}

impl StepReport {
    pub fn new(step: Transform, before: &str, after: &str) -> Self {
        Self {
            step,
            lines_before: count_lines(before),
            lines_after: count_lines(after),
            chars_before: before.chars().count(),
            chars_after: after.chars().count(),
            changed: before != after,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub output: Option<String>,
    pub steps: Vec<StepReport>,
    pub config: Option<TidyConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_steps(mut self, steps: Vec<StepReport>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_config(mut self, config: TidyConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Number of lines as the transformations see them: empty text has none.
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}
