use crate::error::TidyError;
use crate::transform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Case conversion mode.
///
/// Codes `0..=3` select a conversion; every other code maps to
/// [`CaseMode::Unchanged`], which passes text through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseMode {
    Upper,
    Lower,
    Title,
    Sentence,
    Unchanged(i64),
}

impl CaseMode {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => CaseMode::Upper,
            1 => CaseMode::Lower,
            2 => CaseMode::Title,
            3 => CaseMode::Sentence,
            other => CaseMode::Unchanged(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            CaseMode::Upper => 0,
            CaseMode::Lower => 1,
            CaseMode::Title => 2,
            CaseMode::Sentence => 3,
            CaseMode::Unchanged(code) => *code,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            CaseMode::Upper => Some("upper"),
            CaseMode::Lower => Some("lower"),
            CaseMode::Title => Some("title"),
            CaseMode::Sentence => Some("sentence"),
            CaseMode::Unchanged(_) => None,
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", self.code()),
        }
    }
}

impl FromStr for CaseMode {
    type Err = TidyError;

    /// Accepts mode names and integer codes. Unrecognized *integers* still
    /// parse (to `Unchanged`); unrecognized words do not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CaseMode::Upper),
            "lower" | "lowercase" => Ok(CaseMode::Lower),
            "title" => Ok(CaseMode::Title),
            "sentence" => Ok(CaseMode::Sentence),
            other => other
                .parse::<i64>()
                .map(CaseMode::from_code)
                .map_err(|_| TidyError::UnknownStep(format!("case mode '{}'", s))),
        }
    }
}

/// One step of a transformation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Dedupe,
    Cleanup,
    List,
    Grammar,
    Case(CaseMode),
}

impl Transform {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Transform::Dedupe => transform::remove_duplicates(text),
            Transform::Cleanup => transform::cleanup_format(text),
            Transform::List => transform::convert_to_list(text),
            Transform::Grammar => transform::fix_grammar(text),
            Transform::Case(mode) => transform::change_case(text, *mode),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Transform::Dedupe => "Remove blank and duplicate lines",
            Transform::Cleanup => "Trim lines, collapse spaces, drop blank lines",
            Transform::List => "Convert lines, sentences or comma items to a bulleted list",
            Transform::Grammar => "Fix spacing after punctuation and capitalization (flattens lines)",
            Transform::Case(_) => "Change case (upper, lower, title, sentence)",
        }
    }

    /// The steps listed by `cliptidy steps`, one per kind.
    pub fn catalog() -> Vec<Transform> {
        vec![
            Transform::Dedupe,
            Transform::Cleanup,
            Transform::List,
            Transform::Grammar,
            Transform::Case(CaseMode::Title),
        ]
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Dedupe => write!(f, "dedupe"),
            Transform::Cleanup => write!(f, "cleanup"),
            Transform::List => write!(f, "list"),
            Transform::Grammar => write!(f, "grammar"),
            Transform::Case(mode) => write!(f, "case:{}", mode),
        }
    }
}

impl FromStr for Transform {
    type Err = TidyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Some(mode) = normalized.strip_prefix("case:") {
            return mode.parse().map(Transform::Case);
        }

        match normalized.as_str() {
            "dedupe" | "dedup" => Ok(Transform::Dedupe),
            "cleanup" | "format" => Ok(Transform::Cleanup),
            "list" | "bullets" => Ok(Transform::List),
            "grammar" | "fix" => Ok(Transform::Grammar),
            "upper" => Ok(Transform::Case(CaseMode::Upper)),
            "lower" => Ok(Transform::Case(CaseMode::Lower)),
            "title" => Ok(Transform::Case(CaseMode::Title)),
            "sentence" => Ok(Transform::Case(CaseMode::Sentence)),
            _ => Err(TidyError::UnknownStep(s.to_string())),
        }
    }
}

impl Serialize for Transform {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Transform {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a list of step names, failing on the first unknown one.
pub fn parse_steps<I: AsRef<str>>(names: &[I]) -> crate::error::Result<Vec<Transform>> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}
