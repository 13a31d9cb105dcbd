//! # Configuration
//!
//! cliptidy keeps a small JSON file, `config.json`, in its config directory.
//! The CLI resolves that directory from `CLIPTIDY_HOME` when set, otherwise
//! from the OS config location (via the `directories` crate).
//!
//! A missing file means defaults; missing fields take their defaults too.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `pipeline` | `cleanup,dedupe` | Steps `cliptidy run` applies when none are given |
//! | `copy-result` | `false` | Copy the output to the clipboard after each run |
//! | `show-report` | `false` | Print the per-step report after each run |

use crate::error::Result;
use crate::model::{parse_steps, Transform};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_PIPELINE: &str = "pipeline";
pub const KEY_COPY_RESULT: &str = "copy-result";
pub const KEY_SHOW_REPORT: &str = "show-report";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TidyConfig {
    /// Steps applied when a run names none
    #[serde(default = "default_pipeline")]
    pub pipeline: Vec<Transform>,

    #[serde(default)]
    pub copy_result: bool,

    #[serde(default)]
    pub show_report: bool,
}

fn default_pipeline() -> Vec<Transform> {
    vec![Transform::Cleanup, Transform::Dedupe]
}

impl Default for TidyConfig {
    fn default() -> Self {
        Self {
            pipeline: default_pipeline(),
            copy_result: false,
            show_report: false,
        }
    }
}

impl TidyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TidyConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_PIPELINE => Some(
                self.pipeline
                    .iter()
                    .map(|step| step.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            KEY_COPY_RESULT => Some(self.copy_result.to_string()),
            KEY_SHOW_REPORT => Some(self.show_report.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its textual form. The error is a user-facing message.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_PIPELINE => {
                let names: Vec<&str> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .collect();
                self.pipeline = parse_steps(&names).map_err(|e| e.to_string())?;
                Ok(())
            }
            KEY_COPY_RESULT => {
                self.copy_result = parse_bool(value)?;
                Ok(())
            }
            KEY_SHOW_REPORT => {
                self.show_report = parse_bool(value)?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        [KEY_PIPELINE, KEY_COPY_RESULT, KEY_SHOW_REPORT]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
            .collect()
    }
}

fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("Expected true or false, got '{}'", other)),
    }
}
