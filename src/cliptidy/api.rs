//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients (the bundled CLI, an editor plugin, a clipboard
//! manager).
//!
//! The facade:
//! - **Dispatches** to the command functions
//! - **Normalizes inputs** (step names → [`Transform`]s, empty pipeline → configured default)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own beyond what the config command needs, and never
//! formats output. Callers that only want one transformation and no report can
//! skip the facade and call [`crate::transform`] directly.

use crate::commands;
use crate::config::TidyConfig;
use crate::error::Result;
use crate::model::{parse_steps, Transform};
use std::path::{Path, PathBuf};

pub struct TidyApi {
    config: TidyConfig,
    config_dir: PathBuf,
}

impl TidyApi {
    /// Loads the configuration found in `config_dir` (defaults if absent).
    pub fn new<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();
        let config = TidyConfig::load(&config_dir)?;
        Ok(Self { config, config_dir })
    }

    pub fn with_config<P: AsRef<Path>>(config_dir: P, config: TidyConfig) -> Self {
        Self {
            config,
            config_dir: config_dir.as_ref().to_path_buf(),
        }
    }

    /// Applies `steps` to `text`, or the configured pipeline when `steps` is empty.
    pub fn apply(&self, text: &str, steps: &[Transform]) -> Result<commands::CmdResult> {
        let steps = if steps.is_empty() {
            log::debug!("no steps given, using configured pipeline");
            self.config.pipeline.as_slice()
        } else {
            steps
        };
        commands::apply::run(text, steps)
    }

    pub fn apply_named<I: AsRef<str>>(
        &self,
        text: &str,
        names: &[I],
    ) -> Result<commands::CmdResult> {
        let steps = parse_steps(names)?;
        self.apply(text, &steps)
    }

    /// Runs a config action and refreshes the in-memory copy after a change.
    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn config_values(&self) -> &TidyConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StepReport};
