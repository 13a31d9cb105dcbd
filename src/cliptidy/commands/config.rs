use crate::commands::{CmdMessage, CmdResult};
use crate::config::TidyConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TidyConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;

            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result.with_config(config))
        }
    }
}
