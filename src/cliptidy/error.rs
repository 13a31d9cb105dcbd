use thiserror::Error;

#[derive(Error, Debug)]
pub enum TidyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Unknown step: {0}")]
    UnknownStep(String),
}

pub type Result<T> = std::result::Result<T, TidyError>;
