//! Error types for YantraSim

use thiserror::Error;

/// YantraSim error type
#[derive(Error, Debug)]
pub enum YantraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown behavior id: {0}")]
    UnknownBehavior(i32),
}

impl From<toml::de::Error> for YantraError {
    fn from(e: toml::de::Error) -> Self {
        YantraError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, YantraError>;
