use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EconError {
    #[error("Failed to allocate facility storage: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EconError>;
