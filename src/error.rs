use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid protocol: {0}")]
    InvalidProtocol(String),

    #[error("Too many addresses: {count} (max {max})")]
    TooManyAddresses { count: usize, max: usize },

    #[error("Field `{field}` exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    /// The rejected protocol identifier, when that is what failed.
    pub fn offending_protocol(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidProtocol(p) => Some(p),
            _ => None,
        }
    }
}
