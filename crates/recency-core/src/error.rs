//! Error types for cache construction and configuration

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Invalid capacity: {0} (capacity must be at least 1)")]
    InvalidCapacity(usize),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;
