//! API error types

use thiserror::Error;
use versalign_engine::EngineError;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error, including malformed payloads
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Report an unreadable host payload as a structural engine error
    pub(crate) fn payload(what: &str, err: serde_json::Error) -> Self {
        ApiError::Engine(EngineError::structural(format!("invalid {what}: {err}")))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
