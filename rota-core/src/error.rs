//! Error types for the rota ecosystem.

use thiserror::Error;

/// Errors that can occur in rota operations.
#[derive(Error, Debug)]
pub enum RotaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Classroom not found: {0}")]
    ClassroomNotFound(String),

    #[error("Invalid slot: {0}")]
    InvalidSlot(String),

    #[error("Could not read schedule: {0}")]
    ScheduleParse(String),

    #[error("Backend rejected the request ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("No remote configured for classroom '{0}'")]
    NoRemoteConfigured(String),
}

/// Result type alias for rota operations.
pub type RotaResult<T> = Result<T, RotaError>;
