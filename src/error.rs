//! Core error types for Weaver

use thiserror::Error;

/// Main error type for Weaver operations
#[derive(Error, Debug)]
pub enum WeaverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Weaver operations
pub type WeaverResult<T> = Result<T, WeaverError>;

impl From<anyhow::Error> for WeaverError {
    fn from(err: anyhow::Error) -> Self {
        WeaverError::Parse(err.to_string())
    }
}
