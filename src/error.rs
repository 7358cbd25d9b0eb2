//! Error types for the smoke harness

use deque::DequeError;
use thiserror::Error;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Harness errors
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Deque error: {0}")]
    Deque(#[from] DequeError),

    #[error("Check failed for {what}: expected {expected}, observed {observed}")]
    CheckFailed {
        what: &'static str,
        expected: String,
        observed: String,
    },

    #[error("Operation {index} ({operation}) failed: {message}")]
    OperationFailed {
        index: usize,
        operation: &'static str,
        message: String,
    },

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
