//! Error types for deque operations

use thiserror::Error;

/// Result type for deque operations
pub type Result<T> = std::result::Result<T, DequeError>;

/// Deque errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// An operation that needs at least one element hit an empty deque
    #[error("Empty container: {operation} requires at least one element")]
    EmptyContainer { operation: &'static str },
}

impl DequeError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        DequeError::EmptyContainer { operation }
    }
}
