//! Deque response types

use serde::{Deserialize, Serialize};

/// Response types for deque operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DequeResponse<T> {
    /// Value pushed at either end
    Pushed,

    /// Value removed from either end
    Popped(T),

    /// Value at either end
    Peeked(T),

    /// Value at an index, if the index was in range
    PeekedNth(Option<T>),

    /// Number of values
    Length(usize),

    /// Empty status
    IsEmpty(bool),

    /// Deque cleared
    Cleared,

    /// Deque reversed
    Reversed,

    /// Operation failed
    Error(String),
}

impl<T> DequeResponse<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, DequeResponse::Error(_))
    }
}
