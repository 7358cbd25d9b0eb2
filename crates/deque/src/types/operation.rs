//! Deque operation types
//!
//! This module defines the operations that can be scripted against a
//! [`DequeEngine`](crate::DequeEngine).

use serde::{Deserialize, Serialize};

/// Type of operation - read or write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    /// Read operation - does not modify the deque
    Read,
    /// Write operation - modifies the deque
    Write,
}

/// Deque operation types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DequeOperation<T> {
    /// Insert a value before the head
    PushHead { value: T },

    /// Append a value after the tail
    PushTail { value: T },

    /// Remove the head value
    PopHead,

    /// Remove the tail value
    PopTail,

    /// Look at the head value without removing it
    PeekHead,

    /// Look at the tail value without removing it
    PeekTail,

    /// Look at the value `index` positions from the head
    PeekNth { index: usize },

    /// Get the number of values
    Length,

    /// Check if the deque is empty
    IsEmpty,

    /// Remove all values
    Clear,

    /// Reverse the order of the values
    Reverse,
}

impl<T> DequeOperation<T> {
    pub fn operation_type(&self) -> OperationType {
        match self {
            DequeOperation::PushHead { .. }
            | DequeOperation::PushTail { .. }
            | DequeOperation::PopHead
            | DequeOperation::PopTail
            | DequeOperation::Clear
            | DequeOperation::Reverse => OperationType::Write,
            DequeOperation::PeekHead
            | DequeOperation::PeekTail
            | DequeOperation::PeekNth { .. }
            | DequeOperation::Length
            | DequeOperation::IsEmpty => OperationType::Read,
        }
    }

    /// Name of the deque method this operation maps to
    pub fn name(&self) -> &'static str {
        match self {
            DequeOperation::PushHead { .. } => "push_head",
            DequeOperation::PushTail { .. } => "push_tail",
            DequeOperation::PopHead => "pop_head",
            DequeOperation::PopTail => "pop_tail",
            DequeOperation::PeekHead => "peek_head",
            DequeOperation::PeekTail => "peek_tail",
            DequeOperation::PeekNth { .. } => "peek_nth",
            DequeOperation::Length => "len",
            DequeOperation::IsEmpty => "is_empty",
            DequeOperation::Clear => "clear",
            DequeOperation::Reverse => "reverse",
        }
    }
}
