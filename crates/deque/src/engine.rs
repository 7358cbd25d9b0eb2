//! Deque engine
//!
//! Applies [`DequeOperation`]s to an owned [`Deque`] and answers with
//! [`DequeResponse`]s. Failures are reported in the response rather than
//! returned, so a caller can run a whole script and inspect each step.

use crate::config::DequeConfig;
use crate::deque::Deque;
use crate::error::Result;
use crate::types::{DequeOperation, DequeResponse};

/// Engine that owns a deque and applies operations to it
pub struct DequeEngine<T> {
    deque: Deque<T>,
    config: DequeConfig,

    /// Operations applied so far, including failed ones
    applied: u64,
}

impl<T: Clone> DequeEngine<T> {
    /// Create a new engine with the default config
    pub fn new() -> Self {
        Self::with_config(DequeConfig::default())
    }

    /// Create a new engine with a custom config
    pub fn with_config(config: DequeConfig) -> Self {
        tracing::debug!(
            deque = %config.name,
            capacity = config.initial_capacity,
            "creating deque engine"
        );

        Self {
            deque: Deque::with_capacity(config.initial_capacity),
            config,
            applied: 0,
        }
    }

    pub fn config(&self) -> &DequeConfig {
        &self.config
    }

    pub fn deque(&self) -> &Deque<T> {
        &self.deque
    }

    /// Number of operations applied so far
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Hand back the deque, consuming the engine
    pub fn into_inner(self) -> Deque<T> {
        self.deque
    }

    /// Apply one operation
    pub fn apply_operation(&mut self, operation: DequeOperation<T>) -> DequeResponse<T> {
        self.applied += 1;
        let name = operation.name();

        tracing::trace!(
            deque = %self.config.name,
            operation = name,
            kind = ?operation.operation_type(),
            "applying operation"
        );

        match self.execute(operation) {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(
                    deque = %self.config.name,
                    operation = name,
                    len = self.deque.len(),
                    "Operation failed: {}",
                    e
                );
                DequeResponse::Error(e.to_string())
            }
        }
    }

    fn execute(&mut self, operation: DequeOperation<T>) -> Result<DequeResponse<T>> {
        let response = match operation {
            DequeOperation::PushHead { value } => {
                self.deque.push_head(value);
                DequeResponse::Pushed
            }
            DequeOperation::PushTail { value } => {
                self.deque.push_tail(value);
                DequeResponse::Pushed
            }
            DequeOperation::PopHead => DequeResponse::Popped(self.deque.pop_head()?),
            DequeOperation::PopTail => DequeResponse::Popped(self.deque.pop_tail()?),
            DequeOperation::PeekHead => DequeResponse::Peeked(self.deque.peek_head()?.clone()),
            DequeOperation::PeekTail => DequeResponse::Peeked(self.deque.peek_tail()?.clone()),
            DequeOperation::PeekNth { index } => {
                DequeResponse::PeekedNth(self.deque.peek_nth(index).cloned())
            }
            DequeOperation::Length => DequeResponse::Length(self.deque.len()),
            DequeOperation::IsEmpty => DequeResponse::IsEmpty(self.deque.is_empty()),
            DequeOperation::Clear => {
                self.deque.clear();
                DequeResponse::Cleared
            }
            DequeOperation::Reverse => {
                self.deque.reverse();
                DequeResponse::Reversed
            }
        };

        Ok(response)
    }
}

impl<T: Clone> Default for DequeEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}
