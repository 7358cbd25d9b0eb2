//! Deque engine configuration

use serde::{Deserialize, Serialize};

/// Configuration for a [`DequeEngine`](crate::DequeEngine)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DequeConfig {
    /// Label attached to log events
    pub name: String,

    /// Node slots reserved up front
    pub initial_capacity: usize,
}

impl Default for DequeConfig {
    fn default() -> Self {
        Self {
            name: "deque".to_string(),
            initial_capacity: 0,
        }
    }
}

impl DequeConfig {
    /// Create a new config with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the number of reserved node slots
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
