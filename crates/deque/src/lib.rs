//! Double-ended queue
//!
//! - [`Deque`]: generic container with O(1) push/pop/peek at both ends,
//!   built on doubly linked nodes in a slot arena
//! - [`DequeEngine`]: applies serialisable [`DequeOperation`]s to a deque
//!   and reports [`DequeResponse`]s
//!
//! Head and tail operations on an empty deque fail with
//! [`DequeError::EmptyContainer`]. Indexed access returns `Option` instead.

pub mod config;
pub mod deque;
pub mod engine;
pub mod error;
pub mod iter;
pub mod storage;
pub mod types;

pub use config::DequeConfig;
pub use deque::Deque;
pub use engine::DequeEngine;
pub use error::{DequeError, Result};
pub use iter::{IntoIter, Iter};
pub use types::{DequeOperation, DequeResponse, OperationType};
