//! Node storage for the deque
//!
//! Elements live in doubly linked nodes. Nodes are kept in a slot arena and
//! addressed by index, so links are plain `usize` values instead of pointers.

pub mod arena;

pub use arena::{Node, NodeArena, SlotId};
