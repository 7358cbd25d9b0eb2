//! Operation and response types for the deque engine

pub mod operation;
pub mod response;

pub use operation::{DequeOperation, OperationType};
pub use response::DequeResponse;
