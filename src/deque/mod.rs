//! Deque (double-ended queue) implementations
//!
//! This module provides a lock-guarded deque that can be used as a stack, a queue,
//! or a fixed-capacity sliding window.
//!
//! ## Available Deques
//!
//! - [`Deque`]: capped or unbounded deque behind a single mutex
//!
//! ## Choosing a Discipline
//!
//! - Stack: `append` + `pop` (or `append_left` + `pop_left`)
//! - Queue: `append` + `pop_left` (or `append_left` + `pop`)
//! - Sliding window: construct with a positive capacity; inserting into a full deque
//!   evicts the oldest element from the opposite end

pub mod capped;

pub use self::capped::Deque;


#[cfg(all(test, not(loom)))]
mod proptests;
