//! # VelocityX Collections
//!
//! General-purpose, concurrency-safe collection types.
//!
//! ## Features
//!
//! - **Deque**: Double-ended queue usable as a stack, a queue, or a fixed-capacity
//!   sliding window, safe to share between threads
//! - **Counter**: Frequency map counting occurrences of hashable values
//!
//! ## Quick Start
//!
//! ```rust
//! use velocityx_collections::{Counter, Deque};
//!
//! // Stack discipline: append and pop work on the same end
//! let stack = Deque::unbounded();
//! stack.append(1);
//! stack.append(2);
//! assert_eq!(stack.pop(), Ok(2));
//!
//! // Sliding window: a capped deque keeps the most recent values
//! let window = Deque::new(3);
//! for i in 0..10 {
//!     window.append(i);
//! }
//! assert_eq!(window.items(), vec![9, 8, 7]);
//!
//! let mut counter = Counter::new();
//! counter.add_items(["a", "b", "a"]);
//! assert_eq!(counter.len(), 2);
//! assert_eq!(counter.get(&"a"), 2);
//! ```
//!
//! ## Thread Safety
//!
//! [`Deque`] guards all of its state with a single lock held for the duration of
//! each call. Individual operations are atomic, but sequences of calls are not:
//! a `len()` followed by `pop()` may observe another thread's changes in between.
//!
//! [`Counter`] is not synchronized. Mutation requires `&mut self`, so sharing it
//! across threads needs external synchronization.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod counter;
pub mod deque;
pub mod metrics;
mod sync;

pub use crate::counter::Counter;
pub use crate::deque::Deque;

/// Common utilities and helper types
pub mod util {
    /// Cache line size for alignment purposes
    pub const CACHE_LINE_SIZE: usize = 64;

    /// Pad a value to cache line size
    #[repr(align(64))]
    pub struct CachePadded<T> {
        value: T,
    }

    impl<T> CachePadded<T> {
        /// Create a new cache-padded value
        #[inline]
        pub const fn new(value: T) -> Self {
            Self { value }
        }

        /// Get a reference to the inner value
        #[inline]
        pub const fn get(&self) -> &T {
            &self.value
        }

        /// Get the inner value
        #[inline]
        pub fn into_inner(self) -> T {
            self.value
        }
    }

    impl<T> core::ops::Deref for CachePadded<T> {
        type Target = T;

        #[inline]
        fn deref(&self) -> &T {
            &self.value
        }
    }

    impl<T: Default> Default for CachePadded<T> {
        fn default() -> Self {
            Self::new(T::default())
        }
    }

    impl<T: core::fmt::Debug> core::fmt::Debug for CachePadded<T> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            core::fmt::Debug::fmt(&self.value, f)
        }
    }
}

/// Error types for collection operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A removal was attempted on a deque holding no elements
    EmptyQueue,
    /// `remove` found no element equal to the requested value
    NotFound,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::EmptyQueue => write!(f, "Queue is empty"),
            Error::NotFound => write!(f, "Item not found in queue"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for collection operations
pub type Result<T> = core::result::Result<T, Error>;
