//! Counter implementations
//!
//! - [`Counter`]: frequency map from hashable values to occurrence counts
//!
//! Counters are not synchronized. They are meant to be owned by a single thread,
//! or wrapped in a lock by the caller.

pub mod frequency;

pub use self::frequency::Counter;
