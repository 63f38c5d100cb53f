//! Capped Double-Ended Queue Implementation
//!
//! This module implements a lock-guarded deque that can act as a stack, a queue,
//! or a fixed-capacity sliding window. All state sits behind a single mutex that
//! is held for the duration of each call.
//!
//! ## Ends
//!
//! The two ends are called *front* and *back*:
//! - [`Deque::append`] / [`Deque::pop`] work on the front, giving LIFO behaviour
//! - [`Deque::append`] + [`Deque::pop_left`] give FIFO behaviour
//! - [`Deque::append_left`] inserts at the back, so it pairs with `pop_left` as a
//!   stack and with `pop` as a queue
//!
//! [`Deque::items`] lists elements front to back.
//!
//! ## Capacity
//!
//! A deque built with a positive capacity never holds more than that many
//! elements. An insertion into a full deque first evicts exactly one element from
//! the opposite end, so the deque retains the most recent values inserted from
//! one side. Insertions never fail and never block.
//!
//! ## Performance Characteristics
//!
//! - **append / append_left / pop / pop_left**: O(1)
//! - **extend**: O(k) for k values, under a single lock acquisition
//! - **remove / count / items**: O(n)
//!
//! ## Example
//!
//! ```rust
//! use velocityx_collections::Deque;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let deque = Arc::new(Deque::unbounded());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let deque = Arc::clone(&deque);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 deque.append(t * 100 + i);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(deque.len(), 400);
//! ```

use crate::metrics::{AtomicMetrics, MetricsCollector, PerformanceMetrics};
use crate::sync::Mutex;
use crate::util::CachePadded;
use crate::{Error, Result};
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};
use log::{debug, trace};
use std::collections::VecDeque;
use std::time::Instant;

/// One of the two ends of a [`Deque`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Front,
    Back,
}

impl End {
    fn opposite(self) -> Self {
        match self {
            End::Front => End::Back,
            End::Back => End::Front,
        }
    }
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            End::Front => f.write_str("front"),
            End::Back => f.write_str("back"),
        }
    }
}

/// A double-ended queue with an optional capacity bound, safe to share between threads
///
/// # Type Parameters
///
/// * `T` - The type of elements stored in the deque
///
/// # Thread Safety
///
/// Every method takes `&self` and holds the internal lock for its whole duration,
/// so each call is atomic with respect to the others. No transaction spans two
/// calls. Share the deque with [`Arc`](std::sync::Arc).
///
/// # Examples
///
/// ```rust
/// use velocityx_collections::{Deque, Error};
///
/// let deque: Deque<i32> = Deque::new(3);
///
/// deque.extend([1, 2, 3, 4]);
/// assert_eq!(deque.items(), vec![4, 3, 2]);
///
/// assert_eq!(deque.pop(), Ok(4));
/// assert_eq!(deque.pop_left(), Ok(2));
/// assert_eq!(deque.pop_left(), Ok(3));
/// assert_eq!(deque.pop(), Err(Error::EmptyQueue));
/// ```
pub struct Deque<T> {
    // Element storage, front to back
    items: CachePadded<Mutex<VecDeque<T>>>,

    // Maximum length, 0 when unbounded. Fixed at construction.
    capacity: usize,

    metrics: AtomicMetrics,
    metrics_enabled: AtomicBool,
}

impl<T> Deque<T> {
    /// Create a new deque with the given capacity
    ///
    /// A positive `capacity` bounds the deque to that many elements. Zero or a
    /// negative value makes the deque unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use velocityx_collections::Deque;
    ///
    /// let bounded: Deque<u8> = Deque::new(10);
    /// assert_eq!(bounded.capacity(), Some(10));
    ///
    /// let unbounded: Deque<u8> = Deque::new(-1);
    /// assert_eq!(unbounded.capacity(), None);
    /// ```
    pub fn new(capacity: isize) -> Self {
        let capacity = usize::try_from(capacity).unwrap_or_else(|_| {
            debug!("negative deque capacity {} treated as unbounded", capacity);
            0
        });
        Self::with_capacity(capacity)
    }

    /// Create a deque that may grow to an arbitrary length
    pub fn unbounded() -> Self {
        Self::with_capacity(0)
    }

    /// Create a deque holding at most `capacity` elements
    ///
    /// A `capacity` of 0 means unbounded, same as [`Deque::unbounded`].
    pub fn bounded(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn with_capacity(capacity: usize) -> Self {
        let initial = if capacity > 0 { capacity.min(1024) } else { 0 };

        Self {
            items: CachePadded::new(Mutex::new(VecDeque::with_capacity(initial))),
            capacity,
            metrics: AtomicMetrics::default(),
            metrics_enabled: AtomicBool::new(true),
        }
    }

    /// The capacity bound, or `None` for an unbounded deque
    pub fn capacity(&self) -> Option<usize> {
        if self.capacity > 0 {
            Some(self.capacity)
        } else {
            None
        }
    }

    /// Insert a value at the front
    ///
    /// If the deque is bounded and full, one element is evicted from the back first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use velocityx_collections::Deque;
    ///
    /// let deque = Deque::new(2);
    /// deque.append("a");
    /// deque.append("b");
    /// deque.append("c");
    /// assert_eq!(deque.items(), vec!["c", "b"]);
    /// ```
    pub fn append(&self, value: T) {
        self.insert(End::Front, value);
    }

    /// Insert a value at the back
    ///
    /// If the deque is bounded and full, one element is evicted from the front first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use velocityx_collections::Deque;
    ///
    /// let deque = Deque::new(2);
    /// deque.append_left(1);
    /// deque.append_left(2);
    /// deque.append_left(3);
    /// assert_eq!(deque.items(), vec![2, 3]);
    /// ```
    pub fn append_left(&self, value: T) {
        self.insert(End::Back, value);
    }

    /// Insert each value at the front, in iteration order
    ///
    /// Equivalent to calling [`Deque::append`] once per value, except that the lock
    /// is taken once for the whole batch. A bounded deque evicts at most one element
    /// per inserted value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use velocityx_collections::Deque;
    ///
    /// let deque = Deque::unbounded();
    /// deque.extend(vec!["hello", "world"]);
    /// assert_eq!(deque.items(), vec!["world", "hello"]);
    /// ```
    pub fn extend<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.start_timer();
        let mut items = self.items.lock();

        let mut evicted = 0;
        for value in values {
            if self.make_room(&mut items, End::Back) {
                evicted += 1;
            }
            items.push_front(value);
        }

        let len = items.len();
        drop(items);
        self.record_success(start, evicted, len);
    }

    /// Remove and return the element at the front
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the deque holds no elements.
    pub fn pop(&self) -> Result<T> {
        self.take(End::Front)
    }

    /// Remove and return the element at the back
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the deque holds no elements.
    pub fn pop_left(&self) -> Result<T> {
        self.take(End::Back)
    }

    /// Remove the first element equal to `value`, scanning front to back
    ///
    /// Later duplicates are left in place. The removed element is returned.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyQueue`] if the deque holds no elements
    /// * [`Error::NotFound`] if no element is equal to `value`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use velocityx_collections::{Deque, Error};
    ///
    /// let deque = Deque::unbounded();
    /// deque.extend([1, 2, 1]);
    ///
    /// assert_eq!(deque.remove(&1), Ok(1));
    /// assert_eq!(deque.count(&1), 1);
    /// assert_eq!(deque.remove(&7), Err(Error::NotFound));
    /// ```
    pub fn remove(&self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let start = self.start_timer();
        let mut items = self.items.lock();

        if items.is_empty() {
            drop(items);
            self.record_failure();
            return Err(Error::EmptyQueue);
        }

        let position = items.iter().position(|item| item == value);
        let removed = position.and_then(|index| items.remove(index));

        let len = items.len();
        drop(items);

        match removed {
            Some(item) => {
                self.record_success(start, 0, len);
                Ok(item)
            }
            None => {
                self.record_failure();
                Err(Error::NotFound)
            }
        }
    }

    /// Count the elements equal to `value`
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.items.lock().iter().filter(|item| *item == value).count()
    }

    /// Current number of elements
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Check if the deque holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Copy of all elements, front to back
    ///
    /// This is a point-in-time snapshot, not a live view, and costs O(n). Meant for
    /// diagnostics.
    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.lock().iter().cloned().collect()
    }

    /// Remove all elements
    pub fn clear(&self) {
        let start = self.start_timer();
        let mut items = self.items.lock();
        let dropped = items.len();
        items.clear();
        drop(items);

        trace!("cleared deque, dropped {} elements", dropped);
        self.record_success(start, 0, 0);
    }

    fn insert(&self, end: End, value: T) {
        let start = self.start_timer();
        let mut items = self.items.lock();

        let evicted = self.make_room(&mut items, end.opposite());
        match end {
            End::Front => items.push_front(value),
            End::Back => items.push_back(value),
        }

        let len = items.len();
        drop(items);
        self.record_success(start, u64::from(evicted), len);
    }

    fn take(&self, end: End) -> Result<T> {
        let start = self.start_timer();
        let mut items = self.items.lock();

        let taken = match end {
            End::Front => items.pop_front(),
            End::Back => items.pop_back(),
        };

        let len = items.len();
        drop(items);

        match taken {
            Some(value) => {
                self.record_success(start, 0, len);
                Ok(value)
            }
            None => {
                self.record_failure();
                Err(Error::EmptyQueue)
            }
        }
    }

    /// Evict a single element from `end` if the deque is bounded and full.
    /// Returns whether an element was evicted.
    fn make_room(&self, items: &mut VecDeque<T>, end: End) -> bool {
        if self.capacity == 0 || items.len() < self.capacity {
            return false;
        }

        let evicted = match end {
            End::Front => items.pop_front(),
            End::Back => items.pop_back(),
        };
        trace!("deque at capacity {}, evicted from {}", self.capacity, end);
        evicted.is_some()
    }

    fn start_timer(&self) -> Option<Instant> {
        if cfg!(feature = "metrics") && self.is_metrics_enabled() {
            Some(Instant::now())
        } else {
            None
        }
    }

    fn record_success(&self, start: Option<Instant>, evicted: u64, len: usize) {
        if let Some(start) = start {
            self.metrics.record_success(start.elapsed());
            self.metrics.record_evictions(evicted);
            self.metrics.update_len(len);
        }
    }

    fn record_failure(&self) {
        if self.is_metrics_enabled() {
            self.metrics.record_failure();
        }
    }
}

impl<T> MetricsCollector for Deque<T> {
    fn metrics(&self) -> PerformanceMetrics {
        self.metrics.snapshot()
    }

    fn reset_metrics(&self) {
        self.metrics.reset();
    }

    fn set_metrics_enabled(&self, enabled: bool) {
        self.metrics_enabled.store(enabled, Ordering::Relaxed);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics_enabled.load(Ordering::Relaxed)
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Diagnostic rendering of the contents, front to back
///
/// Takes the lock and walks every element. The format is not stable.
impl<T: fmt::Debug> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.items.lock();
        f.debug_list().entries(items.iter()).finish()
    }
}
