//! Frequency Counter
//!
//! A multiset backed by a `HashMap` from value to count. Counts only grow: there is
//! no decrement, so a key stays tracked once it has been added.

use core::borrow::Borrow;
use core::hash::Hash;
use std::collections::HashMap;

/// Counts occurrences of hashable values
///
/// # Examples
///
/// ```rust
/// use velocityx_collections::Counter;
///
/// let mut counter = Counter::new();
/// counter.add("a").add("b").add("a");
///
/// assert_eq!(counter.len(), 2);
/// assert_eq!(counter.get("a"), 2);
/// assert_eq!(counter.get("z"), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<T: Eq + Hash> {
    counts: HashMap<T, usize>,
}

impl<T: Eq + Hash> Counter<T> {
    /// Create an empty counter
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Increment the count of `item` by one
    pub fn add(&mut self, item: T) -> &mut Self {
        *self.counts.entry(item).or_insert(0) += 1;
        self
    }

    /// Increment the count of every item, in order
    pub fn add_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.add(item);
        }
        self
    }

    /// Number of distinct items tracked
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no item has been added
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count recorded for `item`, 0 if it was never added
    pub fn get<Q>(&self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(item, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.counts.iter().map(|(item, &count)| (item, count))
    }

    /// The `n` items with the highest counts, highest first
    ///
    /// Items with equal counts come out in unspecified order.
    pub fn most_common(&self, n: usize) -> Vec<(&T, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl<T: Eq + Hash> Default for Counter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Extend<T> for Counter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_items(iter);
    }
}

impl<T: Eq + Hash> FromIterator<T> for Counter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.add_items(iter);
        counter
    }
}
