//! Lock primitives used by the collections.
//!
//! Regular builds use `parking_lot`. Under `cfg(loom)` the mutex is swapped for
//! loom's model-checked one so the deque's real code runs inside loom models.

#[cfg(not(loom))]
pub(crate) use parking_lot::Mutex;

#[cfg(loom)]
pub(crate) use self::loom_mutex::Mutex;

#[cfg(loom)]
mod loom_mutex {
    /// Wrapper giving `loom::sync::Mutex` the non-poisoning `lock()` of `parking_lot`.
    pub(crate) struct Mutex<T>(loom::sync::Mutex<T>);

    impl<T> Mutex<T> {
        pub(crate) fn new(value: T) -> Self {
            Self(loom::sync::Mutex::new(value))
        }

        pub(crate) fn lock(&self) -> loom::sync::MutexGuard<'_, T> {
            self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }
}
