//! Performance Metrics Module
//!
//! Operation metrics for the collections in this crate. The [`Deque`](crate::Deque)
//! records every call through [`AtomicMetrics`] and exposes a point-in-time
//! [`PerformanceMetrics`] snapshot through the [`MetricsCollector`] trait.
//!
//! Collection is compiled in with the `metrics` feature (on by default). Without it
//! every recording call is a no-op and snapshots are all zeros.

#[cfg(feature = "metrics")]
use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

/// Snapshot of the metrics recorded by a data structure
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PerformanceMetrics {
    /// Total number of operations performed
    pub total_operations: u64,
    /// Number of successful operations
    pub successful_operations: u64,
    /// Number of failed operations (empty queue, value not found)
    pub failed_operations: u64,
    /// Number of elements evicted to honour a capacity bound
    pub evictions: u64,
    /// Average operation time in nanoseconds
    pub avg_operation_time_ns: u64,
    /// Maximum operation time in nanoseconds
    pub max_operation_time_ns: u64,
    /// Element count observed after the most recent operation
    pub current_len: usize,
    /// Largest element count observed
    pub peak_len: usize,
}

impl PerformanceMetrics {
    /// Calculate success rate as percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_operations == 0 {
            0.0
        } else {
            (self.successful_operations as f64 / self.total_operations as f64) * 100.0
        }
    }

    /// Calculate failure rate as percentage
    pub fn failure_rate(&self) -> f64 {
        if self.total_operations == 0 {
            0.0
        } else {
            (self.failed_operations as f64 / self.total_operations as f64) * 100.0
        }
    }

    /// Calculate how many operations caused an eviction, as percentage
    pub fn eviction_rate(&self) -> f64 {
        if self.total_operations == 0 {
            0.0
        } else {
            (self.evictions as f64 / self.total_operations as f64) * 100.0
        }
    }

    /// Get average operation time as Duration
    pub fn avg_operation_time(&self) -> Duration {
        Duration::from_nanos(self.avg_operation_time_ns)
    }

    /// Get maximum operation time as Duration
    pub fn max_operation_time(&self) -> Duration {
        Duration::from_nanos(self.max_operation_time_ns)
    }
}

/// Internal atomic metrics collection
#[cfg(feature = "metrics")]
#[derive(Debug)]
pub struct AtomicMetrics {
    total_operations: AtomicU64,
    successful_operations: AtomicU64,
    failed_operations: AtomicU64,
    evictions: AtomicU64,
    total_time_ns: AtomicU64,
    max_time_ns: AtomicU64,
    current_len: AtomicUsize,
    peak_len: AtomicUsize,
}

#[cfg(feature = "metrics")]
impl Default for AtomicMetrics {
    fn default() -> Self {
        Self {
            total_operations: AtomicU64::new(0),
            successful_operations: AtomicU64::new(0),
            failed_operations: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            total_time_ns: AtomicU64::new(0),
            max_time_ns: AtomicU64::new(0),
            current_len: AtomicUsize::new(0),
            peak_len: AtomicUsize::new(0),
        }
    }
}

#[cfg(feature = "metrics")]
impl AtomicMetrics {
    /// Record a successful operation with its duration
    pub fn record_success(&self, duration: Duration) {
        let duration_ns = duration.as_nanos() as u64;

        self.total_operations.fetch_add(1, Ordering::Relaxed);
        self.successful_operations.fetch_add(1, Ordering::Relaxed);
        self.total_time_ns.fetch_add(duration_ns, Ordering::Relaxed);

        let mut current_max = self.max_time_ns.load(Ordering::Relaxed);
        while duration_ns > current_max {
            match self.max_time_ns.compare_exchange_weak(
                current_max,
                duration_ns,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(x) => current_max = x,
            }
        }
    }

    /// Record a failed operation
    pub fn record_failure(&self) {
        self.total_operations.fetch_add(1, Ordering::Relaxed);
        self.failed_operations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record `count` evicted elements
    pub fn record_evictions(&self, count: u64) {
        if count > 0 {
            self.evictions.fetch_add(count, Ordering::Relaxed);
        }
    }

    /// Update the observed element count
    pub fn update_len(&self, len: usize) {
        self.current_len.store(len, Ordering::Relaxed);

        let mut current_peak = self.peak_len.load(Ordering::Relaxed);
        while len > current_peak {
            match self.peak_len.compare_exchange_weak(
                current_peak,
                len,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(x) => current_peak = x,
            }
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> PerformanceMetrics {
        let total_ops = self.total_operations.load(Ordering::Relaxed);
        let total_time = self.total_time_ns.load(Ordering::Relaxed);

        PerformanceMetrics {
            total_operations: total_ops,
            successful_operations: self.successful_operations.load(Ordering::Relaxed),
            failed_operations: self.failed_operations.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            avg_operation_time_ns: if total_ops > 0 { total_time / total_ops } else { 0 },
            max_operation_time_ns: self.max_time_ns.load(Ordering::Relaxed),
            current_len: self.current_len.load(Ordering::Relaxed),
            peak_len: self.peak_len.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.total_operations.store(0, Ordering::Relaxed);
        self.successful_operations.store(0, Ordering::Relaxed);
        self.failed_operations.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        self.total_time_ns.store(0, Ordering::Relaxed);
        self.max_time_ns.store(0, Ordering::Relaxed);
        // Length reflects current state, keep it; the peak restarts from it.
        let len = self.current_len.load(Ordering::Relaxed);
        self.peak_len.store(len, Ordering::Relaxed);
    }
}

/// No-op metrics used when the `metrics` feature is disabled
#[cfg(not(feature = "metrics"))]
#[derive(Debug, Default)]
pub struct AtomicMetrics;

#[cfg(not(feature = "metrics"))]
#[allow(missing_docs)]
impl AtomicMetrics {
    #[inline]
    pub fn record_success(&self, _duration: Duration) {}
    #[inline]
    pub fn record_failure(&self) {}
    #[inline]
    pub fn record_evictions(&self, _count: u64) {}
    #[inline]
    pub fn update_len(&self, _len: usize) {}
    pub fn snapshot(&self) -> PerformanceMetrics {
        PerformanceMetrics::default()
    }
    #[inline]
    pub fn reset(&self) {}
}

/// Trait for data structures that support performance metrics
pub trait MetricsCollector {
    /// Get current performance metrics
    fn metrics(&self) -> PerformanceMetrics;

    /// Reset all metrics
    fn reset_metrics(&self);

    /// Enable or disable metrics collection
    fn set_metrics_enabled(&self, enabled: bool);

    /// Check if metrics collection is enabled
    fn is_metrics_enabled(&self) -> bool;
}
