//! Observability metrics for the calculator stack.
//!
//! Provides counters about evaluation and cache behavior for monitoring and
//! debugging.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics tracking evaluation statistics.
///
/// All metrics use atomic operations for thread-safe updates and reads.
/// Metrics are collected as calculations flow through the stack and can be
/// queried at any time for observability.
#[derive(Debug, Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Total number of calculations evaluated through the stack
    evaluations: AtomicU64,
    /// Total number of requests answered from the cache
    cache_hits: AtomicU64,
    /// Total number of requests that reached the base calculator
    cache_misses: AtomicU64,
}

impl Metrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                evaluations: AtomicU64::new(0),
                cache_hits: AtomicU64::new(0),
                cache_misses: AtomicU64::new(0),
            }),
        }
    }

    /// Record a completed evaluation.
    pub(crate) fn record_evaluation(&self) {
        self.inner.evaluations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request answered from the cache.
    pub(crate) fn record_cache_hit(&self) {
        self.inner.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request that had to be computed.
    pub(crate) fn record_cache_miss(&self) {
        self.inner.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the total number of evaluations.
    pub fn evaluations(&self) -> u64 {
        self.inner.evaluations.load(Ordering::Relaxed)
    }

    /// Get the total number of cache hits.
    pub fn cache_hits(&self) -> u64 {
        self.inner.cache_hits.load(Ordering::Relaxed)
    }

    /// Get the total number of cache misses.
    pub fn cache_misses(&self) -> u64 {
        self.inner.cache_misses.load(Ordering::Relaxed)
    }

    /// Get a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            evaluations: self.evaluations(),
            cache_hits: self.cache_hits(),
            cache_misses: self.cache_misses(),
        }
    }

    /// Reset all metrics to zero.
    ///
    /// Useful for testing or when starting a new monitoring period.
    pub fn reset(&self) {
        self.inner.evaluations.store(0, Ordering::Relaxed);
        self.inner.cache_hits.store(0, Ordering::Relaxed);
        self.inner.cache_misses.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Total number of calculations evaluated through the stack
    pub evaluations: u64,
    /// Total number of requests answered from the cache
    pub cache_hits: u64,
    /// Total number of requests that reached the base calculator
    pub cache_misses: u64,
}

impl MetricsSnapshot {
    /// Calculate the cache hit rate (0.0 to 1.0).
    ///
    /// Returns the ratio of hits to total cache lookups.
    /// Returns 0.0 if no lookups have happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits.saturating_add(self.cache_misses);
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }

    /// Get the total number of cache lookups (hits + misses).
    pub fn total_lookups(&self) -> u64 {
        self.cache_hits.saturating_add(self.cache_misses)
    }
}
