//! Ports (interfaces) for the application layer.
//!
//! In hexagonal architecture, ports define the interfaces that the application
//! layer needs. Infrastructure adapters implement these ports.

use std::fmt::Debug;

use crate::domain::request::{CacheKey, CalculationRequest};

/// Port for memoization storage.
///
/// This abstraction allows the memoizing layer to store and retrieve results
/// without depending on specific concurrent data structure implementations.
/// Infrastructure provides the concrete implementation (SharedCache).
///
/// Lookup and store are individually atomic but not combined: two threads
/// racing on the same key may both compute the result and store it. Because
/// evaluation is deterministic both stores write the same value, so callers
/// never observe an inconsistency, only an occasional duplicate computation.
pub trait CacheStore: Send + Sync + Debug {
    /// Look up a previously stored result.
    ///
    /// # Arguments
    /// * `key` - The cache key to look up
    ///
    /// # Returns
    /// The stored result, or None if the key has never been stored.
    fn lookup(&self, key: &CacheKey) -> Option<f64>;

    /// Store the result for a key, replacing any previous value.
    ///
    /// # Arguments
    /// * `key` - The cache key to store under
    /// * `value` - The result to remember
    fn store(&self, key: CacheKey, value: f64);

    /// Get the number of stored results.
    fn len(&self) -> usize;

    /// Check if the cache is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Port for observing calculations as they flow through the stack.
///
/// The observing layer notifies every registered observer twice per
/// successful calculation: once with the request before evaluation and once
/// with the result after it. Callbacks run on the calling thread, so a slow
/// observer slows the calculation.
///
/// Infrastructure provides the concrete implementation (TracingObserver),
/// and the mocks module provides a recording observer for tests.
pub trait EvalObserver: Send + Sync + Debug {
    /// Called with the request before it is evaluated.
    fn on_input(&self, request: &CalculationRequest);

    /// Called with the request and its result after successful evaluation.
    fn on_output(&self, request: &CalculationRequest, result: f64);
}
