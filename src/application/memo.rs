//! Memoizing layer: caches results keyed by request identity.

use crate::application::metrics::Metrics;
use crate::application::ports::CacheStore;
use crate::domain::error::EvalError;
use crate::domain::evaluator::Evaluator;
use crate::domain::request::CalculationRequest;

/// Evaluator layer that remembers the results of previous requests.
///
/// Wraps an inner [`Evaluator`] and consults a [`CacheStore`] before
/// delegating. A hit returns the stored result without touching the inner
/// evaluator; a miss delegates, stores the result, and returns it. Errors
/// from the inner evaluator pass through unchanged and are never cached.
///
/// The cache is unbounded and has no eviction: the layer exists to skip
/// repeated computations, not to manage memory. Correctness relies on the
/// inner evaluator being deterministic.
///
/// # Example
/// ```
/// use layered_calc::{
///     ArithmeticEngine, CalculationRequest, Evaluator, MemoizedEvaluator, Metrics,
///     OperationKind, SharedCache,
/// };
///
/// let memo = MemoizedEvaluator::new(
///     ArithmeticEngine::new(),
///     SharedCache::new(),
///     Metrics::new(),
/// );
///
/// let request = CalculationRequest::new(10.0, 10.0, OperationKind::Add);
/// assert_eq!(memo.evaluate(request).unwrap(), 20.0);
/// assert_eq!(memo.evaluate(request).unwrap(), 20.0);
///
/// // The second call was answered from the cache.
/// assert_eq!(memo.metrics().cache_hits(), 1);
/// assert_eq!(memo.cached_results(), 1);
/// ```
#[derive(Debug)]
pub struct MemoizedEvaluator<E, C> {
    inner: E,
    cache: C,
    metrics: Metrics,
}

impl<E, C> MemoizedEvaluator<E, C>
where
    E: Evaluator,
    C: CacheStore,
{
    /// Create a memoizing layer around an inner evaluator.
    ///
    /// # Arguments
    /// * `inner` - The evaluator to delegate misses to
    /// * `cache` - Storage for memoized results
    /// * `metrics` - Metrics tracker recording hits and misses
    pub fn new(inner: E, cache: C, metrics: Metrics) -> Self {
        Self {
            inner,
            cache,
            metrics,
        }
    }

    /// Get the inner evaluator.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Get the metrics tracker this layer records into.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Get the number of memoized results.
    pub fn cached_results(&self) -> usize {
        self.cache.len()
    }
}

impl<E, C> Evaluator for MemoizedEvaluator<E, C>
where
    E: Evaluator,
    C: CacheStore,
{
    fn evaluate(&self, request: CalculationRequest) -> Result<f64, EvalError> {
        let key = request.cache_key();
        if let Some(result) = self.cache.lookup(&key) {
            self.metrics.record_cache_hit();
            return Ok(result);
        }

        self.metrics.record_cache_miss();
        let result = self.inner.evaluate(request)?;
        self.cache.store(key, result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arithmetic::ArithmeticEngine;
    use crate::domain::operation::OperationKind;
    use crate::infrastructure::cache::SharedCache;
    use crate::infrastructure::mocks::CountingEvaluator;
    use std::sync::Arc;

    fn memoized() -> MemoizedEvaluator<Arc<CountingEvaluator<ArithmeticEngine>>, SharedCache> {
        let counting = Arc::new(CountingEvaluator::new(ArithmeticEngine::new()));
        MemoizedEvaluator::new(counting, SharedCache::new(), Metrics::new())
    }

    #[test]
    fn test_miss_then_hit() {
        let memo = memoized();
        let request = CalculationRequest::new(10.0, 10.0, OperationKind::Add);

        assert_eq!(memo.evaluate(request).unwrap(), 20.0);
        assert_eq!(memo.evaluate(request).unwrap(), 20.0);

        // The base calculator ran exactly once.
        assert_eq!(memo.inner().calls(), 1);
        assert_eq!(memo.metrics().cache_hits(), 1);
        assert_eq!(memo.metrics().cache_misses(), 1);
        assert_eq!(memo.cached_results(), 1);
    }

    #[test]
    fn test_distinct_requests_are_computed_separately() {
        let memo = memoized();

        let forward = CalculationRequest::new(10.0, 4.0, OperationKind::Subtract);
        let reversed = CalculationRequest::new(4.0, 10.0, OperationKind::Subtract);

        assert_eq!(memo.evaluate(forward).unwrap(), 6.0);
        assert_eq!(memo.evaluate(reversed).unwrap(), -6.0);

        // Operand order is part of the identity, so no hit occurred.
        assert_eq!(memo.inner().calls(), 2);
        assert_eq!(memo.metrics().cache_hits(), 0);
        assert_eq!(memo.cached_results(), 2);
    }

    #[test]
    fn test_same_operands_different_operation_do_not_collide() {
        let memo = memoized();

        let add = CalculationRequest::new(2.0, 2.0, OperationKind::Add);
        let multiply = CalculationRequest::new(2.0, 2.0, OperationKind::Multiply);

        assert_eq!(memo.evaluate(add).unwrap(), 4.0);
        assert_eq!(memo.evaluate(multiply).unwrap(), 4.0);
        assert_eq!(memo.inner().calls(), 2);
    }

    #[test]
    fn test_nan_results_are_memoized() {
        let memo = memoized();
        let request = CalculationRequest::new(0.0, 0.0, OperationKind::Divide);

        assert!(memo.evaluate(request).unwrap().is_nan());
        assert!(memo.evaluate(request).unwrap().is_nan());

        // NaN is a value like any other: computed once, then served
        // from the cache.
        assert_eq!(memo.inner().calls(), 1);
        assert_eq!(memo.metrics().cache_hits(), 1);
    }

    #[test]
    fn test_cache_can_be_shared_between_evaluators() {
        let cache = Arc::new(SharedCache::new());
        let first =
            MemoizedEvaluator::new(ArithmeticEngine::new(), Arc::clone(&cache), Metrics::new());
        let second = MemoizedEvaluator::new(ArithmeticEngine::new(), cache, Metrics::new());

        let request = CalculationRequest::new(3.0, 4.0, OperationKind::Multiply);
        assert_eq!(first.evaluate(request).unwrap(), 12.0);

        // The second evaluator sees the entry stored by the first.
        assert_eq!(second.evaluate(request).unwrap(), 12.0);
        assert_eq!(second.metrics().cache_hits(), 1);
    }
}
