//! Mock evaluator for testing delegation behavior.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::error::EvalError;
use crate::domain::evaluator::Evaluator;
use crate::domain::request::CalculationRequest;

/// Evaluator wrapper that counts how often it is asked to evaluate.
///
/// Wraps any inner evaluator and counts the calls that reach it. Used to
/// verify that the memoizing layer short-circuits repeated requests: wrap
/// the base calculator, evaluate the same request twice, and assert that
/// exactly one call got through.
///
/// Share it through `Arc` to keep a handle for assertions after moving it
/// into a layer.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use layered_calc::infrastructure::mocks::CountingEvaluator;
/// use layered_calc::{
///     ArithmeticEngine, CalculationRequest, Evaluator, MemoizedEvaluator, Metrics,
///     OperationKind, SharedCache,
/// };
///
/// let counting = Arc::new(CountingEvaluator::new(ArithmeticEngine::new()));
/// let memo = MemoizedEvaluator::new(Arc::clone(&counting), SharedCache::new(), Metrics::new());
///
/// let request = CalculationRequest::new(10.0, 10.0, OperationKind::Add);
/// memo.evaluate(request).unwrap();
/// memo.evaluate(request).unwrap();
///
/// assert_eq!(counting.calls(), 1);
/// ```
#[derive(Debug)]
pub struct CountingEvaluator<E> {
    inner: E,
    calls: AtomicU64,
}

impl<E> CountingEvaluator<E> {
    /// Wrap an inner evaluator.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            calls: AtomicU64::new(0),
        }
    }

    /// Get the number of calls that reached this evaluator.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Get the wrapped evaluator.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E> Evaluator for CountingEvaluator<E>
where
    E: Evaluator,
{
    fn evaluate(&self, request: CalculationRequest) -> Result<f64, EvalError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.evaluate(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arithmetic::ArithmeticEngine;
    use crate::domain::operation::OperationKind;

    #[test]
    fn test_counts_calls() {
        let counting = CountingEvaluator::new(ArithmeticEngine::new());
        assert_eq!(counting.calls(), 0);

        let request = CalculationRequest::new(2.0, 3.0, OperationKind::Add);
        assert_eq!(counting.evaluate(request).unwrap(), 5.0);
        assert_eq!(counting.evaluate(request).unwrap(), 5.0);

        assert_eq!(counting.calls(), 2);
    }

    #[test]
    fn test_delegates_unchanged() {
        let counting = CountingEvaluator::new(ArithmeticEngine::new());
        let request = CalculationRequest::new(10.0, 4.0, OperationKind::Subtract);
        assert_eq!(counting.evaluate(request).unwrap(), 6.0);
    }
}
