//! Observing layer: announces calculations to registered observers.

use std::sync::Arc;

use crate::application::observers::ObserverRegistry;
use crate::domain::error::EvalError;
use crate::domain::evaluator::Evaluator;
use crate::domain::request::CalculationRequest;

/// Evaluator layer that notifies observers around delegation.
///
/// Wraps an inner [`Evaluator`]. Every successful call produces exactly two
/// notifications, in order: the request before delegation and the result
/// after it. A failed delegation produces only the input notification; the
/// output notification is reserved for results that were actually produced.
///
/// The layer never alters the value flowing through it, and it cannot tell
/// whether the inner evaluator computed the result or served it from a
/// cache. Stacking it outside the memoizing layer therefore announces every
/// request; stacking it inside would announce only cache misses.
#[derive(Debug)]
pub struct LoggingEvaluator<E> {
    inner: E,
    observers: Arc<ObserverRegistry>,
}

impl<E> LoggingEvaluator<E>
where
    E: Evaluator,
{
    /// Create an observing layer around an inner evaluator.
    ///
    /// # Arguments
    /// * `inner` - The evaluator to delegate to
    /// * `observers` - Registry of observers to notify
    pub fn new(inner: E, observers: Arc<ObserverRegistry>) -> Self {
        Self { inner, observers }
    }

    /// Get the inner evaluator.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Get the registry this layer notifies.
    pub fn observers(&self) -> &Arc<ObserverRegistry> {
        &self.observers
    }
}

impl<E> Evaluator for LoggingEvaluator<E>
where
    E: Evaluator,
{
    fn evaluate(&self, request: CalculationRequest) -> Result<f64, EvalError> {
        self.observers.notify_input(&request);
        let result = self.inner.evaluate(request)?;
        self.observers.notify_output(&request, result);
        Ok(result)
    }
}
