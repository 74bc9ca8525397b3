//! The core evaluation abstraction.

use std::sync::Arc;

use crate::domain::error::EvalError;
use crate::domain::request::CalculationRequest;

/// Trait for anything that can carry out a calculation.
///
/// This is the seam the layered calculator composes around: the base
/// arithmetic engine implements it, and each layer wraps another
/// `Evaluator` to add a single concern (memoization, observation) while
/// delegating the arithmetic itself inward.
///
/// Implementations must be deterministic: evaluating the same request
/// twice yields the same result. The memoizing layer relies on this to
/// substitute a cached result for a repeated computation.
pub trait Evaluator: Send + Sync {
    /// Evaluate a single calculation request.
    ///
    /// # Arguments
    /// * `request` - The calculation to perform
    ///
    /// # Returns
    /// The numeric result, or an error if this evaluator cannot handle
    /// the request.
    fn evaluate(&self, request: CalculationRequest) -> Result<f64, EvalError>;
}

impl<E: Evaluator + ?Sized> Evaluator for Arc<E> {
    fn evaluate(&self, request: CalculationRequest) -> Result<f64, EvalError> {
        (**self).evaluate(request)
    }
}
