//! The base arithmetic engines.
//!
//! Arithmetic is split across two engines with distinct responsibilities,
//! fronted by a facade that routes each operation to the right engine.
//! Layers above talk to the facade through [`Evaluator`] and never see
//! the split.

use crate::domain::error::EvalError;
use crate::domain::evaluator::Evaluator;
use crate::domain::operation::OperationKind;
use crate::domain::request::CalculationRequest;

/// Engine for additive arithmetic: addition and subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveEngine;

impl AdditiveEngine {
    /// Create a new additive engine.
    pub fn new() -> Self {
        Self
    }

    /// Add the second operand to the first.
    pub fn add(&self, operand1: f64, operand2: f64) -> f64 {
        operand1 + operand2
    }

    /// Subtract the second operand from the first.
    pub fn subtract(&self, operand1: f64, operand2: f64) -> f64 {
        operand1 - operand2
    }
}

/// Engine for multiplicative arithmetic: multiplication and division.
///
/// Division follows IEEE 754: a non-zero number divided by zero yields an
/// infinity and `0.0 / 0.0` yields NaN. A zero divisor produces a value,
/// not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiplicativeEngine;

impl MultiplicativeEngine {
    /// Create a new multiplicative engine.
    pub fn new() -> Self {
        Self
    }

    /// Multiply the two operands.
    pub fn multiply(&self, operand1: f64, operand2: f64) -> f64 {
        operand1 * operand2
    }

    /// Divide the first operand by the second.
    pub fn divide(&self, operand1: f64, operand2: f64) -> f64 {
        operand1 / operand2
    }
}

/// The base calculator: a facade routing each operation to its engine.
///
/// This is the innermost evaluator of the layered stack. Every
/// [`OperationKind`] maps to exactly one engine method, so evaluation
/// never fails at this level.
///
/// # Example
/// ```
/// use layered_calc::{ArithmeticEngine, OperationKind};
///
/// let engine = ArithmeticEngine::new();
/// assert_eq!(engine.apply(10.0, 4.0, OperationKind::Subtract), 6.0);
/// assert_eq!(engine.apply(6.0, 7.0, OperationKind::Multiply), 42.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticEngine {
    additive: AdditiveEngine,
    multiplicative: MultiplicativeEngine,
}

impl ArithmeticEngine {
    /// Create a new arithmetic engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an operation to a pair of operands.
    pub fn apply(&self, operand1: f64, operand2: f64, operation: OperationKind) -> f64 {
        match operation {
            OperationKind::Add => self.additive.add(operand1, operand2),
            OperationKind::Subtract => self.additive.subtract(operand1, operand2),
            OperationKind::Multiply => self.multiplicative.multiply(operand1, operand2),
            OperationKind::Divide => self.multiplicative.divide(operand1, operand2),
        }
    }
}

impl Evaluator for ArithmeticEngine {
    fn evaluate(&self, request: CalculationRequest) -> Result<f64, EvalError> {
        Ok(self.apply(request.operand1, request.operand2, request.operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition() {
        let engine = ArithmeticEngine::new();
        assert_eq!(engine.apply(2.0, 3.0, OperationKind::Add), 5.0);
        assert_eq!(engine.apply(-2.0, 3.0, OperationKind::Add), 1.0);
    }

    #[test]
    fn test_subtraction() {
        let engine = ArithmeticEngine::new();
        assert_eq!(engine.apply(10.0, 4.0, OperationKind::Subtract), 6.0);
        assert_eq!(engine.apply(4.0, 10.0, OperationKind::Subtract), -6.0);
    }

    #[test]
    fn test_multiplication() {
        let engine = ArithmeticEngine::new();
        assert_eq!(engine.apply(6.0, 7.0, OperationKind::Multiply), 42.0);
        assert_eq!(engine.apply(6.0, 0.0, OperationKind::Multiply), 0.0);
    }

    #[test]
    fn test_division() {
        let engine = ArithmeticEngine::new();
        assert_eq!(engine.apply(10.0, 4.0, OperationKind::Divide), 2.5);
    }

    #[test]
    fn test_division_by_zero_follows_ieee_754() {
        let engine = ArithmeticEngine::new();
        assert_eq!(
            engine.apply(1.0, 0.0, OperationKind::Divide),
            f64::INFINITY
        );
        assert_eq!(
            engine.apply(-1.0, 0.0, OperationKind::Divide),
            f64::NEG_INFINITY
        );
        assert!(engine.apply(0.0, 0.0, OperationKind::Divide).is_nan());
    }

    #[test]
    fn test_evaluator_never_fails() {
        let engine = ArithmeticEngine::new();
        for kind in OperationKind::ALL {
            let request = CalculationRequest::new(1.0, 1.0, kind);
            assert!(engine.evaluate(request).is_ok());
        }
    }

    #[test]
    fn test_individual_engines() {
        let additive = AdditiveEngine::new();
        assert_eq!(additive.add(1.5, 2.5), 4.0);
        assert_eq!(additive.subtract(1.5, 2.5), -1.0);

        let multiplicative = MultiplicativeEngine::new();
        assert_eq!(multiplicative.multiply(1.5, 2.0), 3.0);
        assert_eq!(multiplicative.divide(1.5, 2.0), 0.75);
    }
}
