//! Tracing integration for calculation observation.

use crate::application::ports::EvalObserver;
use crate::domain::request::CalculationRequest;

/// Observer that emits structured `tracing` events.
///
/// Emits one INFO event before each evaluation and one after, carrying the
/// operands, operation and (for outputs) the result as structured fields.
/// Attach any `tracing` subscriber to collect or format them.
///
/// # Example
/// ```
/// use layered_calc::LayeredCalculator;
/// use tracing_subscriber::fmt;
///
/// // A default calculator already emits through TracingObserver; install
/// // a subscriber to see the events.
/// let subscriber = fmt().with_test_writer().finish();
/// tracing::subscriber::with_default(subscriber, || {
///     let calc = LayeredCalculator::new();
///     let _ = calc.calculate(10.0, 10.0, "add");
/// });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// Create a new tracing observer.
    pub fn new() -> Self {
        Self
    }
}

impl EvalObserver for TracingObserver {
    fn on_input(&self, request: &CalculationRequest) {
        tracing::info!(
            operand1 = request.operand1,
            operand2 = request.operand2,
            operation = %request.operation,
            "input received"
        );
    }

    fn on_output(&self, request: &CalculationRequest, result: f64) {
        tracing::info!(
            operand1 = request.operand1,
            operand2 = request.operand2,
            operation = %request.operation,
            result,
            "output produced"
        );
    }
}
