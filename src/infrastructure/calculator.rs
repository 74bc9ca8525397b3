//! The assembled layered calculator.
//!
//! Wires the domain's arithmetic engines into the full stack: observation
//! on the outside, memoization in the middle, arithmetic at the core.

use std::sync::Arc;

use crate::application::logging::LoggingEvaluator;
use crate::application::memo::MemoizedEvaluator;
use crate::application::metrics::Metrics;
use crate::application::observers::{ObserverRegistry, SubscriptionId};
use crate::application::ports::EvalObserver;
use crate::domain::arithmetic::ArithmeticEngine;
use crate::domain::error::EvalError;
use crate::domain::evaluator::Evaluator;
use crate::domain::operation::OperationKind;
use crate::domain::request::CalculationRequest;
use crate::infrastructure::cache::SharedCache;
use crate::infrastructure::observer::TracingObserver;

/// Calculator built from composable evaluator layers.
///
/// The stack, from the outside in:
///
/// 1. [`LoggingEvaluator`] - announces every request and result to
///    registered observers, cache hits included
/// 2. [`MemoizedEvaluator`] - answers repeated requests from a shared cache
/// 3. [`ArithmeticEngine`] - performs the arithmetic
///
/// Each layer wraps the next and adds exactly one concern; the calculator
/// itself only assembles them and fronts the result with a small API.
///
/// # Example
/// ```
/// use layered_calc::{LayeredCalculator, OperationKind};
///
/// let calc = LayeredCalculator::new();
///
/// // Typed entry point
/// assert_eq!(calc.evaluate(2.0, 3.0, OperationKind::Add).unwrap(), 5.0);
///
/// // Token entry point, for callers holding operation names
/// assert_eq!(calc.calculate(10.0, 4.0, "sub").unwrap(), 6.0);
/// assert!(calc.calculate(1.0, 1.0, "unknown").is_err());
///
/// // Repeated requests are answered from the cache
/// calc.evaluate(2.0, 3.0, OperationKind::Add).unwrap();
/// assert_eq!(calc.metrics().cache_hits(), 1);
/// ```
#[derive(Debug)]
pub struct LayeredCalculator {
    stack: LoggingEvaluator<MemoizedEvaluator<ArithmeticEngine, SharedCache>>,
    metrics: Metrics,
}

impl LayeredCalculator {
    /// Create a builder for configuring the calculator.
    ///
    /// Defaults:
    /// - Tracing emission: enabled (a [`TracingObserver`] is subscribed)
    /// - Additional observers: none
    /// - Cache capacity: unspecified (the cache sizes itself)
    pub fn builder() -> LayeredCalculatorBuilder {
        LayeredCalculatorBuilder {
            observers: Vec::new(),
            tracing_emission: true,
            cache_capacity: None,
        }
    }

    /// Create a calculator with default settings.
    ///
    /// Equivalent to `LayeredCalculator::builder().build()`.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Evaluate an operation on a pair of operands.
    ///
    /// The request passes through the full stack: observers are notified,
    /// the cache is consulted, and the arithmetic runs only on a miss.
    ///
    /// # Arguments
    /// * `operand1` - First operand
    /// * `operand2` - Second operand
    /// * `operation` - Operation to apply
    ///
    /// # Returns
    /// The numeric result. With a typed [`OperationKind`] this cannot fail;
    /// the `Result` mirrors the [`Evaluator`] contract the layers share.
    pub fn evaluate(
        &self,
        operand1: f64,
        operand2: f64,
        operation: OperationKind,
    ) -> Result<f64, EvalError> {
        let request = CalculationRequest::new(operand1, operand2, operation);
        let result = self.stack.evaluate(request)?;
        self.metrics.record_evaluation();
        Ok(result)
    }

    /// Evaluate an operation named by a token.
    ///
    /// The token is parsed first; an unsupported token fails with
    /// [`EvalError::UnsupportedOperation`] before anything reaches the
    /// stack, so no observer is notified and no metric is recorded for it.
    ///
    /// # Arguments
    /// * `operand1` - First operand
    /// * `operand2` - Second operand
    /// * `operation` - Operation token, e.g. `"add"` or `"divide"`
    pub fn calculate(
        &self,
        operand1: f64,
        operand2: f64,
        operation: &str,
    ) -> Result<f64, EvalError> {
        let operation = operation.parse::<OperationKind>()?;
        self.evaluate(operand1, operand2, operation)
    }

    /// Add two numbers through the stack.
    pub fn add(&self, operand1: f64, operand2: f64) -> Result<f64, EvalError> {
        self.evaluate(operand1, operand2, OperationKind::Add)
    }

    /// Subtract the second number from the first through the stack.
    pub fn subtract(&self, operand1: f64, operand2: f64) -> Result<f64, EvalError> {
        self.evaluate(operand1, operand2, OperationKind::Subtract)
    }

    /// Multiply two numbers through the stack.
    pub fn multiply(&self, operand1: f64, operand2: f64) -> Result<f64, EvalError> {
        self.evaluate(operand1, operand2, OperationKind::Multiply)
    }

    /// Divide the first number by the second through the stack.
    ///
    /// Division by zero follows IEEE 754 and yields an infinity or NaN.
    pub fn divide(&self, operand1: f64, operand2: f64) -> Result<f64, EvalError> {
        self.evaluate(operand1, operand2, OperationKind::Divide)
    }

    /// Register an observer at runtime.
    ///
    /// # Returns
    /// The subscription id to pass to [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&self, observer: Arc<dyn EvalObserver>) -> SubscriptionId {
        self.stack.observers().subscribe(observer)
    }

    /// Remove an observer by subscription id.
    ///
    /// # Returns
    /// True if an observer was removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.stack.observers().unsubscribe(id)
    }

    /// Get the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.stack.observers().len()
    }

    /// Get the metrics tracker for this calculator.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Get the number of memoized results.
    pub fn cached_results(&self) -> usize {
        self.stack.inner().cached_results()
    }
}

impl Default for LayeredCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for LayeredCalculator {
    fn evaluate(&self, request: CalculationRequest) -> Result<f64, EvalError> {
        LayeredCalculator::evaluate(self, request.operand1, request.operand2, request.operation)
    }
}

/// Builder for constructing a `LayeredCalculator`.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use layered_calc::infrastructure::mocks::RecordingObserver;
/// use layered_calc::LayeredCalculator;
///
/// let recording = RecordingObserver::new();
/// let calc = LayeredCalculator::builder()
///     .with_tracing_emission(false)
///     .with_observer(Arc::new(recording.clone()))
///     .with_cache_capacity(256)
///     .build();
///
/// calc.calculate(10.0, 10.0, "add").unwrap();
/// assert_eq!(recording.len(), 2);
/// ```
pub struct LayeredCalculatorBuilder {
    observers: Vec<Arc<dyn EvalObserver>>,
    tracing_emission: bool,
    cache_capacity: Option<usize>,
}

impl LayeredCalculatorBuilder {
    /// Subscribe an observer from the start.
    ///
    /// May be called multiple times; observers are notified in subscription
    /// order, after the default tracing observer if that is enabled.
    pub fn with_observer(mut self, observer: Arc<dyn EvalObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Enable or disable the default tracing observer.
    ///
    /// Enabled by default. Disable it in tests, or when the calculator's
    /// events would only be noise to the installed subscriber.
    pub fn with_tracing_emission(mut self, enabled: bool) -> Self {
        self.tracing_emission = enabled;
        self
    }

    /// Pre-size the result cache.
    ///
    /// The capacity is a hint to avoid rehashing while the cache warms up;
    /// the cache remains unbounded.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// Assemble the calculator.
    ///
    /// Cannot fail: every combination of builder settings is valid.
    pub fn build(self) -> LayeredCalculator {
        let registry = Arc::new(ObserverRegistry::new());
        if self.tracing_emission {
            registry.subscribe(Arc::new(TracingObserver::new()));
        }
        for observer in self.observers {
            registry.subscribe(observer);
        }

        let cache = match self.cache_capacity {
            Some(capacity) => SharedCache::with_capacity(capacity),
            None => SharedCache::new(),
        };

        let metrics = Metrics::new();
        let memoized = MemoizedEvaluator::new(ArithmeticEngine::new(), cache, metrics.clone());
        let stack = LoggingEvaluator::new(memoized, registry);

        LayeredCalculator { stack, metrics }
    }
}
