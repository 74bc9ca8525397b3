//! # layered-calc
//!
//! Layered arithmetic evaluation: a composable evaluator stack with
//! memoization and `tracing`-based observation.
//!
//! This crate builds a calculator out of single-concern layers. The base
//! layer does arithmetic; a memoizing layer answers repeated requests from
//! a concurrent cache; an observing layer announces every request and
//! result to subscribers. Layers compose through one trait ([`Evaluator`]),
//! so each can be used, tested, and replaced on its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use layered_calc::{LayeredCalculator, OperationKind};
//!
//! // Sensible defaults: memoization on, tracing events on
//! let calc = LayeredCalculator::new();
//!
//! // Typed entry point
//! assert_eq!(calc.evaluate(2.0, 3.0, OperationKind::Add).unwrap(), 5.0);
//!
//! // Token entry point; unsupported tokens fail explicitly
//! assert_eq!(calc.calculate(10.0, 4.0, "sub").unwrap(), 6.0);
//! assert!(calc.calculate(1.0, 1.0, "modulo").is_err());
//!
//! // Convenience methods route through the same stack
//! assert_eq!(calc.multiply(6.0, 7.0).unwrap(), 42.0);
//! ```
//!
//! ## The Stack
//!
//! From the outside in:
//!
//! - **Observing layer** ([`LoggingEvaluator`]): notifies observers with
//!   the request before evaluation and the result after it, cache hits
//!   included
//! - **Memoizing layer** ([`MemoizedEvaluator`]): caches results by exact
//!   request identity in a dashmap-backed [`SharedCache`]
//! - **Base layer** ([`ArithmeticEngine`]): add, subtract, multiply,
//!   divide; division by zero follows IEEE 754 and yields an infinity or
//!   NaN rather than an error
//!
//! The layers are plain types, so custom stacks can be assembled by hand:
//!
//! ```rust
//! use layered_calc::{
//!     ArithmeticEngine, CalculationRequest, Evaluator, MemoizedEvaluator, Metrics,
//!     OperationKind, SharedCache,
//! };
//!
//! // Memoization only, no observation
//! let memo = MemoizedEvaluator::new(
//!     ArithmeticEngine::new(),
//!     SharedCache::new(),
//!     Metrics::new(),
//! );
//! let request = CalculationRequest::new(10.0, 10.0, OperationKind::Add);
//! assert_eq!(memo.evaluate(request).unwrap(), 20.0);
//! ```
//!
//! ## Observers
//!
//! Observers implement [`EvalObserver`] and can be subscribed at build time
//! or at runtime. The default [`TracingObserver`] emits structured `tracing`
//! events; install any `tracing` subscriber to collect them.
//!
//! ```rust
//! use std::sync::Arc;
//! use layered_calc::{CalculationRequest, EvalObserver, LayeredCalculator};
//!
//! #[derive(Debug)]
//! struct Printing;
//!
//! impl EvalObserver for Printing {
//!     fn on_input(&self, request: &CalculationRequest) {
//!         println!("about to run {}", request);
//!     }
//!     fn on_output(&self, request: &CalculationRequest, result: f64) {
//!         println!("{} = {}", request, result);
//!     }
//! }
//!
//! let calc = LayeredCalculator::builder()
//!     .with_tracing_emission(false)
//!     .with_observer(Arc::new(Printing))
//!     .build();
//! let _ = calc.add(1.0, 2.0);
//! ```
//!
//! ## Observability
//!
//! Monitor cache behavior with built-in metrics:
//!
//! ```rust
//! # use layered_calc::{LayeredCalculator, OperationKind};
//! # let calc = LayeredCalculator::builder().with_tracing_emission(false).build();
//! calc.evaluate(10.0, 10.0, OperationKind::Add).unwrap();
//! calc.evaluate(10.0, 10.0, OperationKind::Add).unwrap();
//!
//! let snapshot = calc.metrics().snapshot();
//! assert_eq!(snapshot.evaluations, 2);
//! assert_eq!(snapshot.cache_hits, 1);
//! println!("hit rate: {:.2}%", snapshot.hit_rate() * 100.0);
//! ```
//!
//! ## Building Blocks
//!
//! The domain and application layers also carry a few small self-contained
//! pieces in the same style as the stack: [`Person`] records built from a
//! discriminant token, a chaining [`CumulativeSum`], a [`CommandDispatcher`]
//! with an execution history, and an [`ObservableStack`] that announces its
//! contents on every change.

// Domain layer - pure calculation logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    accumulator::CumulativeSum,
    arithmetic::{AdditiveEngine, ArithmeticEngine, MultiplicativeEngine},
    error::EvalError,
    evaluator::Evaluator,
    operation::OperationKind,
    person::{Person, UnknownPersonKind},
    request::{CacheKey, CalculationRequest},
};

pub use application::{
    dispatcher::{CommandDispatcher, DispatchError},
    logging::LoggingEvaluator,
    memo::MemoizedEvaluator,
    metrics::{Metrics, MetricsSnapshot},
    observable::{ObservableStack, StackListener},
    observers::{ObserverRegistry, SubscriptionId},
    ports::{CacheStore, EvalObserver},
};

pub use infrastructure::{
    cache::SharedCache,
    calculator::{LayeredCalculator, LayeredCalculatorBuilder},
    observer::TracingObserver,
};
