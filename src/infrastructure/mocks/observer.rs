//! Mock observer for testing notification behavior.

use std::sync::{Arc, Mutex};

use crate::application::ports::EvalObserver;
use crate::domain::request::CalculationRequest;

/// A single notification captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    /// The request was announced before evaluation
    Input(CalculationRequest),
    /// The result was announced after evaluation
    Output(CalculationRequest, f64),
}

/// Mock observer that records every notification in order.
///
/// Clones share the same underlying list, so a clone can be handed to the
/// calculator while the test keeps the original for assertions.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use layered_calc::infrastructure::mocks::{ObservedEvent, RecordingObserver};
/// use layered_calc::LayeredCalculator;
///
/// let recording = RecordingObserver::new();
/// let calc = LayeredCalculator::builder()
///     .with_tracing_emission(false)
///     .with_observer(Arc::new(recording.clone()))
///     .build();
///
/// calc.calculate(10.0, 10.0, "add").unwrap();
/// assert_eq!(recording.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<ObservedEvent>>>,
}

impl RecordingObserver {
    /// Create a new recording observer.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get all recorded notifications, oldest first.
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events
            .lock()
            .expect(
                "RecordingObserver mutex poisoned - a test thread panicked while holding the lock",
            )
            .clone()
    }

    /// Get the number of recorded notifications.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .expect(
                "RecordingObserver mutex poisoned - a test thread panicked while holding the lock",
            )
            .len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all recorded notifications.
    ///
    /// Useful for resetting state between test cases.
    pub fn clear(&self) {
        self.events
            .lock()
            .expect(
                "RecordingObserver mutex poisoned - a test thread panicked while holding the lock",
            )
            .clear();
    }
}

impl EvalObserver for RecordingObserver {
    fn on_input(&self, request: &CalculationRequest) {
        self.events
            .lock()
            .expect(
                "RecordingObserver mutex poisoned - a test thread panicked while holding the lock",
            )
            .push(ObservedEvent::Input(*request));
    }

    fn on_output(&self, request: &CalculationRequest, result: f64) {
        self.events
            .lock()
            .expect(
                "RecordingObserver mutex poisoned - a test thread panicked while holding the lock",
            )
            .push(ObservedEvent::Output(*request, result));
    }
}
