//! Mock tracing layer for testing emitted events.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::Level;
use tracing_subscriber::Layer;

/// Mock layer that captures `tracing` events for testing.
///
/// Compose it into a subscriber with `tracing_subscriber::registry()` and
/// install that subscriber around the code under test. Clones share the
/// same captured list.
///
/// # Example
/// ```
/// use layered_calc::infrastructure::mocks::CaptureLayer;
/// use tracing::info;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let capture = CaptureLayer::new();
/// let subscriber = tracing_subscriber::registry().with(capture.clone());
///
/// tracing::subscriber::with_default(subscriber, || {
///     info!(answer = 42, "test message");
/// });
///
/// let events = capture.events();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].message, "test message");
/// assert_eq!(events[0].fields.get("answer").map(String::as_str), Some("42"));
/// ```
#[derive(Clone, Default)]
pub struct CaptureLayer {
    captured: Arc<Mutex<Vec<CapturedEvent>>>,
}

/// A single event captured by [`CaptureLayer`].
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    /// Event level
    pub level: Level,
    /// Rendered message
    pub message: String,
    /// Structured fields, rendered to strings
    pub fields: BTreeMap<String, String>,
}

impl CaptureLayer {
    /// Create a new capture layer.
    pub fn new() -> Self {
        Self {
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get all captured events, oldest first.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.captured
            .lock()
            .expect("CaptureLayer mutex poisoned - a test thread panicked while holding the lock")
            .clone()
    }

    /// Get the number of captured events.
    pub fn count(&self) -> usize {
        self.captured
            .lock()
            .expect("CaptureLayer mutex poisoned - a test thread panicked while holding the lock")
            .len()
    }

    /// Clear all captured events.
    ///
    /// Useful for resetting state between test cases.
    pub fn clear(&self) {
        self.captured
            .lock()
            .expect("CaptureLayer mutex poisoned - a test thread panicked while holding the lock")
            .clear();
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = EventVisitor {
            message: String::new(),
            fields: BTreeMap::new(),
        };
        event.record(&mut visitor);

        self.captured
            .lock()
            .expect("CaptureLayer mutex poisoned - a test thread panicked while holding the lock")
            .push(CapturedEvent {
                level: *event.metadata().level(),
                message: visitor.message,
                fields: visitor.fields,
            });
    }
}

/// Extracts the message and renders every other field to a string.
struct EventVisitor {
    message: String,
    fields: BTreeMap<String, String>,
}

impl Visit for EventVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .insert(field.name().to_string(), format!("{:?}", value));
        }
    }
}
