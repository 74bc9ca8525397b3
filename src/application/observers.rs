//! Observer registration and notification.
//!
//! The observing layer does not talk to observers directly; it goes through
//! an [`ObserverRegistry`], which owns the subscription list and the
//! notification fan-out.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::application::ports::EvalObserver;
use crate::domain::request::CalculationRequest;

/// Handle identifying a single subscription.
///
/// Returned by subscribe calls and accepted by the matching unsubscribe.
/// Ids are never reused within one registry or stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Registry of observers notified around each evaluation.
///
/// Observers are stored behind a mutex. Notification first snapshots the
/// current list and then invokes callbacks with the lock released, so a
/// callback may subscribe or unsubscribe without deadlocking; it will take
/// effect from the next notification onward.
#[derive(Debug, Default)]
pub struct ObserverRegistry {
    entries: Mutex<Vec<(SubscriptionId, Arc<dyn EvalObserver>)>>,
    next_id: AtomicU64,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    ///
    /// # Returns
    /// The subscription id to pass to [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&self, observer: Arc<dyn EvalObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries
            .lock()
            .expect("observer list mutex poisoned")
            .push((id, observer));
        id
    }

    /// Remove an observer by subscription id.
    ///
    /// # Returns
    /// True if an observer was removed, false if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.lock().expect("observer list mutex poisoned");
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() < before
    }

    /// Get the number of registered observers.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("observer list mutex poisoned")
            .len()
    }

    /// Check if no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notify all observers of a request about to be evaluated.
    pub(crate) fn notify_input(&self, request: &CalculationRequest) {
        for observer in self.snapshot() {
            observer.on_input(request);
        }
    }

    /// Notify all observers of a completed evaluation.
    pub(crate) fn notify_output(&self, request: &CalculationRequest, result: f64) {
        for observer in self.snapshot() {
            observer.on_output(request, result);
        }
    }

    fn snapshot(&self) -> Vec<Arc<dyn EvalObserver>> {
        self.entries
            .lock()
            .expect("observer list mutex poisoned")
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::operation::OperationKind;
    use crate::infrastructure::mocks::{ObservedEvent, RecordingObserver};

    fn request() -> CalculationRequest {
        CalculationRequest::new(10.0, 10.0, OperationKind::Add)
    }

    #[test]
    fn test_subscribe_and_len() {
        let registry = ObserverRegistry::new();
        assert!(registry.is_empty());

        registry.subscribe(Arc::new(RecordingObserver::new()));
        registry.subscribe(Arc::new(RecordingObserver::new()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_subscription_ids_are_unique() {
        let registry = ObserverRegistry::new();
        let a = registry.subscribe(Arc::new(RecordingObserver::new()));
        let b = registry.subscribe(Arc::new(RecordingObserver::new()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_notifications_reach_all_observers() {
        let registry = ObserverRegistry::new();
        let first = RecordingObserver::new();
        let second = RecordingObserver::new();
        registry.subscribe(Arc::new(first.clone()));
        registry.subscribe(Arc::new(second.clone()));

        registry.notify_input(&request());
        registry.notify_output(&request(), 20.0);

        for observer in [first, second] {
            assert_eq!(
                observer.events(),
                vec![
                    ObservedEvent::Input(request()),
                    ObservedEvent::Output(request(), 20.0),
                ]
            );
        }
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let registry = ObserverRegistry::new();
        let observer = RecordingObserver::new();
        let id = registry.subscribe(Arc::new(observer.clone()));

        registry.notify_input(&request());
        assert!(registry.unsubscribe(id));
        registry.notify_input(&request());

        assert_eq!(observer.len(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unsubscribe_unknown_id_returns_false() {
        let registry = ObserverRegistry::new();
        let id = registry.subscribe(Arc::new(RecordingObserver::new()));
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
    }

    #[test]
    fn test_callbacks_may_touch_the_registry() {
        // An observer that queries the registry during notification.
        // This deadlocks unless notification releases the lock first.
        #[derive(Debug)]
        struct Introspecting {
            registry: Arc<ObserverRegistry>,
            seen: Arc<Mutex<Vec<usize>>>,
        }

        impl EvalObserver for Introspecting {
            fn on_input(&self, _request: &CalculationRequest) {
                let len = self.registry.len();
                self.seen
                    .lock()
                    .expect("seen mutex poisoned - a test thread panicked while holding the lock")
                    .push(len);
            }

            fn on_output(&self, _request: &CalculationRequest, _result: f64) {}
        }

        let registry = Arc::new(ObserverRegistry::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        registry.subscribe(Arc::new(Introspecting {
            registry: Arc::clone(&registry),
            seen: Arc::clone(&seen),
        }));

        registry.notify_input(&request());

        let seen = seen
            .lock()
            .expect("seen mutex poisoned - a test thread panicked while holding the lock")
            .clone();
        assert_eq!(seen, vec![1]);
    }
}
