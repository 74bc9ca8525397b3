//! A stack that announces its contents to subscribers on every change.

use crate::application::observers::SubscriptionId;

/// Callback invoked with the stack's items after each change.
pub type StackListener<T> = Box<dyn Fn(&[T]) + Send + Sync>;

/// A stack that notifies subscribers after every push and pop.
///
/// Subscribers receive the entire contents as they stand after the change,
/// so a pop that empties the stack notifies with an empty slice. A pop on
/// an already empty stack changes nothing and notifies nobody.
///
/// # Example
/// ```
/// use std::sync::{Arc, Mutex};
/// use layered_calc::ObservableStack;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let mut stack = ObservableStack::new();
/// let id = stack.subscribe(move |items: &[i32]| {
///     sink.lock().unwrap().push(items.to_vec());
/// });
///
/// stack.push(1);
/// stack.push(2);
/// stack.pop();
///
/// assert_eq!(*seen.lock().unwrap(), vec![vec![1], vec![1, 2], vec![1]]);
/// stack.unsubscribe(id);
/// ```
pub struct ObservableStack<T> {
    items: Vec<T>,
    listeners: Vec<(SubscriptionId, StackListener<T>)>,
    next_id: u64,
}

impl<T> ObservableStack<T> {
    /// Create an empty stack with no subscribers.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a listener.
    ///
    /// # Returns
    /// The subscription id to pass to [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&mut self, listener: impl Fn(&[T]) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener by subscription id.
    ///
    /// # Returns
    /// True if a listener was removed, false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(entry_id, _)| *entry_id != id);
        self.listeners.len() < before
    }

    /// Push an item and notify listeners with the new contents.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.notify();
    }

    /// Pop the top item and notify listeners with the remaining contents.
    ///
    /// # Returns
    /// The removed item, or None if the stack was empty.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop();
        if item.is_some() {
            self.notify();
        }
        item
    }

    /// Get the current items, bottom of the stack first.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Get the number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of registered listeners.
    pub fn subscribers(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.items);
        }
    }
}

impl<T> Default for ObservableStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableStack")
            .field("items", &self.items)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
