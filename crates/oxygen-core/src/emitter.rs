//! Change notifications shared by every widget model.
//!
//! # Design
//! - Listeners run synchronously, in subscription order, after the new value
//!   has been committed by the owning model.
//! - Single-threaded: listeners are `FnMut` closures without `Send` bounds.

use std::fmt;

/// Handle returned by [`ChangeEmitter::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

/// Fan-out of committed values to registered listeners.
pub struct ChangeEmitter<T> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> ChangeEmitter<T> {
    /// Emitter with no listeners.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Register `listener`; it runs for every subsequent emission.
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Deliver `value` to every listener.
    pub fn emit(&mut self, value: &T) {
        for (_, listener) in &mut self.listeners {
            listener(value);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> Default for ChangeEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ChangeEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = ChangeEmitter::new();
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            emitter.subscribe(move |value: &u32| seen.borrow_mut().push(format!("{tag}{value}")));
        }
        emitter.emit(&7);
        assert_eq!(*seen.borrow(), vec!["a7".to_string(), "b7".to_string()]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hits = Rc::new(RefCell::new(0));
        let mut emitter = ChangeEmitter::<bool>::new();
        let id = {
            let hits = Rc::clone(&hits);
            emitter.subscribe(move |_| *hits.borrow_mut() += 1)
        };
        emitter.emit(&true);
        assert!(emitter.unsubscribe(id));
        assert!(!emitter.unsubscribe(id));
        emitter.emit(&false);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(emitter.listener_count(), 0);
    }
}
