// ============================================================================
// REACTIVITY - shared value + subscriber notification
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type SubscriptionId = u64;

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Rc<dyn Fn()>)>>,
    next_id: Cell<SubscriptionId>,
}

/// Reactive state with synchronous change notification: every current
/// subscriber observes the new value before `set`/`update` returns.
///
/// Clones share the value AND the subscriber list, so a handle can be
/// passed through context and subscribed to from anywhere.
pub struct ReactiveState<T> {
    inner: Rc<Inner<T>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Read access through a closure; the borrow ends when it returns.
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.inner.value.borrow())
    }

    /// Set a new value and notify subscribers.
    pub fn set(&self, new_value: T) {
        *self.inner.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Update the value in place and notify subscribers.
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.inner.value.borrow_mut());
        self.notify();
    }

    /// Subscribe to changes; keep the id to unsubscribe later.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .subscribers
            .borrow_mut()
            .retain(|(sub_id, _)| *sub_id != id);
    }

    /// Notify all subscribers. Callbacks run after the subscriber-list
    /// borrow is released, so they may read the value or re-subscribe.
    fn notify(&self) {
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    pub fn shares_state_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get_cloned(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}
