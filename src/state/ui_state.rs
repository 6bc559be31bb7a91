use crate::state::reactivity::{ReactiveState, SubscriptionId};

/// Ephemeral cross-component UI flags. Tab-local, reset on reload.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct UiFlags {
    pub sidebar_open: bool,
    pub is_loading: bool,
}

/// View-state store passed down through context. Last-write-wins;
/// subscribers are notified synchronously by the setters.
#[derive(Clone)]
pub struct UiStore {
    state: ReactiveState<UiFlags>,
}

impl UiStore {
    pub fn new() -> Self {
        Self { state: ReactiveState::new(UiFlags::default()) }
    }

    pub fn snapshot(&self) -> UiFlags {
        self.state.get_cloned()
    }

    pub fn sidebar_open(&self) -> bool {
        self.state.with(|flags| flags.sidebar_open)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|flags| flags.is_loading)
    }

    pub fn set_open(&self, open: bool) {
        self.state.update(|flags| flags.sidebar_open = open);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|flags| flags.is_loading = loading);
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) -> SubscriptionId {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UiStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiStore").field("state", &self.snapshot()).finish()
    }
}

// Context equality: two handles are the same store iff they share state
impl PartialEq for UiStore {
    fn eq(&self, other: &Self) -> bool {
        self.state.shares_state_with(&other.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn set_open_is_visible_synchronously() {
        let store = UiStore::new();
        assert!(!store.sidebar_open());

        store.set_open(true);
        assert!(store.sidebar_open());
    }

    #[test]
    fn setters_do_not_touch_unrelated_fields() {
        let store = UiStore::new();
        store.set_loading(true);
        store.set_open(true);
        store.set_open(false);

        // is_loading unaffected by sidebar writes
        assert!(store.is_loading());
        assert!(!store.sidebar_open());
    }

    #[test]
    fn subscriber_sees_the_new_value_before_the_setter_returns() {
        let store = UiStore::new();
        let observed = Rc::new(Cell::new(false));

        let store_cb = store.clone();
        let observed_cb = observed.clone();
        store.subscribe(move || observed_cb.set(store_cb.sidebar_open()));

        store.set_open(true);
        assert!(observed.get());
    }

    #[test]
    fn cloned_handles_share_the_store() {
        let store = UiStore::new();
        let handle = store.clone();
        assert_eq!(store, handle);

        handle.set_open(true);
        assert!(store.sidebar_open());

        // Two independent stores are not equal
        assert_ne!(store, UiStore::new());
    }
}
