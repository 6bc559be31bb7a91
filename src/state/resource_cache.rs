//! Tab-local cache shared by every mounted consumer of a resource.
//!
//! Entries are keyed by a normalized string built from (REST path,
//! logical operation name). The only sanctioned write paths are
//! `begin_fetch`/`complete_fetch` (driven by the resource hooks) and
//! `invalidate`; nothing else may push data into the cache.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use crate::services::api_client::ApiError;
use crate::state::reactivity::SubscriptionId;

/// Stable identity of a remote resource: REST path plus the logical
/// operation name. Equal keys share one cache entry and one in-flight
/// request across all mounted components.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    path: String,
    operation: String,
}

impl CacheKey {
    pub fn new(path: impl Into<String>, operation: impl Into<String>) -> Self {
        Self { path: path.into(), operation: operation.into() }
    }

    /// Map key: `<path>#<operation>`.
    pub fn normalized(&self) -> String {
        format!("{}#{}", self.path, self.operation)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }
}

/// Point-in-time view of an entry, cheap to clone into render code.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntrySnapshot {
    pub data: Option<Value>,
    pub error: Option<ApiError>,
    pub in_flight: bool,
}

#[derive(Default)]
struct CacheEntry {
    data: Option<Value>,
    error: Option<ApiError>,
    in_flight: bool,
    subscribers: Vec<(SubscriptionId, Rc<dyn Fn()>)>,
}

pub struct ResourceCache {
    entries: RefCell<HashMap<String, CacheEntry>>,
    next_id: Cell<SubscriptionId>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn snapshot(&self, key: &CacheKey) -> EntrySnapshot {
        let entries = self.entries.borrow();
        match entries.get(&key.normalized()) {
            Some(entry) => EntrySnapshot {
                data: entry.data.clone(),
                error: entry.error.clone(),
                in_flight: entry.in_flight,
            },
            None => EntrySnapshot::default(),
        }
    }

    pub fn subscribe(&self, key: &CacheKey, callback: Rc<dyn Fn()>) -> SubscriptionId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let mut entries = self.entries.borrow_mut();
        entries
            .entry(key.normalized())
            .or_default()
            .subscribers
            .push((id, callback));
        id
    }

    pub fn unsubscribe(&self, key: &CacheKey, id: SubscriptionId) {
        let mut entries = self.entries.borrow_mut();
        if let Some(entry) = entries.get_mut(&key.normalized()) {
            entry.subscribers.retain(|(sub_id, _)| *sub_id != id);
        }
    }

    /// Claims the in-flight slot for a key. Returns `true` when the
    /// caller must perform the network call; `false` when another
    /// consumer already has one pending (single-flight: the caller
    /// joins that flight by subscription instead).
    pub fn begin_fetch(&self, key: &CacheKey) -> bool {
        let mut entries = self.entries.borrow_mut();
        let entry = entries.entry(key.normalized()).or_default();
        if entry.in_flight {
            return false;
        }
        entry.in_flight = true;
        true
    }

    /// Publishes a fetch outcome and wakes every subscriber of the key.
    ///
    /// On success the payload replaces the entry wholesale and any prior
    /// error is cleared. On failure the error is recorded but last-good
    /// data is retained, so consumers keep rendering it.
    pub fn complete_fetch(&self, key: &CacheKey, result: Result<Value, ApiError>) {
        {
            let mut entries = self.entries.borrow_mut();
            let entry = entries.entry(key.normalized()).or_default();
            entry.in_flight = false;
            match result {
                Ok(value) => {
                    entry.data = Some(value);
                    entry.error = None;
                }
                Err(error) => {
                    entry.error = Some(error);
                }
            }
        }
        self.notify(key);
    }

    /// Drops an entry's data and error, then wakes subscribers; the
    /// next render of any consumer starts a fresh fetch.
    pub fn invalidate(&self, key: &CacheKey) {
        {
            let mut entries = self.entries.borrow_mut();
            if let Some(entry) = entries.get_mut(&key.normalized()) {
                entry.data = None;
                entry.error = None;
            }
        }
        self.notify(key);
    }

    /// Callbacks run after the map borrow is released, so a subscriber
    /// may take snapshots or re-subscribe from inside its callback.
    fn notify(&self, key: &CacheKey) {
        let callbacks: Vec<Rc<dyn Fn()>> = {
            let entries = self.entries.borrow();
            match entries.get(&key.normalized()) {
                Some(entry) => entry.subscribers.iter().map(|(_, cb)| cb.clone()).collect(),
                None => Vec::new(),
            }
        };
        for callback in callbacks {
            callback();
        }
    }
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static RESOURCE_CACHE: ResourceCache = ResourceCache::new();
}

/// Access the tab-local cache instance shared by all hooks.
pub fn with_cache<R>(f: impl FnOnce(&ResourceCache) -> R) -> R {
    RESOURCE_CACHE.with(|cache| f(cache))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key() -> CacheKey {
        CacheKey::new("/api/v1/audience/segments", "getSegments")
    }

    #[test]
    fn equal_components_normalize_to_the_same_key() {
        let a = CacheKey::new("/api/v1/campaigns", "getCampaigns");
        let b = CacheKey::new("/api/v1/campaigns", "getCampaigns");
        assert_eq!(a.normalized(), b.normalized());

        // Same path, different operation: distinct entries
        let c = CacheKey::new("/api/v1/campaigns", "getCampaign");
        assert_ne!(a.normalized(), c.normalized());
    }

    #[test]
    fn only_the_first_concurrent_consumer_fetches() {
        let cache = ResourceCache::new();
        let mut network_calls = 0;

        // Two components mount simultaneously on the same key
        if cache.begin_fetch(&key()) {
            network_calls += 1;
        }
        if cache.begin_fetch(&key()) {
            network_calls += 1;
        }
        assert_eq!(network_calls, 1);

        // Once the flight lands, a revalidation may start a new one
        cache.complete_fetch(&key(), Ok(json!({"ok": true, "data": []})));
        assert!(cache.begin_fetch(&key()));
    }

    #[test]
    fn completion_wakes_every_subscriber() {
        let cache = ResourceCache::new();
        let woken = Rc::new(Cell::new(0u32));

        for _ in 0..3 {
            let woken = woken.clone();
            cache.subscribe(&key(), Rc::new(move || woken.set(woken.get() + 1)));
        }

        assert!(cache.begin_fetch(&key()));
        cache.complete_fetch(&key(), Ok(json!({"ok": true, "data": []})));
        assert_eq!(woken.get(), 3);
    }

    #[test]
    fn payload_round_trips_exactly() {
        let cache = ResourceCache::new();
        let payload = json!({
            "ok": true,
            "data": [{"id": "s1", "name": "VIP", "description": "", "count": 3}]
        });

        assert!(cache.begin_fetch(&key()));
        cache.complete_fetch(&key(), Ok(payload.clone()));

        let snap = cache.snapshot(&key());
        assert_eq!(snap.data, Some(payload));
        assert_eq!(snap.error, None);
        assert!(!snap.in_flight);
    }

    #[test]
    fn failure_records_error_and_keeps_last_good_data() {
        let cache = ResourceCache::new();
        let payload = json!({"ok": true, "data": [1, 2, 3]});

        assert!(cache.begin_fetch(&key()));
        cache.complete_fetch(&key(), Ok(payload.clone()));

        // Revalidation fails; stale data must survive
        assert!(cache.begin_fetch(&key()));
        cache.complete_fetch(&key(), Err(ApiError::Network("connection refused".to_string())));

        let snap = cache.snapshot(&key());
        assert_eq!(snap.data, Some(payload));
        assert!(matches!(snap.error, Some(ApiError::Network(_))));
    }

    #[test]
    fn success_after_failure_clears_the_error() {
        let cache = ResourceCache::new();

        assert!(cache.begin_fetch(&key()));
        cache.complete_fetch(&key(), Err(ApiError::TimedOut(30)));
        assert!(cache.snapshot(&key()).error.is_some());
        assert!(cache.snapshot(&key()).data.is_none());

        // mutate(): revalidate and republish
        assert!(cache.begin_fetch(&key()));
        cache.complete_fetch(&key(), Ok(json!({"ok": true, "data": []})));

        let snap = cache.snapshot(&key());
        assert!(snap.error.is_none());
        assert!(snap.data.is_some());
    }

    #[test]
    fn unsubscribed_consumers_stop_receiving_updates() {
        let cache = ResourceCache::new();
        let woken = Rc::new(Cell::new(0u32));

        let woken_cb = woken.clone();
        let id = cache.subscribe(&key(), Rc::new(move || woken_cb.set(woken_cb.get() + 1)));

        let other_woken = Rc::new(Cell::new(0u32));
        let other_cb = other_woken.clone();
        cache.subscribe(&key(), Rc::new(move || other_cb.set(other_cb.get() + 1)));

        // Unmounting one component must not detach the other
        cache.unsubscribe(&key(), id);

        assert!(cache.begin_fetch(&key()));
        cache.complete_fetch(&key(), Ok(json!(null)));

        assert_eq!(woken.get(), 0);
        assert_eq!(other_woken.get(), 1);
    }

    #[test]
    fn invalidate_clears_the_entry_and_notifies() {
        let cache = ResourceCache::new();
        let woken = Rc::new(Cell::new(0u32));
        let woken_cb = woken.clone();
        cache.subscribe(&key(), Rc::new(move || woken_cb.set(woken_cb.get() + 1)));

        assert!(cache.begin_fetch(&key()));
        cache.complete_fetch(&key(), Ok(json!({"ok": true, "data": []})));
        assert_eq!(woken.get(), 1);

        cache.invalidate(&key());
        let snap = cache.snapshot(&key());
        assert!(snap.data.is_none());
        assert!(snap.error.is_none());
        assert_eq!(woken.get(), 2);
    }

    #[test]
    fn subscriber_may_snapshot_from_inside_its_callback() {
        let cache = Rc::new(ResourceCache::new());
        let seen = Rc::new(RefCell::new(None));

        let cache_cb = cache.clone();
        let seen_cb = seen.clone();
        cache.subscribe(&key(), Rc::new(move || {
            *seen_cb.borrow_mut() = cache_cb.snapshot(&key()).data;
        }));

        assert!(cache.begin_fetch(&key()));
        cache.complete_fetch(&key(), Ok(json!(42)));
        assert_eq!(*seen.borrow(), Some(json!(42)));
    }
}
