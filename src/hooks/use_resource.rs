use std::future::Future;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api_client::ApiError;
use crate::state::resource_cache::{with_cache, CacheKey};

/// What a component sees of a remote resource.
///
/// `is_loading` is true exactly while the very first fetch is pending
/// (no data, no error recorded yet). `is_error` is asserted only once a
/// fetch attempt has completed without any data recorded; last-good
/// data from an earlier success suppresses it.
pub struct UseResourceHandle<T> {
    pub data: Option<Rc<T>>,
    pub error: Option<ApiError>,
    pub is_loading: bool,
    pub is_error: bool,
    /// Forces revalidation and republishes to every subscriber of the key.
    pub mutate: Callback<()>,
}

impl<T> Clone for UseResourceHandle<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            error: self.error.clone(),
            is_loading: self.is_loading,
            is_error: self.is_error,
            mutate: self.mutate.clone(),
        }
    }
}

fn start_fetch<F, Fut>(key: &CacheKey, fetcher: &F)
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Value, ApiError>> + 'static,
{
    // Single-flight: losing the claim means another consumer's request
    // is already pending and this one joins it by subscription.
    if !with_cache(|cache| cache.begin_fetch(key)) {
        return;
    }

    let future = fetcher();
    let key = key.clone();
    spawn_local(async move {
        let result = future.await;
        if let Err(error) = &result {
            log::error!("❌ Fetch failed for {}: {}", key.normalized(), error);
        }
        with_cache(|cache| cache.complete_fetch(&key, result));
    });
}

/// Cache-aware data hook over the tab-local resource cache.
///
/// All mounted consumers of the same `key` share one entry and one
/// in-flight request. Unmounting only unsubscribes this component; it
/// does not abort the request, and other subscribers still receive the
/// outcome.
#[hook]
pub fn use_resource<T, F, Fut>(key: CacheKey, fetcher: F) -> UseResourceHandle<T>
where
    T: DeserializeOwned + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Value, ApiError>> + 'static,
{
    let update = use_force_update();

    {
        let update = update.clone();
        use_effect_with(key.clone(), move |key| {
            let id = with_cache(|cache| {
                cache.subscribe(key, Rc::new(move || update.force_update()))
            });
            let key = key.clone();
            move || with_cache(|cache| cache.unsubscribe(&key, id))
        });
    }

    let snapshot = with_cache(|cache| cache.snapshot(&key));

    // Empty entry: this render kicks off the initial fetch (or the
    // refetch after an invalidation).
    if snapshot.data.is_none() && snapshot.error.is_none() && !snapshot.in_flight {
        start_fetch(&key, &fetcher);
    }

    let mutate = {
        let key = key.clone();
        Callback::from(move |_: ()| start_fetch(&key, &fetcher))
    };

    let (data, decode_error) = match snapshot.data {
        Some(value) => match serde_json::from_value::<T>(value) {
            Ok(decoded) => (Some(Rc::new(decoded)), None),
            Err(e) => (None, Some(ApiError::Decode(e.to_string()))),
        },
        None => (None, None),
    };
    let error = decode_error.or(snapshot.error);

    let (is_loading, is_error) = status_flags(data.is_some(), error.is_some());

    UseResourceHandle { data, error, is_loading, is_error, mutate }
}

/// Derives `(is_loading, is_error)`: loading until the first outcome is
/// recorded; error only once an attempt completed without any data, so
/// retained last-good data suppresses it.
fn status_flags(has_data: bool, has_error: bool) -> (bool, bool) {
    (!has_data && !has_error, has_error && !has_data)
}
