use serde_json::Value;
use yew::prelude::*;

use crate::hooks::use_resource::use_resource;
use crate::models::{ApiResponse, Segment};
use crate::services::ApiClient;
use crate::state::CacheKey;
use crate::utils::constants::SEGMENTS_PATH;

pub struct UseSegmentsHandle {
    pub segments: Vec<Segment>,
    pub is_loading: bool,
    pub is_error: bool,
    pub mutate: Callback<()>,
}

/// Audience segments, shared across every mounted consumer.
#[hook]
pub fn use_segments() -> UseSegmentsHandle {
    let client = ApiClient::from_session();
    let resource = use_resource::<ApiResponse<Vec<Segment>>, _, _>(
        CacheKey::new(SEGMENTS_PATH, "getSegments"),
        move || {
            let client = client.clone();
            async move { client.get::<Value>(SEGMENTS_PATH).await }
        },
    );

    UseSegmentsHandle {
        segments: resource
            .data
            .as_ref()
            .map(|response| response.data.clone())
            .unwrap_or_default(),
        is_loading: resource.is_loading,
        is_error: resource.is_error,
        mutate: resource.mutate,
    }
}
