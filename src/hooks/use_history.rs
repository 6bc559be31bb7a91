use serde_json::Value;
use yew::prelude::*;

use crate::hooks::use_resource::use_resource;
use crate::models::{ApiResponse, MessageHistory};
use crate::services::ApiClient;
use crate::state::CacheKey;
use crate::utils::constants::HISTORY_PATH;

pub struct UseHistoryHandle {
    pub entries: Vec<MessageHistory>,
    pub is_loading: bool,
    pub is_error: bool,
    pub mutate: Callback<()>,
}

#[hook]
pub fn use_history() -> UseHistoryHandle {
    let client = ApiClient::from_session();
    let resource = use_resource::<ApiResponse<Vec<MessageHistory>>, _, _>(
        CacheKey::new(HISTORY_PATH, "getHistory"),
        move || {
            let client = client.clone();
            async move { client.get::<Value>(HISTORY_PATH).await }
        },
    );

    UseHistoryHandle {
        entries: resource
            .data
            .as_ref()
            .map(|response| response.data.clone())
            .unwrap_or_default(),
        is_loading: resource.is_loading,
        is_error: resource.is_error,
        mutate: resource.mutate,
    }
}
