use serde_json::Value;
use yew::prelude::*;

use crate::hooks::use_resource::use_resource;
use crate::models::{ApiResponse, AutoReplyRule};
use crate::services::ApiClient;
use crate::state::CacheKey;
use crate::utils::constants::AUTO_REPLY_RULES_PATH;

pub struct UseAutoReplyRulesHandle {
    pub rules: Vec<AutoReplyRule>,
    pub is_loading: bool,
    pub is_error: bool,
    pub mutate: Callback<()>,
}

#[hook]
pub fn use_auto_reply_rules() -> UseAutoReplyRulesHandle {
    let client = ApiClient::from_session();
    let resource = use_resource::<ApiResponse<Vec<AutoReplyRule>>, _, _>(
        CacheKey::new(AUTO_REPLY_RULES_PATH, "getAutoReplyRules"),
        move || {
            let client = client.clone();
            async move { client.get::<Value>(AUTO_REPLY_RULES_PATH).await }
        },
    );

    UseAutoReplyRulesHandle {
        rules: resource
            .data
            .as_ref()
            .map(|response| response.data.clone())
            .unwrap_or_default(),
        is_loading: resource.is_loading,
        is_error: resource.is_error,
        mutate: resource.mutate,
    }
}
