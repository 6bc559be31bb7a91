use serde_json::Value;
use yew::prelude::*;

use crate::hooks::use_resource::use_resource;
use crate::models::{ApiResponse, MessageTemplate};
use crate::services::ApiClient;
use crate::state::CacheKey;
use crate::utils::constants::TEMPLATES_PATH;

pub struct UseTemplatesHandle {
    pub templates: Vec<MessageTemplate>,
    pub is_loading: bool,
    pub is_error: bool,
    pub mutate: Callback<()>,
}

#[hook]
pub fn use_templates() -> UseTemplatesHandle {
    let client = ApiClient::from_session();
    let resource = use_resource::<ApiResponse<Vec<MessageTemplate>>, _, _>(
        CacheKey::new(TEMPLATES_PATH, "getTemplates"),
        move || {
            let client = client.clone();
            async move { client.get::<Value>(TEMPLATES_PATH).await }
        },
    );

    UseTemplatesHandle {
        templates: resource
            .data
            .as_ref()
            .map(|response| response.data.clone())
            .unwrap_or_default(),
        is_loading: resource.is_loading,
        is_error: resource.is_error,
        mutate: resource.mutate,
    }
}
