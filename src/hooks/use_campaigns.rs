use serde_json::Value;
use yew::prelude::*;

use crate::hooks::use_resource::use_resource;
use crate::models::{ApiResponse, Campaign};
use crate::services::ApiClient;
use crate::state::CacheKey;
use crate::utils::constants::CAMPAIGNS_PATH;

pub struct UseCampaignsHandle {
    pub campaigns: Vec<Campaign>,
    pub is_loading: bool,
    pub is_error: bool,
    pub mutate: Callback<()>,
}

#[hook]
pub fn use_campaigns() -> UseCampaignsHandle {
    let client = ApiClient::from_session();
    let resource = use_resource::<ApiResponse<Vec<Campaign>>, _, _>(
        CacheKey::new(CAMPAIGNS_PATH, "getCampaigns"),
        move || {
            let client = client.clone();
            async move { client.get::<Value>(CAMPAIGNS_PATH).await }
        },
    );

    UseCampaignsHandle {
        campaigns: resource
            .data
            .as_ref()
            .map(|response| response.data.clone())
            .unwrap_or_default(),
        is_loading: resource.is_loading,
        is_error: resource.is_error,
        mutate: resource.mutate,
    }
}
