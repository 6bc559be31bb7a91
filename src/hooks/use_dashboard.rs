use serde_json::Value;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_resource::use_resource;
use crate::models::{ApiResponse, DashboardStats};
use crate::services::{fetch_with_retry, ApiClient};
use crate::state::CacheKey;
use crate::utils::constants::DASHBOARD_STATS_PATH;

pub struct UseDashboardStatsHandle {
    pub stats: Option<DashboardStats>,
    pub is_loading: bool,
    pub is_error: bool,
    pub mutate: Callback<()>,
}

/// Landing-page statistics. The read is idempotent and opts into
/// retry-with-backoff; other resources stay single-attempt.
#[hook]
pub fn use_dashboard_stats() -> UseDashboardStatsHandle {
    let client = ApiClient::from_session();
    let resource = use_resource::<ApiResponse<DashboardStats>, _, _>(
        CacheKey::new(DASHBOARD_STATS_PATH, "getDashboardStats"),
        move || {
            let client = client.clone();
            async move {
                fetch_with_retry(CONFIG.retry_attempts, || {
                    let client = client.clone();
                    async move { client.get::<Value>(DASHBOARD_STATS_PATH).await }
                })
                .await
            }
        },
    );

    UseDashboardStatsHandle {
        stats: resource.data.as_ref().map(|response| response.data.clone()),
        is_loading: resource.is_loading,
        is_error: resource.is_error,
        mutate: resource.mutate,
    }
}
