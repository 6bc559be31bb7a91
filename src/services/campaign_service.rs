use serde_json::Value;
use uuid::Uuid;

use crate::models::{ApiResponse, Campaign, CreateCampaignRequest, UpdateCampaignRequest};
use crate::services::api_client::{ApiClient, ApiError};
use crate::utils::constants::CAMPAIGNS_PATH;

// Inputs are validated at the form seam (`CreateCampaignRequest::validate`)
// before they reach these transport calls.

/// Create a campaign. Callers follow up with `mutate()` on the
/// campaign list key so every subscriber sees the new entry.
pub async fn create_campaign(
    client: &ApiClient,
    input: &CreateCampaignRequest,
) -> Result<Campaign, ApiError> {
    let response: ApiResponse<Campaign> = client.post(CAMPAIGNS_PATH, input).await?;
    log::info!("✅ Campaign created: {}", response.data.id);
    Ok(response.data)
}

pub async fn update_campaign(
    client: &ApiClient,
    id: Uuid,
    input: &UpdateCampaignRequest,
) -> Result<Campaign, ApiError> {
    let path = format!("{}/{}", CAMPAIGNS_PATH, id);
    let response: ApiResponse<Campaign> = client.put(&path, input).await?;
    Ok(response.data)
}

pub async fn delete_campaign(client: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    let path = format!("{}/{}", CAMPAIGNS_PATH, id);
    let _: ApiResponse<Value> = client.delete(&path).await?;
    log::info!("🗑️ Campaign deleted: {}", id);
    Ok(())
}

/// Send a draft campaign immediately instead of waiting for its
/// schedule.
pub async fn send_campaign_now(client: &ApiClient, id: Uuid) -> Result<Campaign, ApiError> {
    let path = format!("{}/{}/send", CAMPAIGNS_PATH, id);
    let response: ApiResponse<Campaign> = client.post(&path, &Value::Null).await?;
    log::info!("📨 Campaign {} queued for delivery", id);
    Ok(response.data)
}
