use serde_json::Value;
use uuid::Uuid;

use crate::models::{
    ApiResponse, AutoReplyRule, BulkUpdateRulesRequest, CreateAutoReplyRuleRequest,
};
use crate::services::api_client::{ApiClient, ApiError};
use crate::utils::constants::AUTO_REPLY_RULES_PATH;

pub async fn create_rule(
    client: &ApiClient,
    input: &CreateAutoReplyRuleRequest,
) -> Result<AutoReplyRule, ApiError> {
    let response: ApiResponse<AutoReplyRule> = client.post(AUTO_REPLY_RULES_PATH, input).await?;
    log::info!("✅ Auto-reply rule created: {}", response.data.id);
    Ok(response.data)
}

pub async fn update_rule(
    client: &ApiClient,
    id: Uuid,
    input: &CreateAutoReplyRuleRequest,
) -> Result<AutoReplyRule, ApiError> {
    let path = format!("{}/{}", AUTO_REPLY_RULES_PATH, id);
    let response: ApiResponse<AutoReplyRule> = client.put(&path, input).await?;
    Ok(response.data)
}

pub async fn delete_rule(client: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    let path = format!("{}/{}", AUTO_REPLY_RULES_PATH, id);
    let _: ApiResponse<Value> = client.delete(&path).await?;
    log::info!("🗑️ Auto-reply rule deleted: {}", id);
    Ok(())
}

/// Enables/disables up to five rules in one round-trip.
pub async fn bulk_update_rules(
    client: &ApiClient,
    input: &BulkUpdateRulesRequest,
) -> Result<Vec<AutoReplyRule>, ApiError> {
    let path = format!("{}/bulk", AUTO_REPLY_RULES_PATH);
    let response: ApiResponse<Vec<AutoReplyRule>> = client.post(&path, input).await?;
    log::info!("✅ {} rules updated", response.data.len());
    Ok(response.data)
}
