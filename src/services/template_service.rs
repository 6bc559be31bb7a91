use serde_json::Value;
use uuid::Uuid;

use crate::models::{ApiResponse, CreateTemplateRequest, MessageTemplate};
use crate::services::api_client::{ApiClient, ApiError};
use crate::utils::constants::TEMPLATES_PATH;

pub async fn create_template(
    client: &ApiClient,
    input: &CreateTemplateRequest,
) -> Result<MessageTemplate, ApiError> {
    let response: ApiResponse<MessageTemplate> = client.post(TEMPLATES_PATH, input).await?;
    log::info!("✅ Template created: {}", response.data.id);
    Ok(response.data)
}

pub async fn delete_template(client: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    let path = format!("{}/{}", TEMPLATES_PATH, id);
    let _: ApiResponse<Value> = client.delete(&path).await?;
    Ok(())
}
