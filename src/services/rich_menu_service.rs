use serde_json::Value;
use uuid::Uuid;

use crate::models::{ApiResponse, CreateRichMenuRequest, RichMenu};
use crate::services::api_client::{ApiClient, ApiError};
use crate::utils::constants::RICH_MENUS_PATH;

pub async fn create_rich_menu(
    client: &ApiClient,
    input: &CreateRichMenuRequest,
) -> Result<RichMenu, ApiError> {
    let response: ApiResponse<RichMenu> = client.post(RICH_MENUS_PATH, input).await?;
    log::info!("✅ Rich menu created: {}", response.data.id);
    Ok(response.data)
}

pub async fn update_rich_menu(
    client: &ApiClient,
    id: Uuid,
    input: &CreateRichMenuRequest,
) -> Result<RichMenu, ApiError> {
    let path = format!("{}/{}", RICH_MENUS_PATH, id);
    let response: ApiResponse<RichMenu> = client.put(&path, input).await?;
    Ok(response.data)
}

pub async fn delete_rich_menu(client: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    let path = format!("{}/{}", RICH_MENUS_PATH, id);
    let _: ApiResponse<Value> = client.delete(&path).await?;
    log::info!("🗑️ Rich menu deleted: {}", id);
    Ok(())
}

/// Assigns a menu as the account default shown to every chat user.
pub async fn set_default_rich_menu(client: &ApiClient, id: Uuid) -> Result<RichMenu, ApiError> {
    let path = format!("{}/{}/default", RICH_MENUS_PATH, id);
    let response: ApiResponse<RichMenu> = client.post(&path, &Value::Null).await?;
    log::info!("📌 Rich menu {} set as default", id);
    Ok(response.data)
}
