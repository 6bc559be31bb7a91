pub mod api_client;
pub mod auto_reply_service;
pub mod campaign_service;
pub mod rich_menu_service;
pub mod template_service;

pub use api_client::{fetch_with_retry, ApiClient, ApiError};
