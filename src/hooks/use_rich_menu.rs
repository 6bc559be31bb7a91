use serde_json::Value;
use yew::prelude::*;

use crate::hooks::use_resource::use_resource;
use crate::models::{ApiResponse, RichMenu};
use crate::services::ApiClient;
use crate::state::CacheKey;
use crate::utils::constants::RICH_MENUS_PATH;

pub struct UseRichMenusHandle {
    pub rich_menus: Vec<RichMenu>,
    pub is_loading: bool,
    pub is_error: bool,
    pub mutate: Callback<()>,
}

#[hook]
pub fn use_rich_menus() -> UseRichMenusHandle {
    let client = ApiClient::from_session();
    let resource = use_resource::<ApiResponse<Vec<RichMenu>>, _, _>(
        CacheKey::new(RICH_MENUS_PATH, "getRichMenus"),
        move || {
            let client = client.clone();
            async move { client.get::<Value>(RICH_MENUS_PATH).await }
        },
    );

    UseRichMenusHandle {
        rich_menus: resource
            .data
            .as_ref()
            .map(|response| response.data.clone())
            .unwrap_or_default(),
        is_loading: resource.is_loading,
        is_error: resource.is_error,
        mutate: resource.mutate,
    }
}
