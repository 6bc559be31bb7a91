use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("failed to serialize value: {}", e))?;
    storage.set_item(key, &json)
        .map_err(|_| "failed to write to localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage.remove_item(key)
        .map_err(|_| "failed to remove from localStorage".to_string())?;
    Ok(())
}

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Raw `document.cookie` string, empty when unavailable.
pub fn cookie_string() -> String {
    html_document()
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

/// Expires a cookie by name. Used on logout.
pub fn clear_cookie(name: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{}=; Max-Age=0; path=/", name));
    }
}
