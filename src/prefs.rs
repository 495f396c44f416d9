//! User preferences kept in the browser's `localStorage`.

use tracing::debug;

pub const THEME_KEY: &str = "theme";
pub const API_URL_KEY: &str = "api_base_url";

const PREFIX: &str = "di2d.";

fn storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .local_storage()
        .map_err(|e| format!("localStorage unavailable: {:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

pub fn get_preference(key: &str) -> Result<Option<String>, String> {
    storage()?
        .get_item(&format!("{}{}", PREFIX, key))
        .map_err(|e| format!("Failed to read preference {}: {:?}", key, e))
}

pub fn set_preference(key: &str, value: &str) -> Result<(), String> {
    debug!("Saving preference {}", key);
    storage()?
        .set_item(&format!("{}{}", PREFIX, key), value)
        .map_err(|e| format!("Failed to save preference {}: {:?}", key, e))
}

pub fn remove_preference(key: &str) -> Result<(), String> {
    storage()?
        .remove_item(&format!("{}{}", PREFIX, key))
        .map_err(|e| format!("Failed to remove preference {}: {:?}", key, e))
}
