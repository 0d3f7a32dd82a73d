use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::service_config::{self, PREFERENCES_STORE, SERVICE_URL_KEY};

/// The service URL currently in effect (preference, env, or default).
#[tauri::command]
pub fn get_service_url(app: AppHandle) -> Result<String, String> {
    let url = service_config::service_url(&app)?;
    Ok(url.to_string())
}

/// Validate and persist a new service URL. Returns the normalised form.
#[tauri::command]
pub fn set_service_url(app: AppHandle, url: &str) -> Result<String, String> {
    let parsed = service_config::parse_service_url(url)?;
    info!("Setting service URL: {}", parsed);

    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    store.set(SERVICE_URL_KEY, serde_json::json!(parsed.as_str()));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        e.to_string()
    })?;

    Ok(parsed.to_string())
}
