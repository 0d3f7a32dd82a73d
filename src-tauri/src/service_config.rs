//! Where the analysis service lives.
//!
//! Resolution order: the `service_url` preference, then the
//! `LUME_SERVICE_URL` environment variable, then the local default.

use url::Url;

use crate::diagnosis::client::with_trailing_slash;
use crate::error::LumeError;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";
pub const SERVICE_URL_ENV: &str = "LUME_SERVICE_URL";
pub const PREFERENCES_STORE: &str = "preferences.json";
pub const SERVICE_URL_KEY: &str = "service_url";

/// Parse and normalise a user-supplied base URL.
///
/// Only http(s) URLs are accepted. The result always ends in `/`.
pub fn parse_service_url(raw: &str) -> Result<Url, LumeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LumeError::Config("Service URL is empty".to_string()));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| LumeError::Config(format!("Invalid service URL '{}': {}", trimmed, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(with_trailing_slash(url)),
        other => Err(LumeError::Config(format!(
            "Unsupported scheme '{}' in service URL (expected http or https)",
            other
        ))),
    }
}

/// Pick the first non-blank candidate, in precedence order.
pub fn resolve_service_url(
    stored: Option<&str>,
    env: Option<&str>,
) -> Result<Url, LumeError> {
    let chosen = [stored, env]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_SERVICE_URL);

    parse_service_url(chosen)
}

/// Resolve the service URL for a running app.
pub fn service_url(app: &tauri::AppHandle) -> Result<Url, LumeError> {
    use tauri_plugin_store::StoreExt;

    let stored = app
        .store(PREFERENCES_STORE)
        .map_err(|e| LumeError::Config(format!("Failed to open preferences: {}", e)))?
        .get(SERVICE_URL_KEY)
        .and_then(|v| v.as_str().map(|s| s.to_string()));
    let env = std::env::var(SERVICE_URL_ENV).ok();

    resolve_service_url(stored.as_deref(), env.as_deref())
}
