//! Tauri commands for log diagnosis.
//!
//! Thin wrappers over [`DiagnosisClient`]: resolve the service URL, make one
//! request, hand the typed result back to the frontend.

use tracing::{info, warn};

use crate::diagnosis::{AnalysisResult, DiagnosisClient, HistoryEntry};
use crate::service_config;

/// List previously diagnosed logs, in service order.
#[tauri::command]
pub async fn fetch_history(app: tauri::AppHandle) -> Result<Vec<HistoryEntry>, String> {
    let client = DiagnosisClient::new(service_config::service_url(&app)?)?;

    client.fetch_history().await.map_err(|e| {
        warn!("History fetch failed: {}", e);
        e.into()
    })
}

/// Submit a log for analysis.
///
/// Errors are returned as-is; the frontend substitutes its fallback result.
#[tauri::command]
pub async fn analyze_log(
    app: tauri::AppHandle,
    log_text: String,
) -> Result<AnalysisResult, String> {
    if log_text.is_empty() {
        return Err("Nothing to analyze: log text is empty".to_string());
    }

    let client = DiagnosisClient::new(service_config::service_url(&app)?)?;

    match client.analyze(&log_text).await {
        Ok(result) => {
            info!("Diagnosis received ({} severity)", result.severity);
            Ok(result)
        }
        Err(e) => {
            warn!("Analysis request failed: {}", e);
            Err(e.into())
        }
    }
}
