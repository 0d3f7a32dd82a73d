use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::diagnosis::{AnalysisResult, HistoryEntry};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeLogArgs {
    log_text: String,
}

#[derive(Serialize)]
struct SetServiceUrlArgs {
    url: String,
}

fn invoke_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

// -- Diagnosis --

/// Fetch the service's history, in service order.
pub async fn fetch_history() -> Result<Vec<HistoryEntry>, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("fetch_history", args).await.map_err(invoke_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Submit a log for analysis. Errors are raw; see `TauriDiagnosis` for the
/// fallback policy.
pub async fn analyze_log(log_text: &str) -> Result<AnalysisResult, String> {
    let args = serde_wasm_bindgen::to_value(&AnalyzeLogArgs {
        log_text: log_text.to_string(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("analyze_log", args).await.map_err(invoke_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// -- Settings --

pub async fn get_service_url() -> Result<String, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("get_service_url", args).await.map_err(invoke_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Store a new service URL. Returns it as the backend normalised it.
pub async fn set_service_url(url: &str) -> Result<String, String> {
    let args = serde_wasm_bindgen::to_value(&SetServiceUrlArgs {
        url: url.to_string(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("set_service_url", args).await.map_err(invoke_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
