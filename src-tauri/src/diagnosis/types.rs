//! Wire types for the analysis service.
//!
//! Decoding is lenient: missing or null fields fall back to defaults and
//! unknown fields are ignored. Values are passed through untouched; the frontend
//! decides how to render them.

use serde::{Deserialize, Deserializer, Serialize};

/// Diagnosis returned by `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Human-readable explanation of the failure
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
    /// "low", "medium", "high", or whatever the service sent
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: String,
    /// Service certainty in percent (not clamped)
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: i64,
    /// Recommended fix, if the service provided one
    #[serde(default)]
    pub fix: Option<String>,
}

/// One previously diagnosed log, as listed by `GET /history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Service-assigned identifier, normalised to a string
    #[serde(deserialize_with = "deserialize_entry_id")]
    pub id: String,
    /// The submitted log text, never truncated here
    #[serde(default, deserialize_with = "null_as_default")]
    pub log: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: String,
}

/// Request body for `POST /analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub log_text: &'a str,
}

/// `null` decodes like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts string or numeric ids; anything else is a malformed entry.
fn deserialize_entry_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "history id must be a string or number, got {}",
            other
        ))),
    }
}
