//! Diagnosis data model and the client boundary to the analysis service.
//!
//! [`DiagnosisService`] is the seam the session logic talks to. The app uses
//! [`TauriDiagnosis`], which goes through the backend over IPC; tests plug in
//! fakes.

use std::fmt;

use serde::Deserialize;

use crate::commands;

/// Name shown when the analysis service cannot be reached.
pub const SERVICE_NAME: &str = "Lume Backend";

pub const HIGH_COLOR: &str = "#ef4444";
pub const MEDIUM_COLOR: &str = "#f59e0b";
pub const LOW_COLOR: &str = "#10b981";

/// Coarse classification of how serious a diagnosed issue is.
///
/// Unknown values are kept rather than rejected, so a service that invents a
/// new level still renders (with the low color).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Severity {
    Low,
    Medium,
    High,
    Unrecognized(String),
}

impl Severity {
    /// Exact match only; "HIGH" or " high" stay unrecognized.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            _ => Severity::Unrecognized(raw.to_string()),
        }
    }

    /// Display color. Total: anything not high or medium gets the low color.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::High => HIGH_COLOR,
            Severity::Medium => MEDIUM_COLOR,
            Severity::Low | Severity::Unrecognized(_) => LOW_COLOR,
        }
    }

    /// Upper-cased label, e.g. "HIGH".
    pub fn label(&self) -> String {
        match self {
            Severity::Low => "LOW".to_string(),
            Severity::Medium => "MEDIUM".to_string(),
            Severity::High => "HIGH".to_string(),
            Severity::Unrecognized(raw) => raw.to_uppercase(),
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Unrecognized(String::new())
    }
}

impl From<Option<String>> for Severity {
    fn from(raw: Option<String>) -> Self {
        raw.map(|s| Severity::parse(&s)).unwrap_or_default()
    }
}

/// Structured diagnosis for one submitted log.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub severity: Severity,
    /// Percent, passed through exactly as the service sent it
    #[serde(default)]
    pub confidence: i64,
    #[serde(default)]
    pub fix: Option<String>,
}

impl AnalysisResult {
    /// The result shown when a submission could not be analyzed.
    pub fn fallback() -> Self {
        Self {
            explanation: format!("Error connecting to {}.", SERVICE_NAME),
            severity: Severity::High,
            confidence: 0,
            fix: None,
        }
    }
}

/// One row of the service's history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// Full submitted text; clipping is left to the view
    #[serde(default)]
    pub log: String,
    #[serde(default)]
    pub severity: Severity,
}

/// Outcome of a submission. Both arms carry something displayable.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Diagnosed(AnalysisResult),
    Fallback(AnalysisResult),
}

impl SubmitOutcome {
    /// Only a real diagnosis changes what the service has on record.
    pub fn refreshes_history(&self) -> bool {
        matches!(self, SubmitOutcome::Diagnosed(_))
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            SubmitOutcome::Diagnosed(result) | SubmitOutcome::Fallback(result) => result,
        }
    }
}

/// History could not be fetched. Callers keep what they already show.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryUnavailable(pub String);

impl fmt::Display for HistoryUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "history unavailable: {}", self.0)
    }
}

/// The two operations the console needs from the analysis service.
///
/// `submit` never fails: service errors become [`SubmitOutcome::Fallback`].
pub trait DiagnosisService {
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, HistoryUnavailable>;
    async fn submit(&self, log_text: &str) -> SubmitOutcome;
}

/// Production service: calls the Tauri backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriDiagnosis;

impl DiagnosisService for TauriDiagnosis {
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, HistoryUnavailable> {
        commands::fetch_history().await.map_err(|e| {
            web_sys::console::warn_1(&format!("History fetch failed: {}", e).into());
            HistoryUnavailable(e)
        })
    }

    async fn submit(&self, log_text: &str) -> SubmitOutcome {
        match commands::analyze_log(log_text).await {
            Ok(result) => SubmitOutcome::Diagnosed(result),
            Err(e) => {
                web_sys::console::error_1(&format!("Analysis failed: {}", e).into());
                SubmitOutcome::Fallback(AnalysisResult::fallback())
            }
        }
    }
}
