use tracing::{info, warn};
use url::Url;

use super::types::{AnalysisResult, AnalyzeRequest, HistoryEntry};
use crate::error::LumeError;

/// HTTP client for the remote analysis service.
///
/// One request per call: no retries, no timeout beyond what the transport
/// imposes. Failures come back as [`LumeError`]; turning them into something
/// displayable is the caller's job.
pub struct DiagnosisClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DiagnosisClient {
    /// Create a client for the service rooted at `base_url`.
    pub fn new(base_url: Url) -> Result<Self, LumeError> {
        let client = reqwest::Client::builder()
            .user_agent("Lume/1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint below the base URL, keeping any path prefix.
    pub fn endpoint(&self, path: &str) -> Result<Url, LumeError> {
        self.base_url
            .join(path)
            .map_err(|e| LumeError::Config(format!("Invalid endpoint '{}': {}", path, e)))
    }

    /// `GET /history`. Order is whatever the service returns.
    pub async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, LumeError> {
        let url = self.endpoint("history")?;
        info!("Fetching history from {}", url);

        let response = self.client.get(url).send().await?;
        let body = read_success_body(response).await?;
        let entries: Vec<HistoryEntry> = serde_json::from_str(&body)?;

        info!("Fetched {} history entries", entries.len());
        Ok(entries)
    }

    /// `POST /analyze` with `{ "log_text": ... }`.
    ///
    /// The service's answer is returned verbatim.
    pub async fn analyze(&self, log_text: &str) -> Result<AnalysisResult, LumeError> {
        let url = self.endpoint("analyze")?;
        info!("Submitting {} bytes of log text to {}", log_text.len(), url);

        let response = self
            .client
            .post(url)
            .json(&AnalyzeRequest { log_text })
            .send()
            .await?;
        let body = read_success_body(response).await?;
        let result: AnalysisResult = serde_json::from_str(&body)?;

        info!(
            "Analysis complete: severity={}, confidence={}",
            result.severity, result.confidence
        );
        Ok(result)
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<String, LumeError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("Analysis service returned {}: {}", status, body);
        return Err(LumeError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.text().await?)
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
pub(crate) fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
