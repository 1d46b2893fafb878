//! Upstream HTTP client with timeout and error classification.
//!
//! # Responsibilities
//! - Submit checks to the provider and extract the correlation id
//! - Fetch per-node results for a submitted check
//! - Classify failures (transport, status, decode, contract)
//! - Preserve raw payloads on decode failures for diagnostics

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::types::{CorrelationId, ResultSet, UpstreamError, UpstreamResult};

/// Client for the check-host.net submission and result endpoints.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base: Url,
    submit_timeout: Duration,
}

impl UpstreamClient {
    /// Create a client from configuration.
    ///
    /// Fails only if the configured base URL does not parse.
    pub fn new(config: &UpstreamConfig) -> Result<Self, url::ParseError> {
        let base = Url::parse(&config.base_url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
            submit_timeout: Duration::from_secs(config.submit_timeout_secs),
        })
    }

    /// Base URL of the provider.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Submit a check and extract its correlation id.
    ///
    /// Bounded by the submission timeout, which is distinct from the poll
    /// budget. All failure modes here are terminal for the check.
    pub async fn submit(&self, url: Url) -> UpstreamResult<CorrelationId> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(self.submit_timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_submission(status, body)
    }

    /// Fetch the current result set for a submitted check.
    ///
    /// No explicit timeout beyond the client default; each call lives
    /// inside one poll iteration and the loop owns the overall budget.
    pub async fn fetch(&self, id: &CorrelationId) -> UpstreamResult<ResultSet> {
        let mut url = self.base.clone();
        url.set_path(&format!("check-result/{}", id.as_str()));

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status { status, raw: body });
        }
        match serde_json::from_str::<ResultSet>(&body) {
            Ok(set) => Ok(set),
            Err(_) => Err(UpstreamError::Decode { raw: body }),
        }
    }
}

/// Decode a submission response body into a correlation id.
///
/// Split out of [`UpstreamClient::submit`] so the failure taxonomy is
/// testable without a socket.
fn parse_submission(status: StatusCode, body: String) -> UpstreamResult<CorrelationId> {
    if !status.is_success() {
        return Err(UpstreamError::Status { status, raw: body });
    }
    let value: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!(body = %body, "Non-JSON response from upstream submission");
            return Err(UpstreamError::Decode { raw: body });
        }
    };
    match value.get("request_id").and_then(Value::as_str) {
        Some(id) => Ok(CorrelationId(id.to_string())),
        None => Err(UpstreamError::MissingRequestId { raw: value }),
    }
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("base", &self.base.as_str())
            .field("submit_timeout", &self.submit_timeout)
            .finish()
    }
}
