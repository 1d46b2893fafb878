//! Upstream-specific types and error definitions.

use serde_json::Value;
use thiserror::Error;

/// Correlation identifier returned by the submission endpoint.
///
/// Opaque string, created once per check and used as the key for every
/// subsequent result fetch of that check. Scoped to one inbound call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-check result map: vantage-point node name → result value.
///
/// A node that has not reported yet maps to `Value::Null`; the provider
/// mutates this server-side, we only ever observe snapshots.
pub type ResultSet = serde_json::Map<String, Value>;

/// Errors that can occur talking to the upstream provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection failure or timeout at the transport level.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status.
    #[error("upstream returned status {status}")]
    Status {
        status: reqwest::StatusCode,
        raw: String,
    },

    /// Response body was not valid JSON.
    #[error("upstream returned non-JSON response")]
    Decode { raw: String },

    /// Submission response decoded but carried no string `request_id`.
    #[error("no request_id in upstream response")]
    MissingRequestId { raw: Value },
}

impl UpstreamError {
    /// Raw upstream payload for attaching to error responses, when one
    /// was captured before the failure.
    pub fn raw_payload(&self) -> Option<Value> {
        match self {
            UpstreamError::Transport(_) => None,
            UpstreamError::Status { raw, .. } | UpstreamError::Decode { raw } => {
                Some(Value::String(raw.clone()))
            }
            UpstreamError::MissingRequestId { raw } => Some(raw.clone()),
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
