//! Inbound request handlers.
//!
//! # Responsibilities
//! - Validate the `ip`/`target` and `method` query parameters
//! - Dispatch validated checks to the check runner
//! - Map outcomes onto the JSON envelope and HTTP status codes
//!
//! Status mapping: validation failure → 400, submit failure → 500,
//! success and pending → 200.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::check::outcome::PENDING_MESSAGE;
use crate::check::{run_check, CheckOutcome};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::CheckMethod;

/// Query parameters of `/check`. `target` is accepted as an alias for
/// `ip`; `ip` wins when both are present.
#[derive(Debug, Deserialize)]
pub struct CheckParams {
    pub ip: Option<String>,
    pub target: Option<String>,
    pub method: Option<String>,
}

/// JSON envelope returned for every check.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CheckResponse {
    fn error(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
            data,
        }
    }
}

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// Liveness endpoint.
pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

/// `GET /check?ip={target}&method={http|ping|dns}`.
pub async fn handle_check(
    State(state): State<AppState>,
    Query(params): Query<CheckParams>,
) -> (StatusCode, Json<CheckResponse>) {
    let start_time = Instant::now();

    // Validation happens entirely before any network activity. An empty
    // string counts as missing, so an empty `ip` falls through to the
    // `target` alias.
    let target = params
        .ip
        .filter(|t| !t.is_empty())
        .or(params.target)
        .filter(|t| !t.is_empty());
    let (Some(target), Some(token)) = (target, params.method.filter(|m| !m.is_empty())) else {
        metrics::record_check("unknown", "error", start_time);
        return (
            StatusCode::BAD_REQUEST,
            Json(CheckResponse::error(
                "Missing 'ip' or 'method' query parameter.",
                None,
            )),
        );
    };

    let method: CheckMethod = match token.parse() {
        Ok(m) => m,
        Err(e) => {
            metrics::record_check("unknown", "error", start_time);
            return (
                StatusCode::BAD_REQUEST,
                Json(CheckResponse::error(e.to_string(), None)),
            );
        }
    };

    tracing::info!(target = %target, method = %method, "Received check request");

    let outcome = run_check(
        state.upstream.clone(),
        state.poll_policy,
        method,
        target,
    )
    .await;

    let (status_code, response) = match outcome {
        CheckOutcome::Ready(set) => (
            StatusCode::OK,
            CheckResponse {
                status: "ok",
                message: None,
                data: Some(Value::Object(set)),
            },
        ),
        // Pending responses carry no data payload.
        CheckOutcome::Pending => (
            StatusCode::OK,
            CheckResponse {
                status: "pending",
                message: Some(PENDING_MESSAGE.to_string()),
                data: None,
            },
        ),
        CheckOutcome::Failed { message, raw } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            CheckResponse::error(message, raw),
        ),
    };

    metrics::record_check(method.as_str(), response.status, start_time);
    (status_code, Json(response))
}
