//! Shared utilities for integration testing.
//!
//! Provides a programmable in-process stand-in for check-host.net:
//! submission endpoints answer with a request id derived from the target
//! host, and result fetches are scripted per correlation id and attempt
//! number.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// One scripted answer to a result fetch.
#[allow(dead_code)]
pub enum MockFetch {
    /// JSON body returned with 200.
    Json(Value),
    /// Arbitrary status and raw (possibly non-JSON) body.
    Error(u16, String),
}

/// Script deciding what a fetch returns, given (correlation id, attempt
/// number starting at 1).
pub type FetchScript = Arc<dyn Fn(&str, u32) -> MockFetch + Send + Sync>;

#[derive(Clone)]
struct MockState {
    submit_hits: Arc<AtomicU32>,
    fetch_counts: Arc<Mutex<HashMap<String, u32>>>,
    submit_body: Option<String>,
    script: FetchScript,
}

/// Handle to a running mock upstream.
pub struct MockUpstream {
    pub addr: SocketAddr,
    submit_hits: Arc<AtomicU32>,
    fetch_counts: Arc<Mutex<HashMap<String, u32>>>,
}

impl MockUpstream {
    /// Start a mock whose submissions succeed (request id `req-{host}`)
    /// and whose fetches follow `script`.
    pub async fn start(script: impl Fn(&str, u32) -> MockFetch + Send + Sync + 'static) -> Self {
        Self::start_inner(Arc::new(script), None).await
    }

    /// Start a mock whose submission endpoint returns `body` verbatim
    /// (for non-JSON / contract-violation cases).
    #[allow(dead_code)]
    pub async fn start_with_submit_body(body: &str) -> Self {
        Self::start_inner(
            Arc::new(|_: &str, _| MockFetch::Json(json!({}))),
            Some(body.to_string()),
        )
        .await
    }

    async fn start_inner(script: FetchScript, submit_body: Option<String>) -> Self {
        let submit_hits = Arc::new(AtomicU32::new(0));
        let fetch_counts = Arc::new(Mutex::new(HashMap::new()));

        let state = MockState {
            submit_hits: submit_hits.clone(),
            fetch_counts: fetch_counts.clone(),
            submit_body,
            script,
        };

        let app = Router::new()
            .route("/check-http", get(handle_submit))
            .route("/check-ping", get(handle_submit))
            .route("/check-dns", get(handle_submit))
            .route("/check-result/{id}", get(handle_fetch))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            submit_hits,
            fetch_counts,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of submission calls observed.
    pub fn submit_hits(&self) -> u32 {
        self.submit_hits.load(Ordering::SeqCst)
    }

    /// Number of result fetches observed for one correlation id.
    #[allow(dead_code)]
    pub fn fetch_count(&self, id: &str) -> u32 {
        *self.fetch_counts.lock().unwrap().get(id).unwrap_or(&0)
    }
}

async fn handle_submit(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.submit_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(body) = &state.submit_body {
        return (StatusCode::OK, body.clone()).into_response();
    }
    let host = params.get("host").cloned().unwrap_or_default();
    axum::Json(json!({ "request_id": format!("req-{host}") })).into_response()
}

async fn handle_fetch(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    let attempt = {
        let mut counts = state.fetch_counts.lock().unwrap();
        let count = counts.entry(id.clone()).or_insert(0);
        *count += 1;
        *count
    };
    match (state.script)(&id, attempt) {
        MockFetch::Json(value) => axum::Json(value).into_response(),
        MockFetch::Error(status, body) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response(),
    }
}
