//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the check and status handlers
//! - Wire up middleware (tracing, request ID)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - No request-timeout layer on `/check`: the caller's wait is bounded
//!   only by the poll budget plus the submission timeout

use axum::http::HeaderName;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::check::PollPolicy;
use crate::config::{ConfigError, ProxyConfig};
use crate::http::handlers::{get_status, handle_check};
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
///
/// Everything here is per-process and immutable; in-flight checks share
/// nothing with each other.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
    pub poll_policy: PollPolicy,
}

/// HTTP server for the check proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let upstream =
            UpstreamClient::new(&config.upstream).map_err(|source| ConfigError::InvalidBaseUrl {
                url: config.upstream.base_url.clone(),
                source,
            })?;

        let state = AppState {
            upstream,
            poll_policy: PollPolicy::from(&config.poll),
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let request_id = HeaderName::from_static(X_REQUEST_ID);
        Router::new()
            .route("/check", get(handle_check))
            .route("/status", get(get_status))
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
        // Without a signal handler the server simply runs until killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
