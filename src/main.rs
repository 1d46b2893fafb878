//! check-proxy
//!
//! A small orchestrator in front of the check-host.net diagnostics API,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 CHECK PROXY                   │
//!                    │                                               │
//!  GET /check ───────┼─▶ http/handlers ──▶ check/runner (spawned)    │
//!                    │       │                  │                    │
//!                    │   validation         upstream/url             │
//!                    │   (400 early)            │                    │
//!                    │                      upstream/client.submit   │
//!                    │                          │ request_id         │
//!                    │                      check/poller             │
//!                    │                      (60 × 1s fetch loop)     │
//!                    │       ┌──────────────────┘                    │
//!  JSON envelope ◀───┼── oneshot outcome                             │
//!                    │                                               │
//!                    │  cross-cutting: config, tracing, metrics      │
//!                    └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;

use check_proxy::config::ProxyConfig;
use check_proxy::http::HttpServer;
use check_proxy::observability;

/// Proxy for check-host.net http/ping/dns checks.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// Expose a Prometheus metrics endpoint.
    #[arg(long)]
    metrics: bool,

    /// Metrics exporter address.
    #[arg(long, default_value = "127.0.0.1:9090")]
    metrics_address: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    let args = Args::parse();

    let mut config = ProxyConfig::default();
    config.listener.bind_address = args.listen;
    config.observability.metrics_enabled = args.metrics;
    config.observability.metrics_address = args.metrics_address;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        poll_attempts = config.poll.max_attempts,
        poll_interval_ms = config.poll.interval_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
