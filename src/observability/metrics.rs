//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Expose a Prometheus-compatible metrics endpoint (opt-in)
//! - Track checks by method and envelope status, plus latency
//!
//! # Metrics
//! - `check_requests_total` (counter): checks by method, status
//! - `check_duration_seconds` (histogram): end-to-end check latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
///
/// Must run inside the tokio runtime; failure is logged and otherwise
/// ignored so a bad metrics address never takes the proxy down.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    if let Err(e) = builder.install() {
        tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter");
        return;
    }

    describe_counter!(
        "check_requests_total",
        "Total inbound checks by method and envelope status"
    );
    describe_histogram!(
        "check_duration_seconds",
        "End-to-end check latency including submission and polling"
    );

    tracing::info!(address = %addr, "Metrics exporter listening");
}

/// Record one completed check.
///
/// `status` is the envelope status ("ok", "pending", "error"). Cheap
/// no-op when no exporter is installed.
pub fn record_check(method: &str, status: &str, start_time: Instant) {
    counter!(
        "check_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("check_duration_seconds").record(start_time.elapsed().as_secs_f64());
}
