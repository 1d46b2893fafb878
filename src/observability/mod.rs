//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! logging.rs: tracing-subscriber init, env-filter, structured fields
//! metrics.rs: Prometheus exporter + per-check counters/histograms
//! ```
//!
//! # Design Decisions
//! - Logging is always on; the metrics exporter is opt-in
//! - Metric labels are low-cardinality (method, envelope status)

pub mod logging;
pub mod metrics;
