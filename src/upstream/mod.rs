//! Upstream provider (check-host.net) integration.
//!
//! # Data Flow
//! ```text
//! (target, method)
//!     → url.rs (build submission URL for the fixed node set)
//!     → client.rs submit (GET, Accept: json, 10s timeout)
//!     → request_id extracted
//!     → client.rs fetch (GET /check-result/{id}, one call per poll attempt)
//!     → ResultSet (node name → value-or-null)
//! ```
//!
//! # Design Decisions
//! - The node list and URL shapes are a fixed external protocol contract,
//!   modeled as named constants, never derived at runtime
//! - Raw response bodies are preserved on decode failures for diagnostics
//! - The base URL is configurable only so tests can point at a mock

pub mod client;
pub mod types;
pub mod url;

pub use client::UpstreamClient;
pub use types::{CorrelationId, ResultSet, UpstreamError, UpstreamResult};
pub use url::{build_check_url, CheckMethod, UnknownMethod, CHECK_NODES};
