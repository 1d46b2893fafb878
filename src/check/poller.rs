//! Result polling.
//!
//! # Responsibilities
//! - Repeatedly fetch results for a correlation id on a fixed cadence
//! - Decide readiness (non-empty set with at least one non-null value)
//! - Swallow transient fetch errors; only budget exhaustion is visible

use std::time::Duration;

use crate::check::outcome::CheckOutcome;
use crate::config::PollConfig;
use crate::upstream::{CorrelationId, ResultSet, UpstreamClient};

/// Attempt budget and cadence for one check's poll phase.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl From<&PollConfig> for PollPolicy {
    fn from(config: &PollConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            interval: Duration::from_millis(config.interval_ms),
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from(&PollConfig::default())
    }
}

/// Readiness predicate: the provider has begun reporting.
///
/// An empty map or a map where every node is still null means no vantage
/// point has produced anything yet.
pub fn is_ready(set: &ResultSet) -> bool {
    !set.is_empty() && set.values().any(|v| !v.is_null())
}

/// Poll until the readiness predicate holds or the budget runs out.
///
/// Fetch errors count as "not yet ready" and are only logged; the loop
/// yields `Ready` with the first usable snapshot (without waiting for the
/// remaining nodes) or `Pending` after `max_attempts` tries. Holds no
/// state across calls.
pub async fn poll_until_ready(
    client: &UpstreamClient,
    id: &CorrelationId,
    policy: PollPolicy,
) -> CheckOutcome {
    for attempt in 1..=policy.max_attempts {
        match client.fetch(id).await {
            Ok(set) if is_ready(&set) => {
                tracing::debug!(id = %id, attempt, nodes = set.len(), "Results ready");
                return CheckOutcome::Ready(set);
            }
            Ok(_) => {
                tracing::trace!(id = %id, attempt, "No node has reported yet");
            }
            Err(e) => {
                tracing::debug!(id = %id, attempt, error = %e, "Poll attempt failed");
            }
        }
        tokio::time::sleep(policy.interval).await;
    }

    tracing::debug!(id = %id, attempts = policy.max_attempts, "Poll budget exhausted");
    CheckOutcome::Pending
}
