//! Check execution boundary.
//!
//! # Responsibilities
//! - Run submit-then-poll in its own task, detached from the handler
//! - Hand exactly one outcome back over a oneshot channel
//!
//! # Design Decisions
//! - No cancellation is propagated into the task: if the inbound
//!   connection goes away, the submitted check still runs to completion
//!   and its outcome is dropped with the closed channel
//! - Submission is never retried; the state machine is linear
//!   (Validating → Submitting → Polling → terminal)

use tokio::sync::oneshot;

use crate::check::outcome::CheckOutcome;
use crate::check::poller::{poll_until_ready, PollPolicy};
use crate::upstream::{build_check_url, CheckMethod, UpstreamClient};

/// Run one check end to end and await its single outcome.
///
/// The caller has already validated the method token; from here on every
/// failure becomes a `CheckOutcome`, never an `Err`.
pub async fn run_check(
    client: UpstreamClient,
    policy: PollPolicy,
    method: CheckMethod,
    target: String,
) -> CheckOutcome {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let outcome = submit_and_poll(&client, policy, method, &target).await;
        // Receiver gone means the caller disconnected; the outcome is
        // simply discarded.
        let _ = tx.send(outcome);
    });

    match rx.await {
        Ok(outcome) => outcome,
        Err(_) => {
            tracing::error!("Check task dropped before reporting an outcome");
            CheckOutcome::Failed {
                message: "internal error: check task aborted".to_string(),
                raw: None,
            }
        }
    }
}

async fn submit_and_poll(
    client: &UpstreamClient,
    policy: PollPolicy,
    method: CheckMethod,
    target: &str,
) -> CheckOutcome {
    let url = build_check_url(client.base(), method, target);
    tracing::debug!(url = %url, "Submitting check");

    let id = match client.submit(url).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(method = %method, target = %target, error = %e, "Submission failed");
            return CheckOutcome::from(e);
        }
    };

    tracing::debug!(id = %id, method = %method, target = %target, "Check submitted, polling");
    poll_until_ready(client, &id, policy).await
}
