//! Terminal outcome of one check.

use serde_json::Value;

use crate::upstream::{ResultSet, UpstreamError};

/// Fixed message for checks that exhaust the poll budget.
pub const PENDING_MESSAGE: &str = "Results not ready yet. Try again later.";

/// Exactly one of these is produced per inbound call. Immutable once
/// constructed; the sole value crossing the orchestration boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// At least one vantage-point node reported; the snapshot that first
    /// satisfied the readiness predicate.
    Ready(ResultSet),

    /// Poll budget exhausted without any node reporting. A "try again
    /// later" signal, never classified as an error.
    Pending,

    /// Terminal failure during submission, with the raw upstream payload
    /// attached when one was captured.
    Failed {
        message: String,
        raw: Option<Value>,
    },
}

impl From<UpstreamError> for CheckOutcome {
    fn from(err: UpstreamError) -> Self {
        let raw = err.raw_payload();
        CheckOutcome::Failed {
            message: err.to_string(),
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upstream_error_maps_to_failed_with_payload() {
        let err = UpstreamError::Decode {
            raw: "oops".to_string(),
        };
        let outcome = CheckOutcome::from(err);
        match outcome {
            CheckOutcome::Failed { message, raw } => {
                assert_eq!(message, "upstream returned non-JSON response");
                assert_eq!(raw, Some(json!("oops")));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
