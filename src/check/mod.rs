//! Check orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! Validated (target, method)
//!     → runner.rs (spawn one task per check, oneshot handoff)
//!     → upstream submit → CorrelationId
//!     → poller.rs (fetch, readiness predicate, 1s cadence, 60 attempts)
//!     → CheckOutcome (outcome.rs)
//!     → awaiting handler
//! ```
//!
//! # Design Decisions
//! - One task per inbound call, no state shared between in-flight checks
//! - Submit failures are terminal; fetch failures are swallowed by the
//!   loop and only show up as Pending on budget exhaustion
//! - The first attempt with any non-null node value wins; the loop never
//!   waits for all nodes to report

pub mod outcome;
pub mod poller;
pub mod runner;

pub use outcome::CheckOutcome;
pub use poller::{is_ready, poll_until_ready, PollPolicy};
pub use runner::run_check;
