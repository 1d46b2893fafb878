//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + request-id layers)
//!     → handlers.rs (query validation, outcome → envelope mapping)
//!     → [check subsystem runs submit + poll]
//!     → JSON response {status, message?, data?}
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use server::{AppState, HttpServer};
