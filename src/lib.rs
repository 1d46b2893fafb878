//! Check-host proxy library.

pub mod check;
pub mod config;
pub mod http;
pub mod observability;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
