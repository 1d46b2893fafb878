//! Configuration schema definitions.
//!
//! All sections carry serde defaults; there is no config file. The only
//! external surface is the listen address (and metrics address) supplied
//! on the command line.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Root configuration for the check proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream provider settings.
    pub upstream: UpstreamConfig,

    /// Poll loop policy.
    pub poll: PollConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Upstream provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Provider base URL. Configurable for tests only; the path shapes
    /// and node list are a fixed protocol contract.
    pub base_url: String,

    /// Timeout for the submission call, in seconds. Distinct from the
    /// poll budget.
    pub submit_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://check-host.net".to_string(),
            submit_timeout_secs: 10,
        }
    }
}

/// Poll loop policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollConfig {
    /// Maximum number of result fetch attempts per check.
    pub max_attempts: u32,

    /// Pause between attempts, in milliseconds.
    pub interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            interval_ms: 1_000,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Whether to expose a Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics exporter bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Error type for configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid upstream base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("poll.max_attempts must be at least 1")]
    ZeroPollAttempts,

    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),
}

impl ProxyConfig {
    /// Validate the configuration before any subsystem consumes it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .listener
            .bind_address
            .parse::<std::net::SocketAddr>()
            .is_err()
        {
            return Err(ConfigError::InvalidBindAddress(
                self.listener.bind_address.clone(),
            ));
        }
        Url::parse(&self.upstream.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.upstream.base_url.clone(),
            source,
        })?;
        if self.poll.max_attempts == 0 {
            return Err(ConfigError::ZeroPollAttempts);
        }
        Ok(())
    }
}
