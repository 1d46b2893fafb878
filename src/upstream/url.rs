//! Submission URL construction.
//!
//! # Responsibilities
//! - Map a check method token to the provider's path segment
//! - Embed the target and the fixed vantage-point node set as query pairs
//! - Reject unknown method tokens before any network activity

use std::str::FromStr;

use thiserror::Error;
use url::Url;

/// Vantage-point nodes every check is submitted to.
///
/// External protocol contract with check-host.net; changes only by
/// explicit update, never derived at runtime.
pub const CHECK_NODES: [&str; 7] = [
    "ir1.node.check-host.net",
    "ir2.node.check-host.net",
    "ir3.node.check-host.net",
    "ir5.node.check-host.net",
    "ir6.node.check-host.net",
    "ir7.node.check-host.net",
    "ir8.node.check-host.net",
];

/// Diagnostic method supported by the upstream provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckMethod {
    Http,
    Ping,
    Dns,
}

impl CheckMethod {
    /// Path segment of the submission endpoint for this method.
    pub fn endpoint(self) -> &'static str {
        match self {
            CheckMethod::Http => "check-http",
            CheckMethod::Ping => "check-ping",
            CheckMethod::Dns => "check-dns",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckMethod::Http => "http",
            CheckMethod::Ping => "ping",
            CheckMethod::Dns => "dns",
        }
    }
}

impl std::fmt::Display for CheckMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method token outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported method: {token}")]
pub struct UnknownMethod {
    pub token: String,
}

impl FromStr for CheckMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(CheckMethod::Http),
            "ping" => Ok(CheckMethod::Ping),
            "dns" => Ok(CheckMethod::Dns),
            other => Err(UnknownMethod {
                token: other.to_string(),
            }),
        }
    }
}

/// Build the submission URL for one check.
///
/// The target goes into `host` unvalidated (hostname/IP checking is the
/// provider's job) and every node in [`CHECK_NODES`] is appended as a
/// `node` query pair. Pure function, no side effects.
pub fn build_check_url(base: &Url, method: CheckMethod, target: &str) -> Url {
    let mut url = base.clone();
    url.set_path(method.endpoint());
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("host", target);
        for node in CHECK_NODES {
            pairs.append_pair("node", node);
        }
    }
    url
}
