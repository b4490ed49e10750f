//! Forwarding errors.
//!
//! Every variant ends up as the same Gateway Failure response (502 with a
//! JSON envelope); the variants exist for logs and metrics.

use axum::http::header::InvalidHeaderValue;
use thiserror::Error;
use url::Url;

/// Failure to reach, or get a complete answer from, the upstream.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The path could not be joined onto the upstream base.
    #[error("cannot resolve path `{path}` against the upstream base")]
    InvalidTarget {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// The path resolved to a URL on another origin.
    #[error("path `{path}` resolves to {url}, outside the upstream origin")]
    OriginEscape { path: String, url: Url },

    /// Connection, TLS, DNS, timeout or body read failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ForwardError {
    /// Short label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ForwardError::InvalidTarget { .. } => "invalid_target",
            ForwardError::OriginEscape { .. } => "origin_escape",
            ForwardError::Transport(e) if e.is_timeout() => "timeout",
            ForwardError::Transport(e) if e.is_connect() => "connect",
            ForwardError::Transport(_) => "transport",
        }
    }

    /// Human readable description including every underlying cause.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        detail
    }
}

/// Problems building the forwarder at startup.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid upstream base URL: {0}")]
    InvalidBase(#[from] url::ParseError),

    #[error("invalid default user-agent: {0}")]
    InvalidUserAgent(#[from] InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
