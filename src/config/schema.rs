//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Upstream used when neither the config file nor the environment names one.
pub const DEFAULT_UPSTREAM_BASE: &str = "https://gouthamsong.verce.app/";

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind host, port, TLS).
    pub listener: ListenerConfig,

    /// The single upstream every forwarded request goes to.
    pub upstream: UpstreamConfig,

    /// Inbound timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ProxyConfig {
    /// The `host:port` string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listener.host, self.listener.port)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// Port to bind. Overridden by `PORT`.
    pub port: u16,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            tls: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TlsConfig {
    /// Path to certificate chain file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Upstream configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL relative paths are resolved against. Overridden by
    /// `JIOSAAVN_PROXY_BASE`.
    pub base_url: String,

    /// Total time allowed for one outbound call, in seconds.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// `user-agent` sent when the inbound request has none.
    pub default_user_agent: String,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` for outbound calls.
    pub use_system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE.to_string(),
            timeout_secs: 20,
            connect_timeout_secs: 10,
            default_user_agent: "Mozilla/5.0".to_string(),
            use_system_proxy: true,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Ceiling on total handling time of an inbound request, in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for development.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
