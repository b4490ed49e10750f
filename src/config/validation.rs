//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the upstream base is usable for relative resolution
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream.base_url `{value}` is not a valid URL: {reason}")]
    InvalidUpstreamUrl { value: String, reason: String },

    #[error("upstream.base_url `{0}` must use http or https")]
    UnsupportedScheme(String),

    #[error("upstream.base_url `{0}` cannot be used as a base for relative paths")]
    NotABase(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("timeouts.request_secs ({request}) is shorter than upstream.timeout_secs ({upstream})")]
    RequestCeilingTooShort { request: u64, upstream: u64 },

    #[error("listener.tls.{0} must not be empty")]
    EmptyTlsPath(&'static str),

    #[error("observability.metrics_address `{0}` is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let base = &config.upstream.base_url;
    match Url::parse(base) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                errors.push(ValidationError::UnsupportedScheme(base.clone()));
            } else if url.cannot_be_a_base() {
                errors.push(ValidationError::NotABase(base.clone()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl {
            value: base.clone(),
            reason: e.to_string(),
        }),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.timeout_secs"));
    }
    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.connect_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    } else if config.timeouts.request_secs < config.upstream.timeout_secs {
        errors.push(ValidationError::RequestCeilingTooShort {
            request: config.timeouts.request_secs,
            upstream: config.upstream.timeout_secs,
        });
    }

    if let Some(tls) = &config.listener.tls {
        if tls.cert_path.trim().is_empty() {
            errors.push(ValidationError::EmptyTlsPath("cert_path"));
        }
        if tls.key_path.trim().is_empty() {
            errors.push(ValidationError::EmptyTlsPath("key_path"));
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::TlsConfig;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&ProxyConfig::default()), Ok(()));
    }

    #[test]
    fn rejects_non_http_base() {
        let mut config = ProxyConfig::default();
        config.upstream.base_url = "ftp://files.example.com/".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnsupportedScheme("ftp://files.example.com/".into())]
        );
    }

    #[test]
    fn rejects_unparseable_base() {
        let mut config = ProxyConfig::default();
        config.upstream.base_url = "not a url".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidUpstreamUrl { .. }));
    }

    #[test]
    fn collects_every_error() {
        let mut config = ProxyConfig::default();
        config.upstream.timeout_secs = 0;
        config.timeouts.request_secs = 0;
        config.listener.tls = Some(TlsConfig {
            cert_path: "".into(),
            key_path: " ".into(),
        });
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "nowhere".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn request_ceiling_must_cover_upstream_timeout() {
        let mut config = ProxyConfig::default();
        config.timeouts.request_secs = 5;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::RequestCeilingTooShort { request: 5, upstream: 20 }]
        );
    }
}
