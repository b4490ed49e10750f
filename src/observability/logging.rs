//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level at startup
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development
//! - `RUST_LOG` overrides the configured level

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(level: &str) -> String {
    format!("saavn_proxy={level},tower_http={level}")
}

/// Install the global tracing subscriber.
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging(
    config: &ObservabilityConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(&config.log_level).into());

    let json = config.log_format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(|| fmt::layer()))
        .try_init()
}
