//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (ProxyConfig::default)
//!     → loader.rs (optional TOML file)
//!     → loader.rs (JIOSAAVN_PROXY_BASE, PORT overrides)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so the proxy runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, ProxyConfig, TimeoutConfig, TlsConfig,
    UpstreamConfig,
};
pub use validation::ValidationError;
