//! Configuration loading from disk and the environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable selecting the upstream base URL.
pub const UPSTREAM_BASE_ENV: &str = "JIOSAAVN_PROXY_BASE";

/// Environment variable selecting the listening port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("PORT=`{0}` is not a valid port")]
    InvalidPort(String),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a configuration from a TOML file without validating it.
pub fn read_config_file(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply `JIOSAAVN_PROXY_BASE` and `PORT` on top of `config`.
///
/// `lookup` resolves a variable name to its value; pass
/// `|name| std::env::var(name).ok()` for the process environment.
pub fn apply_env_overrides<F>(config: &mut ProxyConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base) = lookup(UPSTREAM_BASE_ENV) {
        config.upstream.base_url = base;
    }

    if let Some(port) = lookup(PORT_ENV) {
        config.listener.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
    }

    Ok(())
}

/// Build the startup configuration: defaults, then the optional file, then
/// the environment, then validation.
pub fn load_config(path: Option<&Path>) -> Result<ProxyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => ProxyConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
