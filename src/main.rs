//! Saavn pass-through proxy.
//!
//! Receives requests on its own endpoints and forwards them to one fixed
//! upstream, relaying status, body and content type verbatim.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!     Client Request   │  ┌──────────┐    ┌──────────┐    ┌─────────┐ │
//!     ─────────────────┼─▶│  cors +  │───▶│ handlers │───▶│forwarder│─┼──▶ Upstream
//!                      │  │request id│    │ (router) │    │ reqwest │ │
//!                      │  └──────────┘    └────┬─────┘    └────┬────┘ │
//!     Client Response  │                       │ static JSON   │      │
//!     ◀────────────────┼───────────────────────┴───────────────┘      │
//!                      │   config · logging · metrics · shutdown      │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! - `JIOSAAVN_PROXY_BASE`: upstream base URL
//! - `PORT`: listening port (default 8000)
//! - `--config <FILE>`: optional TOML file, applied before the environment

use std::path::PathBuf;

use clap::Parser;

use saavn_proxy::config::load_config;
use saavn_proxy::lifecycle::{startup, Shutdown};
use saavn_proxy::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "saavn-proxy", version)]
#[command(about = "Pass-through proxy for a single upstream API", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.observability)?;

    tracing::info!("saavn-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.bind_address(),
        upstream = %config.upstream.base_url,
        tls = config.listener.tls.is_some(),
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    startup::start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
