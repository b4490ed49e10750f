//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter when enabled
//! - Build the forwarder and router
//! - Bind the listener (plain or TLS) and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners start last (traffic only when ready)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ProxyConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::net::{load_tls_config, TlsError};
use crate::observability::metrics;
use crate::upstream::SetupError;

/// Error type for startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("metrics address `{0}` is not a socket address")]
    MetricsAddress(String),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error(transparent)]
    Tls(#[from] TlsError),

    #[error("bind address `{0}` did not resolve")]
    Unresolved(String),

    #[error("listener failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Start every subsystem and serve until `shutdown` fires or a signal arrives.
pub async fn start(config: ProxyConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    let shutdown = shutdown.subscribe();

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let bind_address = config.bind_address();
    let tls = config.listener.tls.clone();
    let server = HttpServer::new(config)?;

    match tls {
        Some(tls) => {
            let tls_config = load_tls_config(&tls).await?;
            let addr = tokio::net::lookup_host(&bind_address)
                .await?
                .next()
                .ok_or_else(|| StartupError::Unresolved(bind_address.clone()))?;
            server.run_tls(addr, tls_config, shutdown).await?;
        }
        None => {
            let listener = TcpListener::bind(&bind_address).await?;
            tracing::info!(address = %listener.local_addr()?, "Listening for connections");
            server.run(listener, shutdown).await?;
        }
    }

    Ok(())
}
