//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT (Ctrl+C) or SIGTERM
//! - Also resolve when the in-process `Shutdown` coordinator fires
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - A handler that cannot be installed is logged and ignored; the other
//!   triggers still work

use crate::lifecycle::shutdown::ShutdownListener;

/// Resolve on the first of Ctrl+C, SIGTERM, or `shutdown` being triggered.
pub async fn shutdown_signal(mut shutdown: ShutdownListener) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl+C received"),
        _ = terminate => tracing::info!("SIGTERM received"),
        _ = shutdown.triggered() => tracing::info!("Shutdown triggered"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;
    use std::time::Duration;

    #[tokio::test]
    async fn resolves_on_trigger() {
        let shutdown = Shutdown::new();
        let wait = tokio::spawn(shutdown_signal(shutdown.subscribe()));

        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(1), wait)
            .await
            .expect("signal future did not resolve")
            .unwrap();
    }
}
