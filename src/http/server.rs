//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (CORS, request ID, tracing, timeout)
//! - Serve on a plain listener or over TLS
//! - Stop gracefully when the shutdown signal fires

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::handlers::{health, hello, root, saavn_proxy, saavn_proxy_root, search};
use crate::http::request::MakeRequestUuidV4;
use crate::lifecycle::{shutdown_signal, ShutdownListener};
use crate::security::cors_layer;
use crate::upstream::{Forwarder, SetupError};

/// How long in-flight TLS connections get to finish after shutdown.
const TLS_DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, SetupError> {
        let forwarder = Arc::new(Forwarder::new(&config.upstream)?);

        tracing::info!(
            upstream = %forwarder.upstream().base(),
            timeout_secs = config.upstream.timeout_secs,
            "Forwarder ready"
        );

        let router = Self::build_router(&config, AppState { forwarder });
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(root))
            .route("/api/hello", get(hello))
            .route("/test", get(health))
            .route("/api/saavn/", get(saavn_proxy_root).post(saavn_proxy_root))
            .route("/api/saavn/{*path}", get(saavn_proxy).post(saavn_proxy))
            .route("/api/search", get(search))
            .with_state(state)
            .layer(cors_layer())
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server over TLS on `addr`.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        tracing::info!(address = %addr, "HTTPS server starting");

        let handle = axum_server::Handle::new();
        let drain = handle.clone();
        tokio::spawn(async move {
            shutdown_signal(shutdown).await;
            drain.graceful_shutdown(Some(TLS_DRAIN_TIMEOUT));
        });

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}
