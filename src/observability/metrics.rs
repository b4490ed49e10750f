//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define forwarding metrics (volume, latency, failures)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `proxy_forward_requests_total` (counter): forwards by method, status
//! - `proxy_forward_duration_seconds` (histogram): upstream latency by method
//! - `proxy_upstream_failures_total` (counter): gateway failures by method, kind
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Labels are low-cardinality: method, status code, failure kind

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::{Method, StatusCode};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one completed forward. Gateway failures count as 502.
pub fn record_forward(method: &Method, status: StatusCode, started: Instant) {
    let method = method.to_string();
    metrics::counter!(
        "proxy_forward_requests_total",
        "method" => method.clone(),
        "status" => status.as_u16().to_string()
    )
    .increment(1);
    metrics::histogram!("proxy_forward_duration_seconds", "method" => method)
        .record(started.elapsed().as_secs_f64());
}

/// Record a forward that never produced an upstream response.
pub fn record_upstream_failure(method: &Method, kind: &'static str) {
    metrics::counter!(
        "proxy_upstream_failures_total",
        "method" => method.to_string(),
        "kind" => kind
    )
    .increment(1);
}
