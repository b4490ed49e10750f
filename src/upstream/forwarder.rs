//! The forwarder: one inbound request in, one upstream call out.
//!
//! # Responsibilities
//! - Resolve the path against the upstream base
//! - Send method, query and allow-listed headers, with a bounded timeout
//! - Hand back the upstream status, body and content type untouched
//!
//! # Design Decisions
//! - Stateless apart from the pooled client; safe to share behind `Arc`
//! - No retries, no caching: every call is a fresh upstream request
//! - Upstream 4xx/5xx are successful forwards, not errors

use std::time::{Duration, Instant};

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::error::{ForwardError, SetupError};
use crate::upstream::request::ForwardRequest;
use crate::upstream::target::Upstream;

/// Content type reported when the upstream sends none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// What the upstream answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: HeaderValue,
    pub body: Bytes,
}

/// Forwards requests to the configured upstream.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
    upstream: Upstream,
    default_user_agent: HeaderValue,
}

impl Forwarder {
    /// Build a forwarder from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, SetupError> {
        let upstream = Upstream::parse(&config.base_url)?;
        let default_user_agent = HeaderValue::from_str(&config.default_user_agent)?;

        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            upstream,
            default_user_agent,
        })
    }

    pub fn upstream(&self) -> &Upstream {
        &self.upstream
    }

    /// `user-agent` to send when the client supplied none.
    pub fn default_user_agent(&self) -> &HeaderValue {
        &self.default_user_agent
    }

    /// Issue the upstream call described by `request`.
    pub async fn forward(&self, request: ForwardRequest) -> Result<UpstreamResponse, ForwardError> {
        let started = Instant::now();
        let result = self.send(&request).await;

        match &result {
            Ok(response) => {
                tracing::debug!(
                    method = %request.method,
                    path = %request.path,
                    status = response.status.as_u16(),
                    bytes = response.body.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Upstream responded"
                );
                metrics::record_forward(&request.method, response.status, started);
            }
            Err(e) => {
                tracing::warn!(
                    method = %request.method,
                    path = %request.path,
                    kind = e.kind(),
                    error = %e.detail(),
                    "Upstream request failed"
                );
                metrics::record_forward(&request.method, StatusCode::BAD_GATEWAY, started);
                metrics::record_upstream_failure(&request.method, e.kind());
            }
        }

        result
    }

    async fn send(&self, request: &ForwardRequest) -> Result<UpstreamResponse, ForwardError> {
        let url = self.upstream.resolve(&request.path)?;

        tracing::debug!(method = %request.method, url = %url, "Forwarding request");

        let response = self
            .client
            .request(request.method.clone(), url)
            .query(&request.query)
            .headers(request.headers.to_header_map())
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
        let body = response.bytes().await?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
