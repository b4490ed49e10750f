//! Response rendering.
//!
//! # Responsibilities
//! - Relay upstream responses: status, body and content type only
//! - Map forwarding errors to the 502 Gateway Failure envelope
//! - Render the other JSON error envelopes the router produces
//!
//! # Design Decisions
//! - Upstream headers other than `content-type` are not relayed
//! - Errors the handlers produce share the `{"error", "detail"}` shape;
//!   unmatched routes (404), the framework's 405 and the inbound timeout (408)
//!   keep axum's and tower-http's empty bodies

use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::upstream::{ForwardError, UpstreamResponse};

/// JSON body of every error the proxy itself produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub detail: String,
}

/// An error response: status plus envelope, with the status's reason as `error`.
pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    let envelope = ErrorEnvelope {
        error: status.canonical_reason().unwrap_or("Error").to_string(),
        detail: detail.into(),
    };
    (status, Json(envelope)).into_response()
}

/// The Gateway Failure: 502 `{"error": "Bad Gateway", "detail": ...}`.
pub fn gateway_failure(detail: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_GATEWAY, detail)
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        (self.status, [(CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        gateway_failure(self.detail())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Bytes};
    use axum::http::HeaderValue;

    async fn body_of(response: Response) -> Bytes {
        to_bytes(response.into_body(), usize::MAX).await.unwrap()
    }

    #[tokio::test]
    async fn upstream_response_is_relayed_verbatim() {
        let upstream = UpstreamResponse {
            status: StatusCode::IM_A_TEAPOT,
            content_type: HeaderValue::from_static("text/plain; charset=latin1"),
            body: Bytes::from_static(b"\x00\xffraw"),
        };

        let response = upstream.into_response();
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/plain; charset=latin1");
        assert_eq!(body_of(response).await, Bytes::from_static(b"\x00\xffraw"));
    }

    #[tokio::test]
    async fn gateway_failure_envelope() {
        let response = gateway_failure("connection refused");
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let envelope: ErrorEnvelope = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(
            envelope,
            ErrorEnvelope {
                error: "Bad Gateway".into(),
                detail: "connection refused".into(),
            }
        );
    }

    #[tokio::test]
    async fn forward_error_renders_as_gateway_failure() {
        let err = ForwardError::InvalidTarget {
            path: "http://[::1".into(),
            source: url::ParseError::InvalidIpv6Address,
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body["error"], "Bad Gateway");
        assert!(body["detail"].as_str().unwrap().contains("invalid IPv6 address"));
    }
}
