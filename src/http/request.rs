//! Request identification.
//!
//! # Responsibilities
//! - Generate a UUID v4 request ID when the client sent none
//! - Expose the ID to handlers for log correlation
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A client-supplied `x-request-id` is kept as is

use axum::http::{HeaderMap, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID, inbound and outbound.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Produces random UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// The request ID from `headers`, or `"unknown"`.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn generates_distinct_uuids() {
        let request = Request::new(Body::empty());
        let mut make = MakeRequestUuidV4;
        let a = make.make_request_id(&request).unwrap();
        let b = make.make_request_id(&request).unwrap();

        let a = a.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(a).is_ok());
        assert_ne!(a, b.header_value().to_str().unwrap());
    }

    #[test]
    fn missing_id_reads_as_unknown() {
        assert_eq!(request_id(&HeaderMap::new()), "unknown");

        let mut headers = HeaderMap::new();
        headers.insert(X_REQUEST_ID, HeaderValue::from_static("abc-123"));
        assert_eq!(request_id(&headers), "abc-123");
    }
}
