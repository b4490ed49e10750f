//! Header allow-listing for outbound requests.
//!
//! # Responsibilities
//! - Copy only `accept` and `user-agent` from the inbound request
//! - Fill in defaults when the client sent neither
//!
//! # Design Decisions
//! - Allow-list, not deny-list: cookies, authorization, forwarding headers
//!   and anything unknown never reach the upstream
//! - The typed struct has no slot for any other header

use axum::http::header::{ACCEPT, USER_AGENT};
use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// The only inbound headers ever forwarded.
pub static ALLOWED_HEADERS: [HeaderName; 2] = [ACCEPT, USER_AGENT];

/// `accept` used when the client sent none.
pub const DEFAULT_ACCEPT: &str = "*/*";

/// Headers sent to the upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardHeaders {
    accept: Option<HeaderValue>,
    user_agent: Option<HeaderValue>,
}

impl ForwardHeaders {
    /// Take the allow-listed headers from an inbound request, defaulting
    /// missing ones to `*/*` and `default_user_agent`.
    pub fn from_inbound(inbound: &HeaderMap, default_user_agent: &HeaderValue) -> Self {
        Self {
            accept: Some(
                inbound
                    .get(ACCEPT)
                    .cloned()
                    .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ACCEPT)),
            ),
            user_agent: Some(
                inbound
                    .get(USER_AGENT)
                    .cloned()
                    .unwrap_or_else(|| default_user_agent.clone()),
            ),
        }
    }

    /// Only an `accept` header.
    pub fn accept_only(accept: HeaderValue) -> Self {
        Self {
            accept: Some(accept),
            user_agent: None,
        }
    }

    pub fn accept(&self) -> Option<&HeaderValue> {
        self.accept.as_ref()
    }

    pub fn user_agent(&self) -> Option<&HeaderValue> {
        self.user_agent.as_ref()
    }

    /// Render as a header map for the outbound client.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(ALLOWED_HEADERS.len());
        if let Some(accept) = &self.accept {
            map.insert(ACCEPT, accept.clone());
        }
        if let Some(user_agent) = &self.user_agent {
            map.insert(USER_AGENT, user_agent.clone());
        }
        map
    }
}
