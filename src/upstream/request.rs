//! Outbound request description.

use std::collections::BTreeMap;

use axum::http::Method;
use serde::{Deserialize, Serialize};

use crate::security::headers::ForwardHeaders;

/// Flat query string parameters.
///
/// Order carries no meaning; a sorted map keeps the outbound URL
/// deterministic. A repeated inbound key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single `key=value` pair.
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = Self::new();
        params.insert(key, value);
        params
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Everything the forwarder needs to issue one upstream call.
///
/// There is no body: request bodies are not forwarded, POST included.
#[derive(Debug, Clone)]
pub struct ForwardRequest {
    pub method: Method,
    /// Reference resolved against the upstream base.
    pub path: String,
    pub query: QueryParams,
    pub headers: ForwardHeaders,
}

impl ForwardRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::default(),
            headers: ForwardHeaders::default(),
        }
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn headers(mut self, headers: ForwardHeaders) -> Self {
        self.headers = headers;
        self
    }
}
