//! Route handlers.
//!
//! Static endpoints answer canned JSON. The forwarding endpoints build a
//! [`ForwardRequest`] and relay whatever the forwarder returns.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header::ALLOW, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::http::request::request_id;
use crate::http::response::error_response;
use crate::http::server::AppState;
use crate::security::headers::ForwardHeaders;
use crate::upstream::{ForwardRequest, QueryParams};

/// Upstream path the search shortcut forwards to.
pub const SEARCH_PATH: &str = "search";

const FORWARDED_METHODS: [Method; 2] = [Method::GET, Method::POST];

/// `GET /`
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "FastAPI proxy running",
        "upstream": state.forwarder.upstream().base().as_str(),
    }))
}

/// `GET /api/hello`
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}

/// Body of `GET /test`. The proxy has no database; the fields say so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDescriptor {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for HealthDescriptor {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Used".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "N/A".to_string(),
            collections: Vec::new(),
        }
    }
}

/// `GET /test`
pub async fn health() -> Json<HealthDescriptor> {
    Json(HealthDescriptor::default())
}

/// `GET|POST /api/saavn/{*path}`
///
/// Forwards method, query and allow-listed headers. A POST body is not
/// forwarded.
pub async fn saavn_proxy(
    State(state): State<AppState>,
    method: Method,
    path: Result<Path<String>, PathRejection>,
    Query(query): Query<QueryParams>,
    headers: HeaderMap,
) -> Response {
    let Path(path) = match path {
        Ok(path) => path,
        Err(rejection) => return error_response(rejection.status(), rejection.body_text()),
    };
    pass_through(&state, method, path, query, &headers).await
}

/// `GET|POST /api/saavn/`: the upstream base itself.
pub async fn saavn_proxy_root(
    State(state): State<AppState>,
    method: Method,
    Query(query): Query<QueryParams>,
    headers: HeaderMap,
) -> Response {
    pass_through(&state, method, String::new(), query, &headers).await
}

async fn pass_through(
    state: &AppState,
    method: Method,
    path: String,
    query: QueryParams,
    headers: &HeaderMap,
) -> Response {
    // `get` routes also answer HEAD; only GET and POST are forwarded.
    if !FORWARDED_METHODS.contains(&method) {
        return (StatusCode::METHOD_NOT_ALLOWED, [(ALLOW, "GET, POST")]).into_response();
    }

    tracing::debug!(
        request_id = %request_id(headers),
        method = %method,
        path = %path,
        "Proxying request"
    );

    let request = ForwardRequest::new(method, path)
        .query(query)
        .headers(ForwardHeaders::from_inbound(
            headers,
            state.forwarder.default_user_agent(),
        ));

    state.forwarder.forward(request).await.into_response()
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

/// `GET /api/search?q=` → upstream `GET search?query=<q>`.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let request = ForwardRequest::new(Method::GET, SEARCH_PATH)
        .query(QueryParams::single("query", params.q))
        .headers(ForwardHeaders::accept_only(HeaderValue::from_static(
            "application/json",
        )));

    state.forwarder.forward(request).await.into_response()
}
