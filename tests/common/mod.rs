//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::Request,
    http::{HeaderMap, Method, Uri},
    response::Response,
    Router,
};
use saavn_proxy::{HttpServer, ProxyConfig, Shutdown};
use tokio::net::TcpListener;

/// One request as the mock upstream saw it.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decoded query pairs, in wire order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.uri.query().unwrap_or("").as_bytes())
            .into_owned()
            .collect()
    }
}

/// A running mock upstream.
pub struct MockUpstream {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl MockUpstream {
    /// Base URL with a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Base URL under a sub-path, e.g. `v1/`.
    pub fn base_url_with(&self, path: &str) -> String {
        format!("http://{}/{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> Captured {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one upstream request");
        requests.into_iter().next().unwrap()
    }
}

/// Start a mock upstream that records every request and answers with `respond`.
pub async fn start_mock_upstream<F, Fut>(respond: F) -> MockUpstream
where
    F: Fn(Captured) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    let captured = Arc::new(Mutex::new(Vec::new()));
    let log = captured.clone();

    let app = Router::new().fallback(move |request: Request| {
        let log = log.clone();
        let respond = respond.clone();
        async move {
            let (parts, body) = request.into_parts();
            let body = to_bytes(body, usize::MAX).await.unwrap_or_default();
            let entry = Captured {
                method: parts.method,
                uri: parts.uri,
                headers: parts.headers,
                body,
            };
            log.lock().unwrap().push(entry.clone());
            respond(entry).await
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream { addr, captured }
}

/// A mock upstream answering every request with the same response.
pub async fn start_fixed_upstream(
    status: u16,
    content_type: Option<&'static str>,
    body: &'static str,
) -> MockUpstream {
    start_mock_upstream(move |_| async move {
        let mut builder = Response::builder().status(status);
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder.body(Body::from(body)).unwrap()
    })
    .await
}

/// Proxy configuration pointing at `base_url`, ignoring system proxies.
pub fn proxy_config(base_url: &str) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.upstream.base_url = base_url.to_string();
    config.upstream.use_system_proxy = false;
    config
}

/// Start the proxy on an ephemeral port.
pub async fn start_proxy(config: ProxyConfig) -> (SocketAddr, Shutdown) {
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client that talks to the proxy directly.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
