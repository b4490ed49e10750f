//! Single-upstream HTTP pass-through proxy library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod security;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::Forwarder;
