//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → handlers.rs (static JSON, or build a ForwardRequest)
//!     → [upstream forwarder]
//!     → response.rs (relay upstream answer or render Gateway Failure)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{gateway_failure, ErrorEnvelope};
pub use server::{AppState, HttpServer};
