//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → tls.rs (optional TLS handshake via axum-server)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - TLS is optional and handled transparently
//! - Certificate problems are reported before the listener starts

pub mod tls;

pub use tls::{load_tls_config, TlsError};
