//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (answer preflights, decorate responses)
//!     → [router]
//!     → headers.rs (allow-list headers for the upstream call)
//! ```
//!
//! # Design Decisions
//! - Nothing but `accept` and `user-agent` crosses to the upstream
//! - CORS is wide open by requirement; it is not an access control

pub mod cors;
pub mod headers;

pub use cors::cors_layer;
pub use headers::ForwardHeaders;
