//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! ForwardRequest (method, path, query, allow-listed headers)
//!     → target.rs (resolve path against the upstream base)
//!     → forwarder.rs (single outbound call, bounded timeout)
//!     → Ok(UpstreamResponse)  status + body + content type, verbatim
//!     → Err(ForwardError)     rendered as 502 Gateway Failure
//! ```

pub mod error;
pub mod forwarder;
pub mod request;
pub mod target;

pub use error::{ForwardError, SetupError};
pub use forwarder::{Forwarder, UpstreamResponse, DEFAULT_CONTENT_TYPE};
pub use request::{ForwardRequest, QueryParams};
pub use target::Upstream;
