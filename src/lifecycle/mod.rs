//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Metrics (optional) → Forwarder → Listener (plain or TLS) → Serve
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then core, then listeners
//! - Fail fast: any startup error is fatal

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownListener};
pub use signals::shutdown_signal;
