//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the forwarder produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```
//!
//! # Design Decisions
//! - Request ID (x-request-id) is attached to every response
//! - Metrics are cheap; recording without an exporter costs nothing

pub mod logging;
pub mod metrics;
