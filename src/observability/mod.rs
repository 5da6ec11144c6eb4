//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Relay handler and upstream client produce:
//!     → logging.rs (structured log events to stdout)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through logs via the trace span
//! - Metrics are recorded unconditionally; without an installed
//!   recorder they are no-ops

pub mod logging;
pub mod metrics;
