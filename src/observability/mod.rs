//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Pagination hook and server produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (fallback counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event, no string formatting of values
//! - Metrics are cheap (atomic increments) and safe to record with no exporter installed

pub mod logging;
pub mod metrics;
