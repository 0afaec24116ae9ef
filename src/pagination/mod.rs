//! Offset pagination subsystem.
//!
//! # Data Flow
//! ```text
//! Query string (key → value)
//!     → resolver.rs (parse, bound-check, substitute fallbacks)
//!     → hook.rs (report fallbacks to observer + metrics)
//!     → Pagination { offset, limit }
//!     → RequestContext in request extensions
//! ```
//!
//! # Design Decisions
//! - Malformed pagination never fails a request; it degrades to defaults
//! - Configuration is validated once, then shared read-only
//! - Reporting is injected, not global

pub mod hook;
pub mod observer;
pub mod resolver;
pub mod types;

pub use hook::PaginationHook;
pub use observer::{Fallback, PaginationObserver, TracingObserver};
pub use resolver::{resolve, Field, Outcome, Resolution};
pub use types::{Pagination, RequestContext};
