//! Offset pagination hook for Axum services.
//!
//! Reads an offset and a limit from the query string, clamps them to
//! configured bounds and stores the result in the request context for
//! handlers to consume.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pagination;

pub use config::{PaginationConfig, ServiceConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use pagination::{Pagination, PaginationHook, RequestContext};
