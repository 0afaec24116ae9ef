//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → middleware/pagination.rs (query → PaginationHook → RequestContext)
//!     → extract.rs (handler receives typed Pagination)
//!     → Send to client
//! ```

pub mod extract;
pub mod middleware;
pub mod server;

pub use extract::PaginationRejection;
pub use server::HttpServer;
