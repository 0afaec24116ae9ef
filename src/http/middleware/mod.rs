//! Request pre-processing middleware.

pub mod pagination;

pub use pagination::{pagination_middleware, query_params};
