//! Pagination values shared between the hook and request handlers.

use serde::Serialize;

/// Normalized offset/limit pair for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Items to skip before the first returned item.
    pub offset: i64,

    /// Maximum items in the page. Always in `1..=max_limit`.
    pub limit: u32,
}

/// Per-request context written by pre-processing middleware.
///
/// Lives in the request extensions for the lifetime of one request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub pagination: Option<Pagination>,
}

impl RequestContext {
    /// Replace any previous pagination with `pagination`.
    pub fn set_pagination(&mut self, pagination: Pagination) {
        self.pagination = Some(pagination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_flat_object() {
        let p = Pagination { offset: 30, limit: 20 };
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json, serde_json::json!({ "offset": 30, "limit": 20 }));
    }

    #[test]
    fn test_set_pagination_overwrites() {
        let mut ctx = RequestContext::default();
        ctx.set_pagination(Pagination { offset: 5, limit: 10 });
        ctx.set_pagination(Pagination { offset: 0, limit: 20 });
        assert_eq!(ctx.pagination, Some(Pagination { offset: 0, limit: 20 }));
    }
}
