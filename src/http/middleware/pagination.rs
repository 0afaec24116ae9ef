//! Pagination Middleware.
//! Resolves offset/limit before the route handler runs.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, Uri},
    middleware::Next,
    response::Response,
};
use url::form_urlencoded;

use crate::pagination::{PaginationHook, RequestContext};

/// Decode the query string into a key → value map. Repeated keys keep the last value.
pub fn query_params(uri: &Uri) -> HashMap<String, String> {
    uri.query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

pub async fn pagination_middleware(
    State(hook): State<Arc<PaginationHook>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let params = query_params(req.uri());
    let pagination = hook.apply(&params);

    tracing::debug!(
        offset = pagination.offset,
        limit = pagination.limit,
        path = %req.uri().path(),
        "Pagination resolved"
    );

    // Attach context, replacing anything an earlier layer put under pagination
    let extensions = req.extensions_mut();
    if let Some(ctx) = extensions.get_mut::<RequestContext>() {
        ctx.set_pagination(pagination);
    } else {
        extensions.insert(RequestContext {
            pagination: Some(pagination),
        });
    }

    next.run(req).await
}
