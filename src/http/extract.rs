//! Typed access to the pagination context from handlers.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pagination::{Pagination, RequestContext};

#[derive(Debug, Error)]
pub enum PaginationRejection {
    #[error("Pagination context missing: pagination middleware is not installed on this route")]
    MissingContext,
}

impl IntoResponse for PaginationRejection {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Pagination extraction failed");

        let body = Json(json!({
            "message": self.to_string()
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = PaginationRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .and_then(|ctx| ctx.pagination)
            .ok_or(PaginationRejection::MissingContext)
    }
}
