//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Attach the pagination hook to paginated routes
//! - Wire up middleware (tracing, timeouts)
//! - Bind server to listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::validation::validate_config;
use crate::config::{ConfigError, ServiceConfig};
use crate::http::middleware::pagination::pagination_middleware;
use crate::pagination::{Pagination, PaginationHook};

/// Body returned by paginated routes.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub pagination: Pagination,
}

/// HTTP server exposing the paginated routes.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let hook = Arc::new(PaginationHook::new(config.pagination.clone())?);
        let router = Self::build_router(&config, hook);

        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, hook: Arc<PaginationHook>) -> Router {
        let paginated = Router::new()
            .route("/items", get(list_items))
            .route_layer(middleware::from_fn_with_state(hook, pagination_middleware));

        Router::new()
            .route("/health", get(health_check))
            .merge(paginated)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            default_limit = self.config.pagination.default_limit,
            max_limit = self.config.pagination.max_limit,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn list_items(pagination: Pagination) -> Json<PageResponse> {
    Json(PageResponse { pagination })
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_json(router: Router, uri: &str) -> serde_json::Value {
        let res = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ServiceConfig::default();
        config.pagination.max_limit = 10;
        assert!(HttpServer::new(config).is_err());
    }

    #[tokio::test]
    async fn test_items_route_is_paginated() {
        let server = HttpServer::new(ServiceConfig::default()).unwrap();
        let body = get_json(server.router(), "/items?offset=30&limit=50").await;
        assert_eq!(body, serde_json::json!({ "pagination": { "offset": 30, "limit": 50 } }));
    }

    #[tokio::test]
    async fn test_configured_keys_are_used() {
        let mut config = ServiceConfig::default();
        config.pagination.offset_key = "skip".into();
        config.pagination.limit_key = "take".into();
        let server = HttpServer::new(config).unwrap();

        let body = get_json(server.router(), "/items?skip=4&take=8&offset=1&limit=2").await;
        assert_eq!(body["pagination"]["offset"], 4);
        assert_eq!(body["pagination"]["limit"], 8);
    }

    #[tokio::test]
    async fn test_health_is_not_paginated() {
        let server = HttpServer::new(ServiceConfig::default()).unwrap();
        let res = server
            .router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
