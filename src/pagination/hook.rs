//! The pagination hook: validated configuration plus fallback reporting.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::validation::validate_pagination;
use crate::config::{ConfigError, PaginationConfig};
use crate::observability::metrics;
use crate::pagination::observer::{Fallback, PaginationObserver, TracingObserver};
use crate::pagination::resolver::{resolve, Field, Resolution};
use crate::pagination::types::Pagination;

/// Resolves pagination for each request under a fixed configuration.
///
/// Cheap to share: wrap in an `Arc` and hand to every route that paginates.
#[derive(Debug, Clone)]
pub struct PaginationHook {
    config: PaginationConfig,
    observer: Arc<dyn PaginationObserver>,
}

impl PaginationHook {
    /// Create a hook, rejecting configurations that could yield an invalid limit.
    pub fn new(config: PaginationConfig) -> Result<Self, ConfigError> {
        validate_pagination(&config).map_err(ConfigError::Validation)?;
        Ok(Self {
            config,
            observer: Arc::new(TracingObserver),
        })
    }

    /// Report fallbacks to `observer` instead of the default tracing events.
    pub fn with_observer(mut self, observer: Arc<dyn PaginationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Resolve without reporting anything.
    pub fn resolve(&self, params: &HashMap<String, String>) -> Resolution {
        resolve(params, &self.config)
    }

    /// Resolve and report every substituted field. Never fails.
    pub fn apply(&self, params: &HashMap<String, String>) -> Pagination {
        let resolution = self.resolve(params);

        for (field, outcome) in resolution.fallbacks() {
            let applied = match field {
                Field::Offset => resolution.pagination.offset,
                Field::Limit => i64::from(resolution.pagination.limit),
            };
            self.observer.on_fallback(&Fallback {
                field,
                outcome,
                raw: params.get(self.config.key(field)).map(String::as_str),
                applied,
            });
            metrics::record_fallback(field, outcome);
        }

        resolution.pagination
    }
}

impl Default for PaginationHook {
    fn default() -> Self {
        Self {
            config: PaginationConfig::default(),
            observer: Arc::new(TracingObserver),
        }
    }
}
