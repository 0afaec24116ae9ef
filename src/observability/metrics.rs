//! Metrics collection and exposition.
//!
//! # Metrics
//! - `pagination_fallbacks_total` (counter): substituted fields by `field`, `reason`
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder it is a no-op
//! - The Prometheus exporter is opt-in via `observability.metrics_enabled`

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::pagination::resolver::{Field, Outcome};

pub const FALLBACKS_TOTAL: &str = "pagination_fallbacks_total";

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter")
        }
    }
}

/// Count one substituted pagination field.
pub fn record_fallback(field: Field, outcome: Outcome) {
    metrics::counter!(
        FALLBACKS_TOTAL,
        "field" => field.as_str(),
        "reason" => outcome.as_str()
    )
    .increment(1);
}
