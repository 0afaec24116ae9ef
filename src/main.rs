//! Pagination hook demo service.
//!
//! Serves `GET /items` with the pagination hook attached; the handler echoes
//! the resolved `{offset, limit}` pair.
//!
//! ```text
//! Client ── GET /items?offset=40&limit=10 ──▶ pagination middleware ──▶ handler
//!                                                │
//!                                                └─ RequestContext.pagination
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use pagination_hook::config::{load_config, ServiceConfig};
use pagination_hook::lifecycle::signals::shutdown_on_ctrl_c;
use pagination_hook::observability::{logging, metrics};
use pagination_hook::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "pagination-hook")]
#[command(about = "Demo service for the offset pagination hook", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("pagination-hook v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        offset_key = %config.pagination.offset_key,
        limit_key = %config.pagination.limit_key,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address already checked by config validation.
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(shutdown_on_ctrl_c(shutdown));

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
