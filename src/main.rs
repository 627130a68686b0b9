//! PLU Search - Main entry point
//!
//! Loads the produce catalog and serves typo-tolerant PLU lookups over the
//! Model Context Protocol (MCP) on stdio.

use anyhow::Result;
use plu_search::{
    load_or_empty, Config, LookupService, LookupServiceImpl, MetricsTracker, PluSearchServer,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can feed the filter
    let config = Config::from_env();

    // Logging goes to stderr only; stdout carries MCP traffic
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = MetricsTracker::new();

    // A failed catalog load leaves the server running with an empty catalog
    let repository = config.catalog_repository();
    let load = load_or_empty(repository.as_ref(), &metrics).await;

    let lookup_service = Arc::new(LookupServiceImpl::from_load(
        load,
        config.max_results,
        metrics.clone(),
    )) as Arc<dyn LookupService>;

    info!(
        "PLU Search initialized with {} items (default max results: {})",
        lookup_service.catalog_size(),
        config.max_results
    );

    let server = PluSearchServer::new(lookup_service);

    info!("Starting MCP server with stdio transport");
    plu_search::server::run_server(server).await?;

    info!("{}", metrics.summary());
    info!("PLU Search shutdown complete");
    Ok(())
}
