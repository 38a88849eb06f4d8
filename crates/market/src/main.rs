//! Market server - GPU cloud pricing reference API
//!
//! Serves the built-in market catalog, pure aggregations over it, and
//! model-generated analysis over a JSON API with health and metrics
//! endpoints.

use anyhow::Result;
use market_lib::{
    analyst::{Analyst, LlmClient},
    catalog::MarketSnapshot,
    health::{components, HealthRegistry},
    observability::{MarketMetrics, StructuredLogger},
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting market-server");

    // Load configuration
    let config = config::ServerConfig::load()?;
    info!(port = config.port, model = %config.llm_model, "Server configured");
    if config.llm_api_key.is_empty() {
        warn!("MARKET_LLM_API_KEY is not set, analysis requests will fall back");
    }

    // The catalog is immutable for the life of the process
    let snapshot = Arc::new(MarketSnapshot::builtin());

    // Initialize health registry
    let health_registry = HealthRegistry::new();
    health_registry.register(components::CATALOG).await;
    health_registry.register(components::ANALYST).await;
    health_registry.register(components::CACHE).await;

    // Initialize metrics
    let metrics = MarketMetrics::new();
    metrics.set_catalog_sizes(snapshot.gpus.len() as i64, snapshot.providers.len() as i64);

    // Initialize structured logger
    let logger = StructuredLogger::new("market-server");
    logger.log_startup(
        SERVER_VERSION,
        snapshot.gpus.len(),
        snapshot.providers.len(),
        &config.llm_model,
    );

    // Wire the analyst to the configured completion endpoint; it reports
    // its own component health through the shared registry
    let generator = LlmClient::new(config.llm_config())?;
    let analyst = Analyst::new(
        Box::new(generator),
        snapshot.clone(),
        &config.cache_dir,
        health_registry.clone(),
    );

    // Create shared application state
    let app_state = Arc::new(api::AppState::new(
        snapshot,
        analyst,
        health_registry.clone(),
        metrics,
    ));

    // Mark server as ready after initialization
    health_registry.set_ready(true).await;

    // Start the API server
    let _api_handle = tokio::spawn(api::serve(config.port, app_state));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    logger.log_shutdown("SIGINT received");
    info!("Shutting down");

    Ok(())
}
