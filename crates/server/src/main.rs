//! Web UI entry point.
//!
//! Reads `MOVIE_RECS_*` configuration, builds the recommendation context
//! and serves the pages and JSON API.

use anyhow::Result;
use tracing::info;

use server::{serve, AppState, RecommendationOrchestrator, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    info!("Starting movie recommender with {:?}", config);

    let orchestrator = RecommendationOrchestrator::from_catalog_path(config.catalog_path.as_deref())?;
    let addr = config.addr();
    serve(AppState::new(orchestrator, config), &addr).await
}
