//! Server crate for the movie recommender.
//!
//! This crate contains the orchestrator that builds the recommendation
//! context once, plus the axum web UI and JSON API that read from it.

pub mod api;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod pages;

pub use api::{create_router, AppState};
pub use config::ServerConfig;
pub use orchestrator::{MovieRecommendation, RecommendationOrchestrator};

use anyhow::{Context, Result};
use tracing::info;

/// Bind `addr` and serve the web UI until the process is stopped
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
