use std::sync::Arc;

use crate::config::ServerConfig;
use crate::orchestrator::RecommendationOrchestrator;

/// Shared application state
///
/// Both halves are read-only after startup, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<RecommendationOrchestrator>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(orchestrator: RecommendationOrchestrator, config: ServerConfig) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            config: Arc::new(config),
        }
    }
}
