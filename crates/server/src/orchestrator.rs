//! # Recommendation Orchestrator
//!
//! This module owns the whole read-only recommendation context:
//! 1. Take a validated catalog
//! 2. Build bag-of-words features
//! 3. Compute the similarity matrix
//! 4. Wire up the recommender and the title suggester
//!
//! All of that happens once, in [`RecommendationOrchestrator::new`]. After
//! that the orchestrator is shared behind an `Arc` and only ever read, so
//! request handlers need no locking.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, instrument};

use data_loader::{Catalog, MovieId};
use pipeline::{
    build_features, compute_similarity, Features, Lookup, Recommender, ScoredMovie,
    SimilarityMatrix, Suggestion, TitleSuggester,
};

/// How many shared terms to list in an explanation
const EXPLANATION_TERMS: usize = 5;

/// Final recommendation returned to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: Vec<String>,
    pub score: f64,
    pub explanation: String,
}

/// Immutable recommendation context built once at startup
#[derive(Debug, Clone)]
pub struct RecommendationOrchestrator {
    catalog: Arc<Catalog>,
    features: Arc<Features>,
    similarity: Arc<SimilarityMatrix>,
    recommender: Recommender,
    suggester: TitleSuggester,
}

impl RecommendationOrchestrator {
    /// Build features, similarities and query components for `catalog`
    pub fn new(catalog: Catalog) -> Result<Self> {
        let start_time = Instant::now();
        let catalog = Arc::new(catalog);

        let features = build_features(catalog.movies())
            .context("Failed to build feature vectors")?;
        info!(
            "Built {} feature vectors over {} terms",
            features.len(),
            features.vocabulary.len()
        );

        let similarity = compute_similarity(&features.vectors)
            .context("Failed to compute similarity matrix")?;
        info!("Computed {}x{} similarity matrix", similarity.len(), similarity.len());

        let similarity = Arc::new(similarity);
        let recommender = Recommender::new(catalog.clone(), similarity.clone());
        let suggester = TitleSuggester::new(catalog.clone());

        info!(
            "Recommendation context ready for {} movies in {:.2?}",
            catalog.len(),
            start_time.elapsed()
        );

        Ok(Self {
            catalog,
            features: Arc::new(features),
            similarity,
            recommender,
            suggester,
        })
    }

    /// Orchestrator over the embedded 50-movie catalog
    pub fn builtin() -> Result<Self> {
        Self::new(Catalog::builtin())
    }

    /// Orchestrator over a catalog file, or the built-in one when `path` is None
    pub fn from_catalog_path(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
            None => Catalog::builtin(),
        };
        Self::new(catalog)
    }

    /// Main entry point: movies most similar to `title`
    ///
    /// # Arguments
    /// * `title` - Exact catalog title
    /// * `limit` - Number of recommendations (capped at N - 1)
    ///
    /// # Returns
    /// `Lookup::NotFound` for an unknown title, otherwise recommendations
    /// sorted by score (highest first)
    #[instrument(skip(self))]
    pub fn get_recommendations(&self, title: &str, limit: usize) -> Lookup<Vec<MovieRecommendation>> {
        let start_time = Instant::now();
        let scored = match self.recommender.recommend_scored(title, limit) {
            Lookup::Found(scored) => scored,
            Lookup::NotFound => {
                info!("Title '{}' not found", title);
                return Lookup::NotFound;
            }
        };

        let query_index = self.catalog.index_of(title);
        let recommendations: Vec<MovieRecommendation> = scored
            .into_iter()
            .map(|movie| self.to_recommendation(query_index, movie))
            .collect();

        info!(
            "Selected {} recommendations for '{}' in {:.2?}",
            recommendations.len(),
            title,
            start_time.elapsed()
        );
        Lookup::Found(recommendations)
    }

    /// Title suggestions for partial or misspelled input
    pub fn get_suggestions(&self, query: &str, limit: usize, min_score: u8) -> Vec<Suggestion> {
        self.suggester.suggest_scored(query, limit, min_score)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn vocabulary_size(&self) -> usize {
        self.features.vocabulary.len()
    }

    fn to_recommendation(&self, query_index: Option<usize>, movie: ScoredMovie) -> MovieRecommendation {
        let shared = query_index
            .map(|q| self.features.shared_terms(q, movie.index, EXPLANATION_TERMS))
            .unwrap_or_default();
        let explanation = if shared.is_empty() {
            format!("Similarity {:.2}, no shared terms", movie.score)
        } else {
            format!("Similarity {:.2}, shares: {}", movie.score, shared.join(", "))
        };

        MovieRecommendation {
            movie_id: movie.id,
            genres: movie.genres.split_whitespace().map(str::to_string).collect(),
            title: movie.title,
            score: movie.score,
            explanation,
        }
    }
}
