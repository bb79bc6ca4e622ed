//! Top-K "more like this" recommendations.
//!
//! Given a title, take its row of the similarity matrix, drop the movie
//! itself, and return the K highest-scoring movies.
//!
//! ## Ordering
//! Scores are sorted descending with a stable sort, so two movies with the
//! same score come out in catalog order. That keeps results deterministic
//! across calls and across runs.

use crate::similarity::SimilarityMatrix;
use data_loader::{Catalog, MovieId};
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Number of recommendations when the caller doesn't say
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Outcome of a title lookup.
///
/// Keeps "title unknown" apart from "found, but nothing to recommend"
/// (e.g. a one-movie catalog, or `k == 0`).
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound)
    }

    /// Convert into an Option, discarding the distinction
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }
}

/// A recommended movie together with its similarity to the query movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMovie {
    /// Catalog row
    pub index: usize,
    pub id: MovieId,
    pub title: String,
    pub genres: String,
    /// Cosine similarity in [0, 1]
    pub score: f64,
}

/// Ranks movies by precomputed similarity.
///
/// Cheap to clone: both fields are shared, read-only handles.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    similarity: Arc<SimilarityMatrix>,
}

impl Recommender {
    /// Create a recommender over a catalog and its similarity matrix.
    ///
    /// Row `i` of `similarity` must describe catalog row `i`.
    pub fn new(catalog: Arc<Catalog>, similarity: Arc<SimilarityMatrix>) -> Self {
        debug_assert_eq!(catalog.len(), similarity.len());
        Self {
            catalog,
            similarity,
        }
    }

    /// Up to `k` titles most similar to `title`, best first.
    ///
    /// `title` must match exactly (case-sensitive). The result has
    /// `min(k, N - 1)` entries and never contains `title` itself.
    pub fn recommend(&self, title: &str, k: usize) -> Lookup<Vec<String>> {
        self.recommend_scored(title, k)
            .map(|scored| scored.into_iter().map(|m| m.title).collect())
    }

    /// Same as [`recommend`](Self::recommend) but an unknown title yields an
    /// empty list instead of `NotFound`.
    pub fn recommend_titles(&self, title: &str, k: usize) -> Vec<String> {
        self.recommend(title, k).found().unwrap_or_default()
    }

    /// Like [`recommend`](Self::recommend), keeping scores and metadata.
    #[instrument(skip(self))]
    pub fn recommend_scored(&self, title: &str, k: usize) -> Lookup<Vec<ScoredMovie>> {
        match self.catalog.index_of(title) {
            Some(index) => {
                let ranked = self.rank_for_index(index, k);
                debug!("Ranked {} movies similar to '{}'", ranked.len(), title);
                Lookup::Found(ranked)
            }
            None => {
                debug!("No catalog entry titled '{}'", title);
                Lookup::NotFound
            }
        }
    }

    /// Top `k` movies for catalog row `index`.
    ///
    /// Returns an empty list for an out-of-range row.
    fn rank_for_index(&self, index: usize, k: usize) -> Vec<ScoredMovie> {
        let Some(row) = self.similarity.row(index) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, f64)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| j != index)
            .collect();

        // sort_by is stable: equal scores keep catalog order. Exactly equal
        // cosines are bit-identical floats (see `compute_similarity`).
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(k);

        scored
            .into_iter()
            .filter_map(|(j, score)| {
                let movie = self.catalog.get(j)?;
                Some(ScoredMovie {
                    index: j,
                    id: movie.id,
                    title: movie.title.clone(),
                    genres: movie.genres.clone(),
                    score,
                })
            })
            .collect()
    }
}
