//! Content-based recommendation pipeline.
//!
//! This crate provides:
//! - Bag-of-words feature extraction over movie genres and synopses
//! - A precomputed cosine-similarity matrix
//! - A Recommender that ranks one row of that matrix
//! - A TitleSuggester for fuzzy "did you mean" lookups
//!
//! ## Architecture
//! Everything is built once, in order:
//! 1. `build_features` turns the catalog into count vectors
//! 2. `compute_similarity` turns the vectors into an N×N matrix
//! 3. `Recommender` and `TitleSuggester` answer queries read-only
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::Catalog;
//! use pipeline::{build_features, compute_similarity, Recommender, TitleSuggester};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::builtin());
//! let features = build_features(catalog.movies())?;
//! let similarity = Arc::new(compute_similarity(&features.vectors)?);
//!
//! let recommender = Recommender::new(catalog.clone(), similarity);
//! let titles = recommender.recommend_titles("The Matrix", 5);
//!
//! let suggester = TitleSuggester::new(catalog);
//! let guesses = suggester.suggest("Inceptoin", 5, 50);
//! ```

pub mod error;
pub mod traits;
pub mod features;
pub mod similarity;
pub mod recommender;
pub mod fuzzy;
pub mod suggest;

// Re-export main types
pub use error::{FeatureError, Result};
pub use traits::FuzzyScorer;
pub use features::{build_features, tokenize, FeatureVector, Features, Vocabulary};
pub use similarity::{compute_similarity, cosine_similarity, SimilarityMatrix};
pub use recommender::{Lookup, Recommender, ScoredMovie, DEFAULT_RECOMMENDATIONS};
pub use fuzzy::WeightedRatio;
pub use suggest::{Suggestion, TitleSuggester, DEFAULT_MIN_SCORE, DEFAULT_SUGGESTION_LIMIT};
