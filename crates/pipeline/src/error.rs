//! Error types for the pipeline crate.

use thiserror::Error;

/// Errors raised while turning a catalog into features and similarities
///
/// Both variants are startup-time failures: once the similarity matrix
/// exists, every query is infallible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// No movies to build a vocabulary from
    #[error("Cannot build features from an empty catalog")]
    EmptyCatalog,

    /// Feature vectors of different lengths were mixed together
    #[error("Feature vector {row} has length {found}, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, FeatureError>;
