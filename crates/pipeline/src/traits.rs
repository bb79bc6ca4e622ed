//! Core traits for the pipeline.
//!
//! This module defines the FuzzyScorer trait, the seam between the title
//! suggester and whatever string-matching routine backs it.

/// Scores how closely a candidate string matches a query.
///
/// ## Design Note
/// - Scores are on a 0–100 scale, 100 being an exact match
/// - `Send + Sync` lets one scorer be shared across request handlers
/// - Implementations must be pure: same inputs, same score
pub trait FuzzyScorer: Send + Sync {
    /// Returns the name of this scorer (for logging/debugging)
    fn name(&self) -> &str;

    /// Score `candidate` against `query`.
    ///
    /// # Returns
    /// A value in `0..=100`; 0 when either string is empty after
    /// normalization.
    fn score(&self, query: &str, candidate: &str) -> u8;
}
