//! "Did you mean" title suggestions.
//!
//! Every catalog title is scored against the user's text, the best `limit`
//! are kept, and anything not strictly above `min_score` is dropped.

use crate::fuzzy::WeightedRatio;
use crate::traits::FuzzyScorer;
use data_loader::Catalog;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Candidate pool size when the caller doesn't say
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Scores must be strictly greater than this by default
pub const DEFAULT_MIN_SCORE: u8 = 50;

/// A suggested title and its fuzzy-match score (0–100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub title: String,
    pub score: u8,
}

/// Suggests catalog titles for partial or misspelled input.
#[derive(Clone)]
pub struct TitleSuggester {
    catalog: Arc<Catalog>,
    scorer: Arc<dyn FuzzyScorer>,
}

impl TitleSuggester {
    /// Create a suggester backed by the default [`WeightedRatio`] scorer.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_scorer(catalog, WeightedRatio::new())
    }

    /// Create a suggester backed by any scorer.
    pub fn with_scorer(catalog: Arc<Catalog>, scorer: impl FuzzyScorer + 'static) -> Self {
        Self {
            catalog,
            scorer: Arc::new(scorer),
        }
    }

    /// Suggested titles, best match first.
    pub fn suggest(&self, query: &str, limit: usize, min_score: u8) -> Vec<String> {
        self.suggest_scored(query, limit, min_score)
            .into_iter()
            .map(|s| s.title)
            .collect()
    }

    /// Suggested titles with their scores.
    ///
    /// ## Algorithm
    /// 1. Score every title with the configured scorer
    /// 2. Stable-sort by score, descending (ties keep catalog order)
    /// 3. Keep the first `limit`
    /// 4. Drop those scoring `<= min_score`
    #[instrument(skip(self))]
    pub fn suggest_scored(&self, query: &str, limit: usize, min_score: u8) -> Vec<Suggestion> {
        if query.trim().is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<Suggestion> = self
            .catalog
            .iter()
            .map(|movie| Suggestion {
                score: self.scorer.score(query, &movie.title),
                title: movie.title.clone(),
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);
        scored.retain(|s| s.score > min_score);

        debug!(
            "Scorer {} kept {} suggestions for '{}'",
            self.scorer.name(),
            scored.len(),
            query
        );
        scored
    }
}

impl std::fmt::Debug for TitleSuggester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleSuggester")
            .field("titles", &self.catalog.len())
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_suggester() -> TitleSuggester {
        TitleSuggester::new(Arc::new(Catalog::builtin()))
    }

    /// Scores 80 for titles starting with the query, 0 otherwise
    struct PrefixScorer;

    impl FuzzyScorer for PrefixScorer {
        fn name(&self) -> &str {
            "PrefixScorer"
        }

        fn score(&self, query: &str, candidate: &str) -> u8 {
            if candidate.starts_with(query) { 80 } else { 0 }
        }
    }

    #[test]
    fn test_misspelling_finds_title() {
        let suggestions = builtin_suggester().suggest("Inceptoin", 5, 50);
        assert_eq!(suggestions.first().map(String::as_str), Some("Inception"));
    }

    #[test]
    fn test_empty_query() {
        let suggester = builtin_suggester();
        assert!(suggester.suggest("", 5, 50).is_empty());
        assert!(suggester.suggest("   ", 5, 50).is_empty());
        assert!(suggester.suggest("Coco", 0, 50).is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // "Doctor Strange" scores exactly 50 against "Toy Story"
        let scored = builtin_suggester().suggest_scored("Toy Story", 5, 50);
        let titles: Vec<&str> = scored.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Toy Story", "Toy Story 2"]);
        assert_eq!(scored[0].score, 100);

        let relaxed = builtin_suggester().suggest("Toy Story", 5, 49);
        assert!(relaxed.contains(&"Doctor Strange".to_string()));
    }

    #[test]
    fn test_limit_applies_before_threshold() {
        let suggestions = builtin_suggester().suggest("Harry Potter", 2, 50);
        assert_eq!(
            suggestions,
            vec![
                "Harry Potter and the Sorcerer's Stone".to_string(),
                "Harry Potter and the Chamber of Secrets".to_string(),
            ]
        );
    }

    #[test]
    fn test_custom_scorer() {
        let suggester = TitleSuggester::with_scorer(Arc::new(Catalog::builtin()), PrefixScorer);
        assert_eq!(
            suggester.suggest("Star Wars", 10, 50),
            vec![
                "Star Wars: A New Hope".to_string(),
                "Star Wars: The Empire Strikes Back".to_string(),
                "Star Wars: Return of the Jedi".to_string(),
            ]
        );
    }
}
