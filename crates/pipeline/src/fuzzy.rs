//! Fuzzy title scoring built on `strsim`.
//!
//! [`WeightedRatio`] blends three views of "how alike are these strings":
//! 1. plain ratio of the normalized strings
//! 2. token-sort ratio, so word order doesn't matter ("Matrix The")
//! 3. partial ratio, so a short query can match inside a long title
//!
//! Each ratio is a normalized Levenshtein similarity. The best weighted
//! ratio wins and is scaled to 0–100.

use crate::traits::FuzzyScorer;
use strsim::normalized_levenshtein;

/// Partial matching only kicks in once one string is this much longer
const PARTIAL_LENGTH_RATIO: f64 = 1.5;
/// Past this length ratio partial matches are heavily discounted
const LONG_LENGTH_RATIO: f64 = 8.0;

const TOKEN_SORT_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.9;
const LONG_PARTIAL_SCALE: f64 = 0.6;

/// Lowercase, replace anything that isn't alphanumeric with a space, and
/// collapse runs of whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn token_sort(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Best similarity of `short` against any equally long window of `long`.
fn partial_ratio(short: &str, long: &str) -> f64 {
    let long_chars: Vec<char> = long.chars().collect();
    let width = short.chars().count();
    if width == 0 || width > long_chars.len() {
        return normalized_levenshtein(short, long);
    }

    long_chars
        .windows(width)
        .map(|window| normalized_levenshtein(short, &window.iter().collect::<String>()))
        .fold(0.0, f64::max)
}

/// Default fuzzy scorer for title suggestions.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRatio;

impl WeightedRatio {
    pub fn new() -> Self {
        Self
    }
}

impl FuzzyScorer for WeightedRatio {
    fn name(&self) -> &str {
        "WeightedRatio"
    }

    fn score(&self, query: &str, candidate: &str) -> u8 {
        let query = normalize(query);
        let candidate = normalize(candidate);
        if query.is_empty() || candidate.is_empty() {
            return 0;
        }

        let mut best = normalized_levenshtein(&query, &candidate);

        let sorted = normalized_levenshtein(&token_sort(&query), &token_sort(&candidate));
        best = best.max(sorted * TOKEN_SORT_SCALE);

        let (short, long) = if query.chars().count() <= candidate.chars().count() {
            (&query, &candidate)
        } else {
            (&candidate, &query)
        };
        let length_ratio = long.chars().count() as f64 / short.chars().count() as f64;
        if length_ratio >= PARTIAL_LENGTH_RATIO {
            let scale = if length_ratio > LONG_LENGTH_RATIO {
                LONG_PARTIAL_SCALE
            } else {
                PARTIAL_SCALE
            };
            best = best.max(partial_ratio(short, long) * scale);
        }

        (best * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Spider-Man:  Homecoming! "), "spider man homecoming");
        assert_eq!(normalize("?!"), "");
    }

    #[test]
    fn test_exact_match_scores_100() {
        let scorer = WeightedRatio::new();
        assert_eq!(scorer.score("The Matrix", "the matrix"), 100);
    }

    #[test]
    fn test_transposition() {
        // Two edits out of nine characters
        assert_eq!(WeightedRatio.score("Inceptoin", "Inception"), 78);
    }

    #[test]
    fn test_word_order_ignored() {
        assert_eq!(WeightedRatio.score("Matrix The", "The Matrix"), 95);
    }

    #[test]
    fn test_partial_match() {
        // "matrix" appears verbatim inside both titles
        assert_eq!(WeightedRatio.score("matrix", "The Matrix Reloaded"), 90);
        assert_eq!(WeightedRatio.score("matrix", "The Matrix"), 90);
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(WeightedRatio.score("", "Coco"), 0);
        assert_eq!(WeightedRatio.score("Coco", "---"), 0);
    }

    #[test]
    fn test_unrelated_scores_low() {
        assert!(WeightedRatio.score("Inceptoin", "Frozen") < 50);
    }
}
