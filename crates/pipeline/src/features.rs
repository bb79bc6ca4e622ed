//! Bag-of-words feature extraction.
//!
//! Each movie's combined text (genres + overview) is tokenized and counted
//! over a vocabulary shared by the whole catalog. The vocabulary is sorted,
//! so column `k` means the same term on every run.
//!
//! ## Tokenization
//! - lowercase
//! - a token is a maximal run of alphanumeric or `_` characters
//! - tokens shorter than two characters are dropped ("a", the "s" of "wife's")
//! - no stemming, no stop words

use crate::error::{FeatureError, Result};
use data_loader::Movie;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

const MIN_TOKEN_CHARS: usize = 2;

/// Split text into lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Frozen term → column mapping.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from every token of every document, sorted lexicographically
    fn from_documents(documents: &[Vec<String>]) -> Self {
        let distinct: BTreeSet<&str> = documents
            .iter()
            .flat_map(|doc| doc.iter().map(String::as_str))
            .collect();

        let terms: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();

        Self { terms, index }
    }

    /// Number of distinct terms (the feature vector length)
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column for a term, if the catalog ever used it
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at a column
    pub fn term(&self, col: usize) -> Option<&str> {
        self.terms.get(col).map(String::as_str)
    }

    /// All terms in column order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Term counts for one movie, one slot per vocabulary term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    counts: Vec<u32>,
}

impl FeatureVector {
    pub fn new(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True when no vocabulary term occurs in the movie's text
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Integer dot product; exact, so `a.dot(b) == b.dot(a)` always holds.
    pub fn dot(&self, other: &FeatureVector) -> u64 {
        self.counts
            .iter()
            .zip(&other.counts)
            .map(|(&a, &b)| a as u64 * b as u64)
            .sum()
    }

    /// Squared Euclidean norm, exact
    pub fn norm_squared(&self) -> u64 {
        self.dot(self)
    }
}

/// Output of the feature builder: the vocabulary plus one vector per movie,
/// in catalog order.
#[derive(Debug, Clone)]
pub struct Features {
    pub vocabulary: Vocabulary,
    pub vectors: Vec<FeatureVector>,
}

impl Features {
    /// Number of movies (rows)
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Terms two movies have in common, most shared first.
    ///
    /// "Shared" weight is `min(count_a, count_b)`; equal weights fall back to
    /// vocabulary order. Used to explain why two movies were matched.
    pub fn shared_terms(&self, a: usize, b: usize, limit: usize) -> Vec<&str> {
        let (Some(va), Some(vb)) = (self.vectors.get(a), self.vectors.get(b)) else {
            return Vec::new();
        };

        let mut shared: Vec<(usize, u32)> = va
            .counts
            .iter()
            .zip(&vb.counts)
            .enumerate()
            .filter_map(|(col, (&x, &y))| {
                let weight = x.min(y);
                (weight > 0).then_some((col, weight))
            })
            .collect();

        shared.sort_by(|x, y| y.1.cmp(&x.1));
        shared
            .into_iter()
            .take(limit)
            .filter_map(|(col, _)| self.vocabulary.term(col))
            .collect()
    }
}

/// Build the vocabulary and count vectors for a catalog.
///
/// # Errors
/// `FeatureError::EmptyCatalog` if `movies` is empty.
pub fn build_features(movies: &[Movie]) -> Result<Features> {
    if movies.is_empty() {
        return Err(FeatureError::EmptyCatalog);
    }

    // Tokenize every movie in parallel; collect() keeps catalog order
    let documents: Vec<Vec<String>> = movies
        .par_iter()
        .map(|movie| tokenize(&movie.combined_text()))
        .collect();

    let vocabulary = Vocabulary::from_documents(&documents);

    let vectors: Vec<FeatureVector> = documents
        .par_iter()
        .map(|tokens| {
            let mut counts = vec![0u32; vocabulary.len()];
            for token in tokens {
                if let Some(col) = vocabulary.index_of(token) {
                    counts[col] += 1;
                }
            }
            FeatureVector::new(counts)
        })
        .collect();

    debug!(
        "Built {} feature vectors over a vocabulary of {} terms",
        vectors.len(),
        vocabulary.len()
    );

    Ok(Features {
        vocabulary,
        vectors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Sci-Fi Thriller A man's memory, short-term."),
            vec!["sci", "fi", "thriller", "man", "memory", "short", "term"]
        );
        assert!(tokenize("a b c ! ?").is_empty());
    }

    #[test]
    fn test_vocabulary_is_sorted_and_counts_are_correct() {
        let movies = vec![
            Movie::new(1, "A", "Action", "Action heroes fight."),
            Movie::new(2, "B", "Drama", "Heroes talk."),
        ];
        let features = build_features(&movies).unwrap();

        assert_eq!(
            features.vocabulary.terms(),
            &["action", "drama", "fight", "heroes", "talk"]
        );
        assert_eq!(features.vectors[0].counts(), &[2, 0, 1, 1, 0]);
        assert_eq!(features.vectors[1].counts(), &[0, 1, 0, 1, 1]);
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(build_features(&[]).unwrap_err(), FeatureError::EmptyCatalog);
    }

    #[test]
    fn test_zero_vector_when_no_tokens() {
        let movies = vec![
            Movie::new(1, "A", "Drama", "Words here."),
            Movie::new(2, "B", "", "!"),
        ];
        let features = build_features(&movies).unwrap();
        assert!(features.vectors[1].is_zero());
        assert_eq!(features.vectors[1].norm_squared(), 0);
    }

    #[test]
    fn test_shared_terms() {
        let movies = vec![
            Movie::new(1, "A", "Sci-Fi Action", "The final battle begins."),
            Movie::new(2, "B", "Sci-Fi Action", "Neo must save Zion."),
        ];
        let features = build_features(&movies).unwrap();
        let shared = features.shared_terms(0, 1, 10);
        assert_eq!(shared, vec!["action", "fi", "sci"]);
        assert!(features.shared_terms(0, 5, 10).is_empty());
    }
}
