//! Pairwise cosine similarity.
//!
//! The full N×N matrix is computed once, row by row in parallel, and stored
//! flat in row-major order. After construction it is read-only.

use crate::error::{FeatureError, Result};
use crate::features::FeatureVector;
use rayon::prelude::*;
use tracing::debug;

/// Cosine similarity of two count vectors, in [0, 1].
///
/// Zero vectors have no direction, so anything involving one scores 0.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    cosine_from_counts(a.dot(b), a.norm_squared(), b.norm_squared())
}

/// Cosine from integer parts: `sqrt(dot² / (|a|² · |b|²))`.
///
/// The fraction is reduced to lowest terms before any floating-point step,
/// so two pairs with the same exact cosine always get the same `f64`.
fn cosine_from_counts(dot: u64, norm_sq_a: u64, norm_sq_b: u64) -> f64 {
    if norm_sq_a == 0 || norm_sq_b == 0 || dot == 0 {
        return 0.0;
    }
    let num = dot as u128 * dot as u128;
    let den = norm_sq_a as u128 * norm_sq_b as u128;
    let g = gcd(num, den);
    ((num / g) as f64 / (den / g) as f64).sqrt().clamp(0.0, 1.0)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Dense, symmetric N×N similarity matrix.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between rows `i` and `j`.
    ///
    /// # Panics
    /// If either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of bounds for {0}x{0}", self.n);
        self.values[i * self.n + j]
    }

    /// One full row, including the diagonal entry
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.n).then(|| &self.values[i * self.n..(i + 1) * self.n])
    }

    /// Exact symmetry check
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// Compute cosine similarity between every pair of vectors.
///
/// The diagonal is pinned to exactly 1.0 for non-zero vectors (and 0.0 for
/// zero vectors) so floating-point rounding of `sqrt(x)^2` never leaks out.
///
/// # Errors
/// - `EmptyCatalog` if `vectors` is empty
/// - `DimensionMismatch` if the vectors don't all share one length
pub fn compute_similarity(vectors: &[FeatureVector]) -> Result<SimilarityMatrix> {
    let Some(first) = vectors.first() else {
        return Err(FeatureError::EmptyCatalog);
    };

    let expected = first.len();
    if let Some((row, v)) = vectors.iter().enumerate().find(|(_, v)| v.len() != expected) {
        return Err(FeatureError::DimensionMismatch {
            row,
            expected,
            found: v.len(),
        });
    }

    let n = vectors.len();
    let norms: Vec<u64> = vectors.iter().map(FeatureVector::norm_squared).collect();

    let values: Vec<f64> = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            let vectors = &vectors;
            let norms = &norms;
            (0..n).map(move |j| {
                if norms[i] == 0 || norms[j] == 0 {
                    0.0
                } else if i == j {
                    1.0
                } else {
                    cosine_from_counts(vectors[i].dot(&vectors[j]), norms[i], norms[j])
                }
            })
        })
        .collect();

    debug!("Computed {}x{} similarity matrix", n, n);
    Ok(SimilarityMatrix { n, values })
}
