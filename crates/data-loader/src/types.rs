//! Core domain types for the movie catalog.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId)
//! - Structs with public fields
//! - Borrowing: getters hand out `&Movie`, never clones
//! - HashMap indices kept next to the owning Vec

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie (1..=N for the built-in catalog)
pub type MovieId = u32;

// =============================================================================
// Movie
// =============================================================================

/// Represents a movie in the catalog
///
/// Immutable once the catalog is built; nothing in the workspace hands out
/// `&mut Movie`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Space-separated genre tags, e.g. "Sci-Fi Thriller"
    pub genres: String,
    /// Free-text synopsis
    pub overview: String,
}

impl Movie {
    /// Create a movie from borrowed or owned strings
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        genres: impl Into<String>,
        overview: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            genres: genres.into(),
            overview: overview.into(),
        }
    }

    /// Genres and overview joined by a single space.
    ///
    /// This is the only text the feature builder ever looks at.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.genres, self.overview)
    }

    /// Individual genre tags ("Sci-Fi", "Thriller", ...)
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genres.split_whitespace()
    }
}

// =============================================================================
// Catalog - The In-Memory Movie Table
// =============================================================================

/// The fixed, ordered collection of movies available for recommendation.
///
/// Row order matters: it is the row order of every feature vector and of the
/// similarity matrix, and it breaks ties when two movies score the same.
///
/// Construct with [`Catalog::builtin`], [`Catalog::from_movies`] or
/// [`Catalog::load_from_file`]; all three validate that ids and titles are
/// unique, so `index_of` can never be ambiguous.
#[derive(Debug, Clone)]
pub struct Catalog {
    // Primary data store, in catalog order
    pub(crate) movies: Vec<Movie>,

    // Secondary indices into `movies`
    pub(crate) title_index: HashMap<String, usize>,
    pub(crate) id_index: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Number of movies (N)
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Always false for a validated catalog, provided for clippy's sake
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All movies in catalog order
    ///
    /// Rust concept: `&[T]` is a slice (view into the Vec we own)
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Iterate over movies in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    /// Get the movie at a catalog row
    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Get a movie by ID
    pub fn get_by_id(&self, id: MovieId) -> Option<&Movie> {
        self.id_index.get(&id).map(|&idx| &self.movies[idx])
    }

    /// Row index of an exact, case-sensitive title match
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// Does the catalog contain this exact title?
    pub fn contains_title(&self, title: &str) -> bool {
        self.title_index.contains_key(title)
    }

    /// All titles, in catalog order
    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.title.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}
