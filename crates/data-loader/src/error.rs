//! Error types for the data-loader crate.
//!
//! Every way a catalog can fail to load or validate is a variant here.
//! Callers that only care about "did it work" can bubble these up with `?`
//! into `anyhow`, while tests can match on the exact variant.

use thiserror::Error;

/// Errors that can occur while loading or validating a movie catalog
///
/// Rust concept: The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON catalog was malformed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Line in a `.dat` catalog couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Catalog had no movies at all
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// Two movies share an id
    #[error("Duplicate movie id: {0}")]
    DuplicateId(u32),

    /// Two movies share a title, so title lookup would be ambiguous
    #[error("Duplicate movie title: {0}")]
    DuplicateTitle(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
