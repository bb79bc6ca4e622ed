//! # Data Loader Crate
//!
//! This crate owns the movie catalog: the record type, the embedded demo
//! dataset, and the loaders that can replace it with a file on disk.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog)
//! - **dataset**: The built-in 50-movie table
//! - **parser**: Parse `.dat` and `.json` catalog files
//! - **index**: Validate movies and build title/id lookups
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let idx = catalog.index_of("The Matrix").unwrap();
//! println!("{} is row {}", catalog.get(idx).unwrap().title, idx);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

mod dataset;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Catalog, Movie, MovieId};
