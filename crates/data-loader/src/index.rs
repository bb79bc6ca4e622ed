//! Catalog building and validation.
//!
//! Every constructor funnels through [`Catalog::from_movies`], which builds
//! the title and id indices and rejects anything that would make a lookup
//! ambiguous.

use crate::dataset::BUILTIN_MOVIES;
use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// The embedded 50-movie demo catalog.
    ///
    /// Ids are 1..=50 in table order. The table is static and known to be
    /// valid, so this cannot fail.
    pub fn builtin() -> Self {
        let movies: Vec<Movie> = BUILTIN_MOVIES
            .iter()
            .enumerate()
            .map(|(idx, (title, genres, overview))| {
                Movie::new(idx as MovieId + 1, *title, *genres, *overview)
            })
            .collect();

        let (title_index, id_index) = build_indices(&movies);
        Self {
            movies,
            title_index,
            id_index,
        }
    }

    /// Build a catalog from an ordered list of movies
    ///
    /// Checks that:
    /// - there is at least one movie
    /// - every title is non-blank
    /// - ids are unique
    /// - titles are unique (exact, case-sensitive)
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        if movies.is_empty() {
            return Err(DataLoadError::EmptyCatalog);
        }

        let mut title_index = HashMap::with_capacity(movies.len());
        let mut id_index = HashMap::with_capacity(movies.len());

        for (idx, movie) in movies.iter().enumerate() {
            if movie.title.trim().is_empty() {
                return Err(DataLoadError::InvalidValue {
                    field: "title".to_string(),
                    value: format!("<blank> (movie id {})", movie.id),
                });
            }
            if id_index.insert(movie.id, idx).is_some() {
                return Err(DataLoadError::DuplicateId(movie.id));
            }
            if title_index.insert(movie.title.clone(), idx).is_some() {
                return Err(DataLoadError::DuplicateTitle(movie.title.clone()));
            }
        }

        debug!("Indexed {} movies", movies.len());
        Ok(Self {
            movies,
            title_index,
            id_index,
        })
    }

    /// Load a catalog from a `.json` or `.dat` file
    ///
    /// The format is picked from the file extension.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let movies = match extension.as_deref() {
            Some("json") => parser::parse_movies_json(path)?,
            Some("dat") => parser::parse_movies_dat(path)?,
            _ => {
                return Err(DataLoadError::InvalidValue {
                    field: "catalog extension".to_string(),
                    value: path.display().to_string(),
                });
            }
        };

        let catalog = Self::from_movies(movies)?;
        info!("Loaded {} movies from {}", catalog.len(), path.display());
        Ok(catalog)
    }
}

fn build_indices(movies: &[Movie]) -> (HashMap<String, usize>, HashMap<MovieId, usize>) {
    let title_index = movies
        .iter()
        .enumerate()
        .map(|(idx, m)| (m.title.clone(), idx))
        .collect();
    let id_index = movies
        .iter()
        .enumerate()
        .map(|(idx, m)| (m.id, idx))
        .collect();
    (title_index, id_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 50);

        // Re-validating the same rows must succeed
        let validated = Catalog::from_movies(builtin.movies().to_vec()).unwrap();
        assert_eq!(validated.len(), 50);

        for (idx, movie) in builtin.iter().enumerate() {
            assert_eq!(movie.id as usize, idx + 1);
            assert_eq!(builtin.index_of(&movie.title), Some(idx));
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            Catalog::from_movies(Vec::new()),
            Err(DataLoadError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let movies = vec![
            Movie::new(1, "Dune", "Sci-Fi", "Desert planet."),
            Movie::new(2, "Dune", "Sci-Fi", "Same title, different id."),
        ];
        match Catalog::from_movies(movies) {
            Err(DataLoadError::DuplicateTitle(title)) => assert_eq!(title, "Dune"),
            other => panic!("expected duplicate title, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let movies = vec![
            Movie::new(3, "Coco", "Animation", "Music."),
            Movie::new(3, "Moana", "Animation", "Ocean."),
        ];
        assert!(matches!(
            Catalog::from_movies(movies),
            Err(DataLoadError::DuplicateId(3))
        ));
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"id": 10, "title": "Heat", "genres": "Crime Thriller", "overview": "Cops and robbers."}}]"#
        )
        .unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get_by_id(10).unwrap().title, "Heat");
    }

    #[test]
    fn test_load_dat_file() {
        let mut file = tempfile::Builder::new().suffix(".dat").tempfile().unwrap();
        writeln!(file, "1::Alien::Horror Sci-Fi::A crew meets a creature.").unwrap();
        writeln!(file, "2::Aliens::Action Sci-Fi::The marines go back.").unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.titles(), vec!["Alien", "Aliens"]);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        assert!(matches!(
            Catalog::load_from_file(file.path()),
            Err(DataLoadError::InvalidValue { .. })
        ));
    }
}
