//! Parsers for on-disk catalog files.
//!
//! Two formats are accepted as drop-in replacements for the built-in table:
//! - `.dat`: one movie per line, `id::title::genres::overview`
//! - `.json`: an array of `{ "id", "title", "genres", "overview" }` objects
//!
//! Both produce `Vec<Movie>` in file order; uniqueness checks happen later
//! when the catalog is assembled.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;

const DAT_FIELDS: usize = 4;

/// Read a file into a String, mapping a missing file to `FileNotFound`
fn read_to_string(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Parse a `.dat` catalog file
///
/// Format: id::title::genres::overview
pub fn parse_movies_dat(path: &Path) -> Result<Vec<Movie>> {
    let content = read_to_string(path)?;
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_movies_dat_str(&content, &file)
}

/// Parse `.dat` content that is already in memory
///
/// `file` is only used to label parse errors. Blank lines and lines starting
/// with `#` are skipped.
pub fn parse_movies_dat_str(content: &str, file: &str) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        // splitn keeps any stray "::" inside the overview
        let parts: Vec<&str> = line_trimmed.splitn(DAT_FIELDS, "::").collect();
        if parts.len() != DAT_FIELDS {
            return Err(DataLoadError::FieldCountMismatch {
                expected: DAT_FIELDS,
                found: parts.len(),
                line: line_no,
            });
        }

        let id = parts[0]
            .trim()
            .parse::<MovieId>()
            .map_err(|e| DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: format!("Invalid movie id '{}': {}", parts[0], e),
            })?;

        let title = parts[1].trim();
        if title.is_empty() {
            return Err(DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: "Missing title".to_string(),
            });
        }

        movies.push(Movie::new(id, title, parts[2].trim(), parts[3].trim()));
    }

    Ok(movies)
}

/// Parse a `.json` catalog file
pub fn parse_movies_json(path: &Path) -> Result<Vec<Movie>> {
    let content = read_to_string(path)?;
    parse_movies_json_str(&content)
}

/// Parse `.json` content that is already in memory
///
/// Text fields are trimmed exactly like the `.dat` loader trims them.
pub fn parse_movies_json_str(content: &str) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> = serde_json::from_str(content)?;
    Ok(movies
        .into_iter()
        .map(|m| Movie::new(m.id, m.title.trim(), m.genres.trim(), m.overview.trim()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dat_lines() {
        let content = "\
# id::title::genres::overview
1::The Matrix::Sci-Fi Action::A hacker discovers reality is a simulation.

2::Frozen::Animation Adventure::Anna must find Elsa.
";
        let movies = parse_movies_dat_str(content, "movies.dat").unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, 1);
        assert_eq!(movies[0].title, "The Matrix");
        assert_eq!(movies[1].genres, "Animation Adventure");
    }

    #[test]
    fn test_overview_may_contain_separator() {
        let movies = parse_movies_dat_str("7::Odd::Drama::Part one::part two", "x.dat").unwrap();
        assert_eq!(movies[0].overview, "Part one::part two");
    }

    #[test]
    fn test_field_count_mismatch() {
        let err = parse_movies_dat_str("1::Only Title", "x.dat").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch { expected: 4, found: 2, line: 1 }
        ));
    }

    #[test]
    fn test_bad_id_reports_line() {
        let err = parse_movies_dat_str("1::A::Drama::x\nabc::B::Drama::y", "x.dat").unwrap_err();
        match err {
            DataLoadError::ParseError { line, file, .. } => {
                assert_eq!(line, 2);
                assert_eq!(file, "x.dat");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_fields_are_trimmed_like_dat() {
        let json = r#"[{"id": 1, "title": " The Matrix ", "genres": "Sci-Fi Action\n", "overview": "  A hacker. "}]"#;
        let from_json = parse_movies_json_str(json).unwrap();
        let from_dat =
            parse_movies_dat_str("1:: The Matrix ::Sci-Fi Action::  A hacker. ", "x.dat").unwrap();

        assert_eq!(from_json, from_dat);
        assert_eq!(from_json[0].title, "The Matrix");
    }

    #[test]
    fn test_missing_file() {
        let err = parse_movies_json(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
