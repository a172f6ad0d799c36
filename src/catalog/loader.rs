//! Catalog loading utilities
//!
//! Provides functions to load a catalog from a `word|hint` file or from the
//! embedded table.

use super::CatalogError;
use crate::core::WordEntry;
use std::fs;
use std::path::Path;

/// Load entries from a file
///
/// One entry per line as `word|hint`. Blank lines and lines starting with `#`
/// are skipped. Unlike the embedded table, any bad line is an error.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, and
/// `CatalogError::Malformed` or `CatalogError::InvalidEntry` for a bad line.
///
/// # Examples
/// ```no_run
/// use word_scramble::catalog::loader::load_from_file;
///
/// let entries = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_entries(&content)
}

/// Parse `word|hint` lines into entries
///
/// # Errors
///
/// Returns `CatalogError::Malformed` for a line without a `|` separator and
/// `CatalogError::InvalidEntry` for a line whose word or hint is invalid.
pub fn parse_entries(content: &str) -> Result<Vec<WordEntry>, CatalogError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            let (word, hint) = line.split_once('|').ok_or_else(|| CatalogError::Malformed {
                line: line_no,
                reason: "expected 'word|hint'".to_string(),
            })?;
            WordEntry::new(word, hint).map_err(|source| CatalogError::InvalidEntry {
                line: line_no,
                source,
            })
        })
        .collect()
}

/// Convert the embedded table to entries, skipping invalid pairs
///
/// # Examples
/// ```
/// use word_scramble::catalog::loader::entries_from_slice;
/// use word_scramble::catalog::ENTRIES;
///
/// let entries = entries_from_slice(ENTRIES);
/// assert_eq!(entries.len(), ENTRIES.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str)]) -> Vec<WordEntry> {
    slice
        .iter()
        .filter_map(|&(word, hint)| WordEntry::new(word, hint).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryError;

    #[test]
    fn entries_from_slice_converts_valid_pairs() {
        let entries = entries_from_slice(&[("cat", "pet"), ("Planet", "orbits a star")]);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word(), "cat");
        assert_eq!(entries[1].word(), "planet");
        assert_eq!(entries[1].hint(), "orbits a star");
    }

    #[test]
    fn entries_from_slice_skips_invalid() {
        let entries = entries_from_slice(&[("cat", "pet"), ("", "none"), ("ab1", "x"), ("dog", "")]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word(), "cat");
    }

    #[test]
    fn entries_from_slice_empty() {
        assert!(entries_from_slice(&[]).is_empty());
    }

    #[test]
    fn parse_entries_skips_comments_and_blanks() {
        let content = "# header\n\ncat|A small pet\n  dog | Barks  \n";
        let entries = parse_entries(content).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].word(), "dog");
        assert_eq!(entries[1].hint(), "Barks");
    }

    #[test]
    fn parse_entries_keeps_pipes_in_hint() {
        let entries = parse_entries("tree|trunk | branches").unwrap();
        assert_eq!(entries[0].hint(), "trunk | branches");
    }

    #[test]
    fn parse_entries_reports_missing_separator() {
        let err = parse_entries("cat|pet\ndog barks\n").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { line: 2, .. }));
    }

    #[test]
    fn parse_entries_reports_invalid_entry() {
        let err = parse_entries("cat|pet\n\nhot dog|food\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidEntry {
                line: 3,
                source: EntryError::InvalidCharacters(_)
            }
        ));
    }

    #[test]
    fn load_from_missing_file() {
        let err = load_from_file("/nonexistent/catalog.txt").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
