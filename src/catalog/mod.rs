//! Word catalog for the scramble game
//!
//! Holds the fixed set of entries a round can draw from. The default catalog
//! is embedded into the binary; a custom one can be loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{ENTRIES, ENTRIES_COUNT};

use crate::core::{EntryError, WordEntry};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io;
use thiserror::Error;

/// Errors raised while building or drawing from a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("word catalog is empty")]
    Empty,
    #[error("failed to read word catalog: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("line {line}: {source}")]
    InvalidEntry {
        line: usize,
        #[source]
        source: EntryError,
    },
}

/// A fixed collection of scramble entries
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
}

impl WordCatalog {
    #[must_use]
    pub const fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// The catalog compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::entries_from_slice(ENTRIES))
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick an entry uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if the catalog has no entries.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&WordEntry, CatalogError> {
        self.entries.choose(rng).ok_or(CatalogError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn entries_count_matches_const() {
        assert_eq!(ENTRIES.len(), ENTRIES_COUNT);
    }

    #[test]
    fn embedded_entries_are_valid() {
        for &(word, hint) in ENTRIES {
            assert!(
                WordEntry::new(word, hint).is_ok(),
                "Entry '{word}' is not a valid catalog entry"
            );
        }
        assert_eq!(WordCatalog::embedded().len(), ENTRIES_COUNT);
    }

    #[test]
    fn embedded_covers_every_tier() {
        let catalog = WordCatalog::embedded();
        for tier in crate::core::RarityTier::ALL {
            assert!(
                catalog.entries().iter().any(|e| classify(e.word()) == tier),
                "No embedded word classified as {tier}"
            );
        }
    }

    #[test]
    fn pick_random_empty_catalog() {
        let catalog = WordCatalog::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            catalog.pick_random(&mut rng),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn pick_random_single_entry() {
        let entry = WordEntry::new("cat", "pet").unwrap();
        let catalog = WordCatalog::new(vec![entry.clone()]);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(catalog.pick_random(&mut rng).unwrap(), &entry);
        }
    }

    #[test]
    fn pick_random_reaches_all_entries() {
        let catalog = WordCatalog::new(loader::entries_from_slice(&[
            ("cat", "pet"),
            ("dog", "pet"),
            ("sun", "star"),
        ]));
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(catalog.pick_random(&mut rng).unwrap().word().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
