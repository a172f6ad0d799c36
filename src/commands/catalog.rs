//! Catalog summary command

use crate::catalog::WordCatalog;
use crate::core::{RarityTier, WordEntry, classify};
use rustc_hash::FxHashMap;

/// Tier breakdown of a catalog
pub struct CatalogSummary {
    pub total: usize,
    pub per_tier: FxHashMap<RarityTier, usize>,
    pub entries: Vec<(WordEntry, RarityTier)>,
}

impl CatalogSummary {
    /// Number of entries in `tier`
    #[must_use]
    pub fn count(&self, tier: RarityTier) -> usize {
        self.per_tier.get(&tier).copied().unwrap_or(0)
    }
}

/// Classify every entry in the catalog
#[must_use]
pub fn summarize_catalog(catalog: &WordCatalog) -> CatalogSummary {
    let mut per_tier: FxHashMap<RarityTier, usize> = FxHashMap::default();
    let mut entries: Vec<(WordEntry, RarityTier)> = catalog
        .entries()
        .iter()
        .map(|entry| {
            let tier = classify(entry.word());
            *per_tier.entry(tier).or_insert(0) += 1;
            (entry.clone(), tier)
        })
        .collect();

    entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.word().cmp(b.0.word())));

    CatalogSummary {
        total: catalog.len(),
        per_tier,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::entries_from_slice;

    #[test]
    fn counts_per_tier() {
        let catalog = WordCatalog::new(entries_from_slice(&[
            ("planet", "orbits"),
            ("cat", "pet"),
            ("kingdom", "realm"),
            ("dog", "pet"),
        ]));
        let summary = summarize_catalog(&catalog);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(RarityTier::Common), 2);
        assert_eq!(summary.count(RarityTier::Rare), 1);
        assert_eq!(summary.count(RarityTier::Exclusive), 1);
        assert_eq!(summary.count(RarityTier::Legendary), 0);
    }

    #[test]
    fn entries_sorted_by_tier_then_word() {
        let catalog = WordCatalog::new(entries_from_slice(&[
            ("planet", "orbits"),
            ("dog", "pet"),
            ("cat", "pet"),
        ]));
        let summary = summarize_catalog(&catalog);
        let words: Vec<_> = summary.entries.iter().map(|(e, _)| e.word()).collect();
        assert_eq!(words, vec!["cat", "dog", "planet"]);
    }

    #[test]
    fn empty_catalog() {
        let summary = summarize_catalog(&WordCatalog::default());
        assert_eq!(summary.total, 0);
        assert!(summary.entries.is_empty());
    }
}
