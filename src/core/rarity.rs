//! Word rarity classification
//!
//! Rarity is a cosmetic tier derived from the word's length and whether any
//! letter repeats. It never affects scoring.

use rustc_hash::FxHashSet;
use std::fmt;

/// Cosmetic difficulty tier of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RarityTier {
    Common,
    Rare,
    Exclusive,
    Legendary,
}

impl RarityTier {
    /// All tiers, from most to least frequent
    pub const ALL: [Self; 4] = [Self::Common, Self::Rare, Self::Exclusive, Self::Legendary];

    /// Lowercase label shown on the tier badge
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Exclusive => "exclusive",
            Self::Legendary => "legendary",
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a word into its rarity tier
///
/// Rules, evaluated in order:
/// 1. Four letters or fewer, or any repeated letter: `Common`
/// 2. Up to six letters: `Rare`
/// 3. Up to eight letters: `Exclusive`
/// 4. Anything longer: `Legendary`
///
/// Letter repetition is checked case-insensitively.
///
/// # Examples
/// ```
/// use word_scramble::core::{RarityTier, classify};
///
/// assert_eq!(classify("cat"), RarityTier::Common);
/// assert_eq!(classify("planet"), RarityTier::Rare);
/// assert_eq!(classify("apple"), RarityTier::Common); // repeated 'p'
/// assert_eq!(classify("pathfinder"), RarityTier::Legendary);
/// ```
#[must_use]
pub fn classify(word: &str) -> RarityTier {
    let length = word.chars().count();

    if length <= 4 || has_repeated_letter(word) {
        RarityTier::Common
    } else if length <= 6 {
        RarityTier::Rare
    } else if length <= 8 {
        RarityTier::Exclusive
    } else {
        RarityTier::Legendary
    }
}

/// Whether any ASCII letter occurs more than once, ignoring case
pub(crate) fn has_repeated_letter(word: &str) -> bool {
    let mut seen = FxHashSet::default();
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .any(|c| !seen.insert(c.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_common() {
        assert_eq!(classify("a"), RarityTier::Common);
        assert_eq!(classify("cat"), RarityTier::Common);
        assert_eq!(classify("tree"), RarityTier::Common);
        assert_eq!(classify("lynx"), RarityTier::Common);
    }

    #[test]
    fn length_tiers_without_repeats() {
        assert_eq!(classify("house"), RarityTier::Rare);
        assert_eq!(classify("planet"), RarityTier::Rare);
        assert_eq!(classify("kingdom"), RarityTier::Exclusive);
        assert_eq!(classify("computer"), RarityTier::Exclusive);
        assert_eq!(classify("lightning"), RarityTier::Common); // two 'i'
        assert_eq!(classify("pathfinder"), RarityTier::Legendary);
    }

    #[test]
    fn repeated_letter_overrides_length() {
        assert_eq!(classify("apple"), RarityTier::Common);
        assert_eq!(classify("elephant"), RarityTier::Common);
        assert_eq!(classify("chocolate"), RarityTier::Common);
        assert_eq!(classify("banana"), RarityTier::Common);
    }

    #[test]
    fn repetition_is_case_insensitive() {
        assert_eq!(classify("Orbito"), RarityTier::Common);
        assert_eq!(classify("ORBIT"), RarityTier::Rare);
    }

    #[test]
    fn boundary_lengths() {
        assert_eq!(classify("abcd"), RarityTier::Common);
        assert_eq!(classify("abcde"), RarityTier::Rare);
        assert_eq!(classify("abcdef"), RarityTier::Rare);
        assert_eq!(classify("abcdefg"), RarityTier::Exclusive);
        assert_eq!(classify("abcdefgh"), RarityTier::Exclusive);
        assert_eq!(classify("abcdefghi"), RarityTier::Legendary);
    }

    #[test]
    fn labels_match_display() {
        for tier in RarityTier::ALL {
            assert_eq!(tier.to_string(), tier.label());
        }
        assert_eq!(RarityTier::Exclusive.label(), "exclusive");
    }
}
