//! Word classification command
//!
//! Reports the rarity tier of arbitrary words without starting a game.

use crate::core::{RarityTier, WordEntry, classify, has_repeated_letter};

/// Tier of one word, plus how it got there
pub struct Classification {
    pub word: String,
    pub tier: RarityTier,
    pub length: usize,
    pub has_repeats: bool,
}

/// Classify each word, rejecting anything that could not be a catalog word
///
/// # Errors
///
/// Returns an error naming the first word that is empty or not alphabetic.
pub fn classify_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<Classification>, String> {
    words
        .iter()
        .map(|raw| {
            // Reuse entry validation; the hint is irrelevant here
            let entry = WordEntry::new(raw.as_ref(), "-")
                .map_err(|e| format!("Invalid word '{}': {e}", raw.as_ref()))?;
            let word = entry.word().to_string();
            let length = word.len();
            let has_repeats = has_repeated_letter(&word);
            Ok(Classification {
                tier: classify(&word),
                word,
                length,
                has_repeats,
            })
        })
        .collect()
}
