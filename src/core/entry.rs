//! Catalog entry representation
//!
//! A `WordEntry` pairs the word to guess with the hint shown next to its scramble.

use std::fmt;
use thiserror::Error;

/// A word to guess together with its hint
///
/// The word is always non-empty, lowercase and ASCII alphabetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    hint: String,
}

/// Error type for invalid catalog entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("word must not be empty")]
    EmptyWord,
    #[error("word '{0}' must contain only ASCII letters")]
    InvalidCharacters(String),
    #[error("hint for '{0}' must not be empty")]
    EmptyHint(String),
}

impl WordEntry {
    /// Create a new entry, normalizing the word to lowercase
    ///
    /// # Errors
    /// Returns `EntryError` if:
    /// - The word is empty
    /// - The word contains anything other than ASCII letters
    /// - The hint is blank
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Apple", "Fruit that keeps the doctor away").unwrap();
    /// assert_eq!(entry.word(), "apple");
    ///
    /// assert!(WordEntry::new("", "nothing").is_err());
    /// assert!(WordEntry::new("r2d2", "robot").is_err());
    /// ```
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Result<Self, EntryError> {
        let word = word.into().trim().to_lowercase();
        let hint = hint.into().trim().to_string();

        if word.is_empty() {
            return Err(EntryError::EmptyWord);
        }

        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(EntryError::InvalidCharacters(word));
        }

        if hint.is_empty() {
            return Err(EntryError::EmptyHint(word));
        }

        Ok(Self { word, hint })
    }

    /// The word the player has to retype
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Never true for an entry built through `new`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Check a guess against the word, ignoring case and surrounding whitespace
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.word
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
