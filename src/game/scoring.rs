//! Score keeping
//!
//! The bonus for a correct answer depends only on the seconds left on the
//! clock, never on the word's rarity tier.

use std::fmt;

/// Session score, only ever increases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u32);

impl Score {
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Add points to the score
    pub const fn award(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points);
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Points awarded for a correct guess with `remaining_seconds` left
///
/// | remaining | bonus |
/// |-----------|-------|
/// | > 25      | 20    |
/// | > 20      | 17    |
/// | > 15      | 14    |
/// | > 10      | 13    |
/// | otherwise | 10    |
///
/// # Examples
/// ```
/// use word_scramble::game::tier_bonus;
///
/// assert_eq!(tier_bonus(26), 20);
/// assert_eq!(tier_bonus(25), 17);
/// ```
#[must_use]
pub const fn tier_bonus(remaining_seconds: u32) -> u32 {
    match remaining_seconds {
        26.. => 20,
        21..=25 => 17,
        16..=20 => 14,
        11..=15 => 13,
        _ => 10,
    }
}
