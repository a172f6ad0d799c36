//! Round timing configuration

use std::num::NonZeroU32;
use std::time::Duration;

/// Timing knobs for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Countdown length of each round
    pub round_seconds: NonZeroU32,
    /// Interval between timer ticks
    pub tick_interval: Duration,
    /// Pause after a correct guess before the next round
    pub correct_delay: Duration,
    /// Pause after a timeout before the next round
    pub timeout_delay: Duration,
    /// How long a transient message stays up
    pub message_delay: Duration,
    /// How long the praise word replaces the score
    pub celebration_delay: Duration,
}

impl GameConfig {
    pub const DEFAULT_ROUND_SECONDS: NonZeroU32 = NonZeroU32::new(30).unwrap();

    #[must_use]
    pub const fn with_round_seconds(mut self, seconds: NonZeroU32) -> Self {
        self.round_seconds = seconds;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: Self::DEFAULT_ROUND_SECONDS,
            tick_interval: Duration::from_secs(1),
            correct_delay: Duration::from_secs(2),
            timeout_delay: Duration::from_millis(1500),
            message_delay: Duration::from_secs(2),
            celebration_delay: Duration::from_millis(1100),
        }
    }
}
