//! Formatting utilities for terminal output

use crate::core::RarityTier;
use colored::{ColoredString, Colorize};

/// Render a tier as a coloured badge, matching the TUI palette
#[must_use]
pub fn tier_badge(tier: RarityTier) -> ColoredString {
    let label = format!(" {} ", tier.label());
    match tier {
        RarityTier::Common => label.black().on_bright_blue(),
        RarityTier::Rare => label.white().on_red(),
        RarityTier::Exclusive => label.black().on_yellow(),
        RarityTier::Legendary => label.white().on_magenta(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
