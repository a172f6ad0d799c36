//! Display functions for command results

use super::formatters::{create_progress_bar, tier_badge};
use crate::commands::{CatalogSummary, Classification};
use crate::core::RarityTier;
use colored::Colorize;

/// Print the tier of each classified word
pub fn print_classifications(results: &[Classification]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "RARITY CLASSIFICATION".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for result in results {
        let note = if result.has_repeats && result.length > 4 {
            " (repeated letter)".bright_black().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:<14} {:>2} letters  {}{}",
            result.word.to_uppercase().bright_yellow().bold(),
            result.length,
            tier_badge(result.tier),
            note
        );
    }
    println!();
}

/// Print a catalog's tier breakdown and entries
pub fn print_catalog_summary(summary: &CatalogSummary, show_entries: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD CATALOG".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {} entries\n", summary.total.to_string().bright_yellow());

    for tier in RarityTier::ALL {
        let count = summary.count(tier);
        let bar = create_progress_bar(count as f64, summary.total as f64, 30);
        println!("   {:<13} {} {count:3}", tier_badge(tier), bar.green());
    }

    if show_entries {
        println!();
        for (entry, tier) in &summary.entries {
            println!(
                "   {} {:<12} {}",
                tier_badge(*tier),
                entry.word(),
                entry.hint().bright_black()
            );
        }
    }
    println!();
}
