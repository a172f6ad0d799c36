//! Core domain types for the scramble game
//!
//! This module holds the pure pieces of the game: catalog entries, the rarity
//! classifier and the shuffler. Nothing here touches the terminal or a clock.

mod entry;
mod rarity;
mod shuffle;

pub use entry::{EntryError, WordEntry};
pub use rarity::{RarityTier, classify};
pub(crate) use rarity::has_repeated_letter;
pub use shuffle::{scramble, shuffle};
