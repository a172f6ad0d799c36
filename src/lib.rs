//! Word Scramble
//!
//! A terminal word-guessing game: unscramble the word before the countdown
//! runs out, and score more the faster you answer.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use word_scramble::catalog::WordCatalog;
//! use word_scramble::game::{GameConfig, GuessOutcome, RoundController};
//!
//! let mut controller = RoundController::new(
//!     WordCatalog::embedded(),
//!     GameConfig::default(),
//!     StdRng::seed_from_u64(1),
//! );
//! controller.start_round().unwrap();
//!
//! let word = controller.round().unwrap().entry.word().to_string();
//! let (outcome, _effects) = controller.submit_guess(&word);
//! assert_eq!(outcome, GuessOutcome::Correct);
//! assert_eq!(controller.score().value(), 20);
//! ```

// Core domain types
pub mod core;

// Word catalog
pub mod catalog;

// Round lifecycle
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
