//! Round lifecycle: timer, scoring, controller and the deferred-action queue

pub mod config;
pub mod controller;
pub mod scheduler;
pub mod scoring;
pub mod session;
pub mod timer;

pub use config::GameConfig;
pub use controller::{
    GuessOutcome, Message, MessageKind, PRAISE_WORDS, RoundController, RoundState, RoundStatus,
    Snapshot,
};
pub use scheduler::{Deferred, Effect, MessageId, RoundId, Scheduler};
pub use scoring::{Score, tier_bonus};
pub use session::Session;
pub use timer::{RoundTimer, TickOutcome, TimerHandle, TimerState};
