//! Round lifecycle controller
//!
//! Owns the session state (current round, score, message, input buffer) and
//! moves it through start, guess, timeout and advance. Every delayed
//! transition comes back as an `Effect` for the host to schedule; the
//! controller re-checks round and message ids when the action returns, so a
//! late action from an abandoned round does nothing.

use super::config::GameConfig;
use super::scheduler::{Deferred, Effect, MessageId, RoundId};
use super::scoring::{Score, tier_bonus};
use super::timer::{RoundTimer, TickOutcome, TimerHandle};
use crate::catalog::{CatalogError, WordCatalog};
use crate::core::{RarityTier, WordEntry, classify, scramble};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

/// Words flashed in place of the score after a correct answer
pub const PRAISE_WORDS: &[&str] = &[
    "Amazing",
    "Wonderful",
    "Wordlicious",
    "Incredible",
    "Fantastic",
    "Superb",
    "Outstanding",
    "Excellent",
    "Impressive",
    "Spectacular",
];

const EMPTY_INPUT_TEXT: &str = "Please enter the word to check!";
const INCORRECT_TEXT: &str = "Oops! Try again.";

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Correct,
    Incorrect,
    TimedOut,
}

impl RoundStatus {
    /// Whether the round still takes guesses and its clock still runs
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Active | Self::Incorrect)
    }
}

/// Result of checking a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    EmptyInput,
    /// Round already resolved; waiting for the next one
    RoundClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub kind: MessageKind,
}

/// State of the round in play
#[derive(Debug, Clone)]
pub struct RoundState {
    pub id: RoundId,
    pub entry: WordEntry,
    pub scrambled: String,
    pub tier: RarityTier,
    pub remaining_seconds: u32,
    pub status: RoundStatus,
    /// Set once the answer has been shown after a timeout
    pub revealed: bool,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub round: Option<RoundId>,
    pub scrambled: String,
    pub hint: String,
    pub tier: Option<RarityTier>,
    pub remaining_seconds: u32,
    pub round_seconds: u32,
    pub score: u32,
    pub praise: Option<&'static str>,
    pub message: Option<Message>,
    pub status: Option<RoundStatus>,
    pub input: String,
    pub input_visible: bool,
    pub max_input_len: usize,
    pub revealed_word: Option<String>,
}

/// Drives rounds for a single session
pub struct RoundController {
    catalog: WordCatalog,
    config: GameConfig,
    rng: StdRng,
    timer: RoundTimer,
    round: Option<RoundState>,
    last_round_id: u64,
    score: Score,
    praise: Option<&'static str>,
    message: Option<Message>,
    last_message_id: u64,
    input: String,
    input_visible: bool,
}

impl RoundController {
    #[must_use]
    pub fn new(catalog: WordCatalog, config: GameConfig, rng: StdRng) -> Self {
        Self {
            catalog,
            config,
            rng,
            timer: RoundTimer::new(),
            round: None,
            last_round_id: 0,
            score: Score::default(),
            praise: None,
            message: None,
            last_message_id: 0,
            input: String::new(),
            input_visible: true,
        }
    }

    /// Begin a fresh round, abandoning whatever round was in play
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if there is nothing to draw from. The
    /// previous round's timer is already stopped in that case.
    pub fn start_round(&mut self) -> Result<Vec<Effect>, CatalogError> {
        self.timer.stop();

        let entry = self.catalog.pick_random(&mut self.rng)?.clone();
        let scrambled = scramble(entry.word(), &mut self.rng);
        let tier = classify(entry.word());

        self.last_round_id += 1;
        let id = RoundId(self.last_round_id);

        self.input.clear();
        self.input_visible = true;
        self.message = None;
        self.praise = None;

        let handle = self.timer.start(self.config.round_seconds);
        debug!(round = id.0, tier = %tier, letters = entry.len(), "round started");

        self.round = Some(RoundState {
            id,
            entry,
            scrambled,
            tier,
            remaining_seconds: self.config.round_seconds.get(),
            status: RoundStatus::Active,
            revealed: false,
        });

        Ok(vec![Effect::after(
            self.config.tick_interval,
            Deferred::Tick(handle),
        )])
    }

    /// Check a guess against the current word
    pub fn submit_guess(&mut self, text: &str) -> (GuessOutcome, Vec<Effect>) {
        if text.trim().is_empty() {
            debug!(round = ?self.current_round_id().map(|r| r.0), "empty guess");
            let id = self.set_message(EMPTY_INPUT_TEXT, MessageKind::Error);
            return (
                GuessOutcome::EmptyInput,
                vec![Effect::after(
                    self.config.message_delay,
                    Deferred::ClearMessage(id),
                )],
            );
        }

        let Some(round) = self.round.as_mut().filter(|r| r.status.is_open()) else {
            return (GuessOutcome::RoundClosed, Vec::new());
        };

        if !round.entry.matches(text) {
            round.status = RoundStatus::Incorrect;
            debug!(round = round.id.0, "incorrect guess");
            self.set_message(INCORRECT_TEXT, MessageKind::Error);
            return (GuessOutcome::Incorrect, Vec::new());
        }

        round.status = RoundStatus::Correct;
        let bonus = tier_bonus(round.remaining_seconds);
        let id = round.id;
        let word = round.entry.word().to_uppercase();
        let remaining = round.remaining_seconds;

        self.timer.stop();
        self.score.award(bonus);
        self.praise = PRAISE_WORDS.choose(&mut self.rng).copied();
        self.set_message(
            &format!("Yay, {word} is the correct word!"),
            MessageKind::Success,
        );
        info!(round = id.0, remaining, bonus, score = self.score.value(), "correct guess");

        (
            GuessOutcome::Correct,
            vec![
                Effect::after(self.config.celebration_delay, Deferred::EndCelebration(id)),
                Effect::after(self.config.correct_delay, Deferred::AdvanceRound(id)),
            ],
        )
    }

    /// Submit whatever is in the input buffer
    ///
    /// While the input is hidden (after a timeout) nothing is checked.
    pub fn submit_input(&mut self) -> (GuessOutcome, Vec<Effect>) {
        if !self.input_visible {
            return (GuessOutcome::RoundClosed, Vec::new());
        }
        let text = self.input.clone();
        self.submit_guess(&text)
    }

    /// Append a letter to the input, up to the current word's length
    pub fn push_char(&mut self, c: char) {
        if !self.input_visible || !c.is_ascii_alphabetic() {
            return;
        }
        if self.input.len() < self.max_input_len() {
            self.input.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Deliver a timer tick
    pub fn tick(&mut self, handle: TimerHandle) -> Vec<Effect> {
        match self.timer.tick(handle) {
            TickOutcome::Ticked(remaining) => {
                if let Some(round) = self.round.as_mut() {
                    round.remaining_seconds = remaining;
                }
                vec![Effect::after(
                    self.config.tick_interval,
                    Deferred::Tick(handle),
                )]
            }
            TickOutcome::Expired => {
                if let Some(round) = self.round.as_mut() {
                    round.remaining_seconds = 0;
                }
                self.on_timer_expired()
            }
            TickOutcome::Inactive => {
                trace!(?handle, "stale timer tick ignored");
                Vec::new()
            }
        }
    }

    /// Resolve the round as timed out and reveal the word
    pub fn on_timer_expired(&mut self) -> Vec<Effect> {
        let Some(round) = self.round.as_mut().filter(|r| r.status.is_open()) else {
            return Vec::new();
        };

        round.status = RoundStatus::TimedOut;
        round.revealed = true;
        let id = round.id;
        let word = round.entry.word().to_uppercase();

        self.input_visible = false;
        self.set_message(
            &format!("Time off! {word} was the correct word"),
            MessageKind::Error,
        );
        info!(round = id.0, "round timed out");

        vec![Effect::after(
            self.config.timeout_delay,
            Deferred::AdvanceRound(id),
        )]
    }

    /// Run a deferred action the host has found due
    ///
    /// # Errors
    ///
    /// Propagates `CatalogError` when the action starts a new round.
    pub fn apply(&mut self, action: Deferred) -> Result<Vec<Effect>, CatalogError> {
        match action {
            Deferred::Tick(handle) => Ok(self.tick(handle)),
            Deferred::AdvanceRound(id) => {
                if self.current_round_id() == Some(id) {
                    self.start_round()
                } else {
                    trace!(round = id.0, "stale round advance ignored");
                    Ok(Vec::new())
                }
            }
            Deferred::ClearMessage(id) => {
                if self.message.as_ref().is_some_and(|m| m.id == id) {
                    self.message = None;
                }
                Ok(Vec::new())
            }
            Deferred::EndCelebration(id) => {
                if self.current_round_id() == Some(id) {
                    self.praise = None;
                }
                Ok(Vec::new())
            }
        }
    }

    fn set_message(&mut self, text: &str, kind: MessageKind) -> MessageId {
        self.last_message_id += 1;
        let id = MessageId(self.last_message_id);
        self.message = Some(Message {
            id,
            text: text.to_string(),
            kind,
        });
        id
    }

    fn max_input_len(&self) -> usize {
        self.round.as_ref().map_or(0, |r| r.entry.len())
    }

    #[must_use]
    pub fn current_round_id(&self) -> Option<RoundId> {
        self.round.as_ref().map(|r| r.id)
    }

    #[must_use]
    pub const fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    /// Plain copy of the state for rendering
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let round = self.round.as_ref();
        Snapshot {
            round: round.map(|r| r.id),
            scrambled: round.map(|r| r.scrambled.clone()).unwrap_or_default(),
            hint: round.map(|r| r.entry.hint().to_string()).unwrap_or_default(),
            tier: round.map(|r| r.tier),
            remaining_seconds: round.map_or(0, |r| r.remaining_seconds),
            round_seconds: self.config.round_seconds.get(),
            score: self.score.value(),
            praise: self.praise,
            message: self.message.clone(),
            status: round.map(|r| r.status),
            input: self.input.clone(),
            input_visible: self.input_visible,
            max_input_len: self.max_input_len(),
            revealed_word: round
                .filter(|r| r.revealed)
                .map(|r| r.entry.word().to_string()),
        }
    }
}
