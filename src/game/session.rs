//! Controller plus scheduler, driven by a caller-supplied clock
//!
//! `Session` is what the host loop talks to. It feeds controller effects into
//! the scheduler and runs whatever falls due when time advances.

use super::controller::{GuessOutcome, RoundController, Snapshot};
use super::scheduler::Scheduler;
use crate::catalog::CatalogError;
use std::time::Duration;

/// A running game: rounds plus their pending deferred actions
pub struct Session {
    controller: RoundController,
    scheduler: Scheduler,
}

impl Session {
    #[must_use]
    pub fn new(controller: RoundController) -> Self {
        Self {
            controller,
            scheduler: Scheduler::new(),
        }
    }

    /// Start a new round; also used for manual refresh
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if the catalog has no entries.
    pub fn start_round(&mut self) -> Result<(), CatalogError> {
        let effects = self.controller.start_round()?;
        self.scheduler.schedule_all(effects);
        Ok(())
    }

    /// Check a guess and queue its follow-up actions
    pub fn submit_guess(&mut self, text: &str) -> GuessOutcome {
        let (outcome, effects) = self.controller.submit_guess(text);
        self.scheduler.schedule_all(effects);
        outcome
    }

    /// Check the controller's input buffer
    pub fn submit_input(&mut self) -> GuessOutcome {
        let (outcome, effects) = self.controller.submit_input();
        self.scheduler.schedule_all(effects);
        outcome
    }

    /// Run every action due at or before `now`, in order
    ///
    /// # Errors
    ///
    /// Propagates `CatalogError` from a round advance.
    pub fn advance(&mut self, now: Duration) -> Result<(), CatalogError> {
        while let Some(action) = self.scheduler.pop_due(now) {
            let effects = self.controller.apply(action)?;
            self.scheduler.schedule_all(effects);
        }
        self.scheduler.advance_to(now);
        Ok(())
    }

    /// When the next deferred action is due
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    #[must_use]
    pub const fn controller(&self) -> &RoundController {
        &self.controller
    }

    pub const fn controller_mut(&mut self) -> &mut RoundController {
        &mut self.controller
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WordCatalog;
    use crate::catalog::loader::entries_from_slice;
    use crate::game::{GameConfig, RoundStatus};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session {
        Session::new(RoundController::new(
            WordCatalog::new(entries_from_slice(&[("cat", "pet")])),
            GameConfig::default(),
            StdRng::seed_from_u64(1),
        ))
    }

    fn secs(n: f64) -> Duration {
        Duration::from_secs_f64(n)
    }

    #[test]
    fn ticks_follow_the_clock() {
        let mut session = session();
        session.start_round().unwrap();
        session.advance(secs(2.5)).unwrap();

        assert_eq!(session.snapshot().remaining_seconds, 28);
        assert_eq!(session.next_due(), Some(secs(3.0)));
    }

    #[test]
    fn correct_guess_advances_after_delay() {
        let mut session = session();
        session.start_round().unwrap();
        session.advance(secs(2.0)).unwrap();

        assert_eq!(session.submit_guess("cat"), GuessOutcome::Correct);
        assert_eq!(session.snapshot().score, 20);

        session.advance(secs(3.9)).unwrap();
        assert_eq!(session.snapshot().status, Some(RoundStatus::Correct));

        session.advance(secs(4.0)).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, Some(RoundStatus::Active));
        assert_eq!(snapshot.remaining_seconds, 30);
    }

    #[test]
    fn timeout_then_next_round() {
        let mut session = session();
        session.start_round().unwrap();
        session.advance(secs(30.0)).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, Some(RoundStatus::TimedOut));
        assert_eq!(snapshot.score, 0);

        session.advance(secs(31.5)).unwrap();
        assert_eq!(session.snapshot().status, Some(RoundStatus::Active));
    }

    #[test]
    fn empty_catalog_surfaces_error() {
        let mut session = Session::new(RoundController::new(
            WordCatalog::default(),
            GameConfig::default(),
            StdRng::seed_from_u64(1),
        ));
        assert!(matches!(session.start_round(), Err(CatalogError::Empty)));
    }
}
