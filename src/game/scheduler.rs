//! Deferred action queue
//!
//! The controller never sleeps or spawns timers. It returns `Effect`s, and
//! the host pushes them here. Time is a `Duration` since the session began,
//! so the same queue runs against the wall clock in the TUI and against
//! virtual time in tests.

use super::timer::TimerHandle;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

/// Identifies one round; bumped on every round start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(pub u64);

/// Identifies one message shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub u64);

/// Work the controller wants done later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// One-second timer tick for a specific timer run
    Tick(TimerHandle),
    /// Start the next round, if `RoundId` is still current
    AdvanceRound(RoundId),
    /// Clear a transient message, if it is still shown
    ClearMessage(MessageId),
    /// Put the numeric score back in place of the praise word
    EndCelebration(RoundId),
}

/// Request to run `action` after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub delay: Duration,
    pub action: Deferred,
}

impl Effect {
    #[must_use]
    pub const fn after(delay: Duration, action: Deferred) -> Self {
        Self { delay, action }
    }
}

#[derive(Debug)]
struct Pending {
    due: Duration,
    seq: u64,
    action: Deferred,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earlier due first, FIFO among equal deadlines
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-heap of deferred actions keyed by due time
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Reverse<Pending>>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler time
    #[inline]
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queue an effect relative to the current time
    pub fn schedule(&mut self, effect: Effect) {
        self.seq += 1;
        self.queue.push(Reverse(Pending {
            due: self.now + effect.delay,
            seq: self.seq,
            action: effect.action,
        }));
    }

    pub fn schedule_all(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.schedule(effect);
        }
    }

    /// Deadline of the earliest pending action
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(p)| p.due)
    }

    /// Pop the earliest action due at or before `until`
    ///
    /// Scheduler time moves to that action's deadline, so effects produced
    /// while handling it are queued relative to when it was due.
    pub fn pop_due(&mut self, until: Duration) -> Option<Deferred> {
        if self.next_due()? > until {
            return None;
        }
        let Reverse(pending) = self.queue.pop()?;
        self.now = self.now.max(pending.due);
        Some(pending.action)
    }

    /// Move scheduler time forward without running anything
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Drop every pending action
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
