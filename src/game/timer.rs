//! Round countdown timer
//!
//! The timer does not own a clock. The host delivers ticks through the
//! scheduler, each carrying the `TimerHandle` returned by `start`. Restarting
//! or stopping bumps the generation so older handles become stale.

use std::num::NonZeroU32;

/// Lifecycle state of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Expired,
}

/// Identifies one run of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Result of delivering one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Count went down and the timer is still running
    Ticked(u32),
    /// Count reached zero on this tick
    Expired,
    /// Stale handle, or the timer is not running
    Inactive,
}

/// One-second countdown with at most one live run
#[derive(Debug, Default)]
pub struct RoundTimer {
    state: TimerState,
    remaining: u32,
    generation: u64,
}

impl RoundTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown
    ///
    /// Any handle from an earlier run stops working.
    pub fn start(&mut self, seconds: NonZeroU32) -> TimerHandle {
        self.generation += 1;
        self.remaining = seconds.get();
        self.state = TimerState::Running;
        TimerHandle(self.generation)
    }

    /// Cancel pending ticks and go back to idle
    pub fn stop(&mut self) {
        self.generation += 1;
        self.state = TimerState::Idle;
    }

    /// Deliver one tick for the run identified by `handle`
    pub fn tick(&mut self, handle: TimerHandle) -> TickOutcome {
        if handle.0 != self.generation || self.state != TimerState::Running {
            return TickOutcome::Inactive;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = TimerState::Expired;
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked(self.remaining)
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether `handle` belongs to the current running countdown
    #[must_use]
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        handle.0 == self.generation && self.state == TimerState::Running
    }
}
