//! Cancellable periodic tick scheduler for real-time games.
//!
//! The main loop owns one scheduler and asks it whether a tick is due. After
//! each tick the loop calls [`TickScheduler::sync`] with the game's current
//! interval, which re-arms, resets, or cancels the schedule as needed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickScheduler {
    interval: Option<Duration>,
    next_due: Option<Instant>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the next tick `interval` after `now`.
    pub fn arm(&mut self, interval: Duration, now: Instant) {
        self.interval = Some(interval);
        self.next_due = Some(now + interval);
    }

    pub fn cancel(&mut self) {
        self.interval = None;
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Time left before the next tick, zero if overdue. `None` when cancelled.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Bring the schedule in line with the game after a transition.
    ///
    /// A game that is not running cancels the schedule. A running game re-arms
    /// from `now`, picking up any change to the interval.
    pub fn sync(&mut self, interval: Duration, running: bool, now: Instant) {
        if running {
            self.arm(interval, now);
        } else {
            self.cancel();
        }
    }

    /// Like [`sync`](Self::sync) but leaves an armed schedule alone when the
    /// interval is unchanged. Used after input events, which must not push
    /// the next tick back.
    pub fn sync_if_changed(&mut self, interval: Duration, running: bool, now: Instant) {
        if !running {
            self.cancel();
        } else if !self.is_armed() || self.interval != Some(interval) {
            self.arm(interval, now);
        }
    }
}
