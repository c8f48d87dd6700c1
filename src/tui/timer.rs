//! Countdown tick source.
//!
//! A [`CountdownTimer`] is a pure interval: while armed, `poll()` reports
//! one tick per elapsed period. It keeps no seconds-remaining value of its
//! own, that state belongs to the detail panel that owns the timer. Arming
//! restarts the interval phase, so a fresh full period always precedes the
//! first tick, and a disarmed timer never reports anything.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct CountdownTimer {
    period: Duration,
    /// Start of the current period while armed.
    phase: Option<Instant>,
}

impl CountdownTimer {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period, phase: None }
    }

    /// Start (or restart) the interval from now.
    pub fn arm(&mut self) {
        self.phase = Some(Instant::now());
    }

    /// Cancel the interval. Pending time is forgotten.
    pub fn disarm(&mut self) {
        self.phase = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.phase.is_some()
    }

    /// Report whether a full period has elapsed, advancing to the next one.
    ///
    /// At most one tick is reported per call. If the event loop stalls for
    /// several periods the missed ticks collapse into one, which keeps the
    /// countdown from skipping numbers on a slow redraw.
    pub fn poll(&mut self) -> bool {
        match self.phase {
            Some(start) if start.elapsed() >= self.period => {
                self.phase = Some(Instant::now());
                true
            }
            _ => false,
        }
    }
}
