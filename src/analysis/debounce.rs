//! Rate limiting for analysis attempts.
//!
//! Accessibility events fire many times per second and OCR is expensive.
//! The debouncer drops whole analysis attempts before they start; a
//! suppressed attempt means "no update this tick", never an error.

use std::time::{Duration, Instant};

/// Stateful gate holding only the timestamp of the last accepted run.
#[derive(Debug)]
pub struct Debouncer {
    min_interval: Duration,
    last_run: Option<Instant>,
}

impl Debouncer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_run: None,
        }
    }

    /// Returns true and records the timestamp when enough time has passed
    /// since the last accepted run. The first call always passes.
    pub fn should_run(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_run {
            if now.duration_since(last) < self.min_interval {
                return false;
            }
        }
        self.last_run = Some(now);
        true
    }

    /// Convenience wrapper over [`Self::should_run`] for callers without
    /// an injected clock.
    pub fn tick(&mut self) -> bool {
        self.should_run(Instant::now())
    }

    /// Forget the last run so the next attempt passes immediately.
    pub fn reset(&mut self) {
        self.last_run = None;
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
