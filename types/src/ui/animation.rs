//! Frame-driven timers.
//!
//! Timers hold no clock of their own: owners feed them elapsed frame time via
//! `advance`, which keeps them deterministic under test. Dropping a timer is
//! cancelling it.

use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Repeating timer that fires once per elapsed `period`.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    elapsed: Duration,
    period: Duration,
}

impl IntervalTimer {
    /// A zero period is clamped to 1ms so the timer always makes progress.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            period: period.max(MIN_PERIOD),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Consume one due firing.
    ///
    /// Returns the time that has already passed since that firing, so callers
    /// can hand the remainder to whatever the firing starts.
    pub fn fire(&mut self) -> Option<Duration> {
        if self.elapsed >= self.period {
            self.elapsed -= self.period;
            Some(self.elapsed)
        } else {
            None
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next firing.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }
}

/// One-shot timer.
#[derive(Debug, Clone)]
pub struct DelayTimer {
    elapsed: Duration,
    delay: Duration,
}

impl DelayTimer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            delay,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn is_due(&self) -> bool {
        self.elapsed >= self.delay
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.delay.saturating_sub(self.elapsed)
    }
}
