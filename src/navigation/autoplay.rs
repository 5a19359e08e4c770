//! Autoplay timer bookkeeping.
//!
//! The timer does not sleep or spawn anything itself. It records the single
//! pending tick as a `TickToken`; the host waits until `due` and hands the
//! token back. Every arm or cancel bumps the generation, so a token that was
//! in flight across a cancel is recognised as stale and never applied.

use std::time::{Duration, Instant};

/// Handle to one scheduled autoplay tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken {
    generation: u64,
    due: Instant,
}

impl TickToken {
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn due(&self) -> Instant {
        self.due
    }

    /// Time left until the tick is due, zero if already due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}

#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    period: Duration,
    generation: u64,
    pending: Option<TickToken>,
}

impl AutoplayTimer {
    /// Shortest accepted period. A zero period would fire on every poll.
    pub const MIN_PERIOD: Duration = Duration::from_millis(1);

    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Self::MIN_PERIOD),
            generation: 0,
            pending: None,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn set_period(&mut self, period: Duration) {
        self.period = period.max(Self::MIN_PERIOD);
    }

    /// Schedule the next tick one period after `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant) -> TickToken {
        self.generation += 1;
        let token = TickToken {
            generation: self.generation,
            due: now + self.period,
        };
        self.pending = Some(token);
        token
    }

    /// Drop the pending tick. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        self.pending.take().is_some()
    }

    #[inline]
    pub fn pending(&self) -> Option<TickToken> {
        self.pending
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// True if `token` is the tick currently scheduled.
    pub fn is_current(&self, token: &TickToken) -> bool {
        self.pending.as_ref() == Some(token)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.pending.is_some_and(|t| now >= t.due)
    }
}
