//! Carousel engine - navigation commands plus the autoplay policy.

use super::autoplay::{AutoplayTimer, TickToken};
use super::clock::{Clock, SystemClock};
use super::state::NavigationState;
use crate::settings::CarouselSettings;
use crate::types::{Direction, PlaybackMode};
use tracing::{debug, info};

/// Result of handing a tick token back to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick was current and moved the active index
    Advanced(usize),
    /// The token was superseded or cancelled before it fired
    Stale,
    /// Autoplay is off or there is nothing to show
    Suspended,
}

/// Owns the navigation state and the one autoplay timer.
///
/// All commands are synchronous and never fail. Degenerate requests (empty
/// sequence, out-of-range index, stale tick) are ignored.
#[derive(Debug)]
pub struct CarouselEngine<C: Clock = SystemClock> {
    state: NavigationState,
    timer: AutoplayTimer,
    clock: C,
}

impl CarouselEngine<SystemClock> {
    pub fn new(len: usize, settings: &CarouselSettings) -> Self {
        Self::with_clock(len, settings, SystemClock)
    }
}

impl<C: Clock> CarouselEngine<C> {
    pub fn with_clock(len: usize, settings: &CarouselSettings, clock: C) -> Self {
        let mode = if settings.autoplay {
            PlaybackMode::Autoplaying
        } else {
            PlaybackMode::Manual
        };
        let mut engine = Self {
            state: NavigationState::new(len, mode),
            timer: AutoplayTimer::new(settings.autoplay_interval()),
            clock,
        };
        engine.rearm();
        engine
    }

    #[inline]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    #[inline]
    pub fn mode(&self) -> PlaybackMode {
        self.state.mode()
    }

    #[inline]
    pub fn autoplay_enabled(&self) -> bool {
        self.state.autoplay_enabled()
    }

    /// The tick currently scheduled, if any.
    #[inline]
    pub fn pending_tick(&self) -> Option<TickToken> {
        self.timer.pending()
    }

    /// Step one card forward or backward with wraparound. No-op when empty.
    pub fn advance(&mut self, direction: Direction) {
        if let Some(index) = self.state.advance(direction) {
            debug!(?direction, index, "Carousel advanced");
            self.rearm();
        }
    }

    /// Center `index`. Returns false (and changes nothing) if out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if !self.state.jump_to(index) {
            debug!(index, len = self.state.len(), "Ignoring out-of-range jump");
            return false;
        }
        debug!(index, "Carousel jumped");
        self.rearm();
        true
    }

    /// Turn autoplay off, or back on while still in the initial mode.
    ///
    /// Disabling is irreversible: once the engine is `Manual`, enabling is
    /// ignored for the rest of the session.
    pub fn set_autoplay(&mut self, enabled: bool) {
        if enabled {
            if self.state.autoplay_enabled() {
                if !self.timer.is_armed() {
                    self.rearm();
                }
            } else {
                debug!("Autoplay stays off after manual interaction");
            }
            return;
        }

        if self.state.disable_autoplay() {
            info!(mode = %self.state.mode(), "Autoplay disabled");
        }
        self.timer.cancel();
    }

    /// Re-derive the window after the sequence changed length.
    ///
    /// Shrinking past the active card clamps it to the last item. Emptying
    /// the sequence clears the index and cancels the timer; refilling it
    /// starts at the first card and re-arms autoplay.
    pub fn sync_len(&mut self, len: usize) {
        self.retarget(len, None);
    }

    /// Like `sync_len`, but centers `preferred` when given (clamped).
    pub fn retarget(&mut self, len: usize, preferred: Option<usize>) {
        let before = (self.state.len(), self.state.active_index());
        self.state.resize(len, preferred);
        let after = (self.state.len(), self.state.active_index());
        if before == after {
            return;
        }
        debug!(
            len,
            active = ?self.state.active_index(),
            "Carousel sequence changed"
        );
        self.rearm();
    }

    /// Pick up reloaded settings.
    ///
    /// `autoplay: false` switches to manual mode for good; `autoplay: true`
    /// never re-enables it.
    pub fn apply_settings(&mut self, settings: &CarouselSettings) {
        if !settings.autoplay {
            self.set_autoplay(false);
        }
        let period = settings.autoplay_interval();
        if self.timer.period() == period.max(AutoplayTimer::MIN_PERIOD) {
            return;
        }
        self.timer.set_period(period);
        if self.timer.is_armed() {
            self.rearm();
        }
    }

    /// Hand back a fired tick.
    ///
    /// Only the currently scheduled token advances the carousel; the check
    /// happens here, at fire time, so a callback that outlived a cancel is
    /// harmless.
    pub fn on_tick(&mut self, token: TickToken) -> TickOutcome {
        if !self.timer.is_current(&token) {
            return TickOutcome::Stale;
        }
        if !self.state.autoplay_enabled() || self.state.is_empty() {
            self.timer.cancel();
            return TickOutcome::Suspended;
        }
        match self.state.advance(Direction::Forward) {
            Some(index) => {
                debug!(index, "Autoplay tick");
                self.rearm();
                TickOutcome::Advanced(index)
            }
            None => TickOutcome::Suspended,
        }
    }

    /// Fire the pending tick if it is due. Returns the new index if it advanced.
    pub fn poll(&mut self) -> Option<usize> {
        if !self.timer.is_due(self.clock.now()) {
            return None;
        }
        let token = self.timer.pending()?;
        match self.on_tick(token) {
            TickOutcome::Advanced(index) => Some(index),
            TickOutcome::Stale | TickOutcome::Suspended => None,
        }
    }

    /// Cancel the timer for good. Called when the carousel is unmounted.
    pub fn teardown(&mut self) {
        if self.timer.cancel() {
            debug!("Autoplay timer cancelled on teardown");
        }
    }

    /// Restart the period from now, or cancel if autoplay cannot run.
    fn rearm(&mut self) {
        if self.state.autoplay_enabled() && !self.state.is_empty() {
            self.timer.arm(self.clock.now());
        } else {
            self.timer.cancel();
        }
    }
}
