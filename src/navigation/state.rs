//! Navigation state - active index and playback mode.
//!
//! ## Invariants
//!
//! - `active_index` is `Some(i)` with `i < len` whenever `len > 0`
//! - `active_index` is `None` whenever `len == 0`
//! - `mode` only ever moves `Autoplaying -> Manual`

use crate::types::{Direction, PlaybackMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active_index: Option<usize>,
    len: usize,
    mode: PlaybackMode,
}

impl NavigationState {
    pub fn new(len: usize, mode: PlaybackMode) -> Self {
        Self {
            active_index: (len > 0).then_some(0),
            len,
            mode,
        }
    }

    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    #[inline]
    pub fn autoplay_enabled(&self) -> bool {
        self.mode.is_autoplaying()
    }

    /// Index one step away from `from`, wrapping at both ends.
    #[inline]
    pub fn step_index(from: usize, direction: Direction, len: usize) -> usize {
        debug_assert!(len > 0 && from < len);
        let len = len as isize;
        (from as isize + direction.step()).rem_euclid(len) as usize
    }

    /// Move one step. Returns the new active index, or `None` when empty.
    pub fn advance(&mut self, direction: Direction) -> Option<usize> {
        let current = self.active_index?;
        let next = Self::step_index(current, direction, self.len);
        self.active_index = Some(next);
        Some(next)
    }

    /// Select `index` directly. Out-of-range requests are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active_index = Some(index);
        true
    }

    /// Re-derive the window for a sequence of `len` items.
    ///
    /// `preferred` is the index the caller wants centered (e.g. the previous
    /// active item at its new position). It is clamped to `len - 1`; without a
    /// preference the current index is clamped instead. An empty sequence
    /// clears the index and a previously empty one starts at 0.
    pub fn resize(&mut self, len: usize, preferred: Option<usize>) {
        self.len = len;
        self.active_index = match (len, self.active_index) {
            (0, _) => None,
            (_, None) => Some(preferred.unwrap_or(0).min(len - 1)),
            (_, Some(current)) => Some(preferred.unwrap_or(current).min(len - 1)),
        };
    }

    /// Enter manual mode. Returns true if this call made the transition.
    pub fn disable_autoplay(&mut self) -> bool {
        let was_autoplaying = self.mode.is_autoplaying();
        self.mode = PlaybackMode::Manual;
        was_autoplaying
    }
}
