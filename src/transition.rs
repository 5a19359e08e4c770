//! Slot transitions - smooth motion between successive projections.
//!
//! A transition only interpolates between two projector outputs. Once it
//! finishes, the sampled slot is the target projection itself, so the stage
//! can never drift from what `layout::project` would compute.

use crate::layout::VisualSlot;
use std::time::{Duration, Instant};

/// Ease-out cubic: fast start, gentle landing.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTransition {
    from: VisualSlot,
    to: VisualSlot,
    started: Instant,
    duration: Duration,
}

impl SlotTransition {
    pub fn new(from: VisualSlot, to: VisualSlot, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// A transition that has already landed on `slot`.
    pub fn settled(slot: VisualSlot, now: Instant) -> Self {
        Self::new(slot, slot, now, Duration::ZERO)
    }

    #[inline]
    pub fn target(&self) -> &VisualSlot {
        &self.to
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn sample(&self, now: Instant) -> VisualSlot {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        let t = ease_out_cubic(progress);
        let (from, to) = (&self.from, &self.to);
        VisualSlot {
            offset: to.offset,
            scale: lerp(from.scale, to.scale, t),
            translate_x_percent: lerp(from.translate_x_percent, to.translate_x_percent, t),
            rotate_y_degrees: lerp(from.rotate_y_degrees, to.rotate_y_degrees, t),
            z_index: if t < 0.5 { from.z_index } else { to.z_index },
            opacity: lerp(from.opacity, to.opacity, t),
            visible: from.visible || to.visible,
        }
    }
}

/// Per-card transitions for the whole stage, keyed by item identity.
///
/// Keys let a card keep its motion when the upstream sequence is reordered
/// or shrunk; positions alone would hand one card's geometry to another.
#[derive(Debug, Clone)]
pub struct StageTransition<K> {
    slots: Vec<(K, SlotTransition)>,
    duration: Duration,
}

impl<K: PartialEq> StageTransition<K> {
    pub fn new(duration: Duration) -> Self {
        Self {
            slots: Vec::new(),
            duration,
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Start moving towards `targets`, given in sequence order.
    ///
    /// A card already on stage continues from where it is now. A card the
    /// stage has not seen lands on its target immediately. Cards missing from
    /// `targets` are dropped.
    pub fn retarget(&mut self, targets: impl IntoIterator<Item = (K, VisualSlot)>, now: Instant) {
        let duration = self.duration;
        let previous = std::mem::take(&mut self.slots);
        self.slots = targets
            .into_iter()
            .map(|(key, target)| {
                let transition = match previous.iter().find(|(k, _)| *k == key) {
                    Some((_, t)) if *t.target() == target => *t,
                    Some((_, t)) => SlotTransition::new(t.sample(now), target, now, duration),
                    None => SlotTransition::settled(target, now),
                };
                (key, transition)
            })
            .collect();
    }

    /// Sampled slots in sequence order.
    pub fn sample(&self, now: Instant) -> Vec<VisualSlot> {
        self.slots.iter().map(|(_, t)| t.sample(now)).collect()
    }

    /// Whether the card at `index` accepts clicks.
    ///
    /// Decided by where the card is heading, so a card fading out of the
    /// window is already inert.
    pub fn is_interactive(&self, index: usize) -> bool {
        self.slots
            .get(index)
            .is_some_and(|(_, t)| t.target().visible)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.slots.iter().any(|(_, t)| !t.is_finished(now))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
