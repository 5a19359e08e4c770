//! Input normalization.

use crate::navigation::{CarouselEngine, Clock};
use crate::types::Direction;

/// Directional key as seen by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    /// Any key the carousel does not react to
    Other,
}

impl NavKey {
    /// Parse a platform key name (`left`, `ArrowLeft`, ...).
    pub fn from_key_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "left" | "arrowleft" => Self::Left,
            "right" | "arrowright" => Self::Right,
            _ => Self::Other,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Left => Some(Direction::Backward),
            Self::Right => Some(Direction::Forward),
            Self::Other => None,
        }
    }
}

/// A user-originated carousel input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselInput {
    /// "Previous" control
    Previous,
    /// "Next" control
    Next,
    /// Click on a card
    SelectCard(usize),
    /// Click on a pagination dot
    SelectIndicator(usize),
    /// Key press while mounted
    Key(NavKey),
}

impl CarouselInput {
    /// True if this input counts as the user taking over.
    pub fn is_interaction(&self) -> bool {
        !matches!(self, Self::Key(NavKey::Other))
    }
}

/// Apply `input` to `engine`.
///
/// Autoplay is switched off before navigating, so a pending tick can never
/// land on top of the user's choice. Returns false for ignored keys.
pub fn apply_input<C: Clock>(engine: &mut CarouselEngine<C>, input: CarouselInput) -> bool {
    if !input.is_interaction() {
        return false;
    }
    engine.set_autoplay(false);

    match input {
        CarouselInput::Previous => engine.advance(Direction::Backward),
        CarouselInput::Next => engine.advance(Direction::Forward),
        CarouselInput::SelectCard(index) | CarouselInput::SelectIndicator(index) => {
            engine.jump_to(index);
        }
        CarouselInput::Key(key) => {
            if let Some(direction) = key.direction() {
                engine.advance(direction);
            }
        }
    }
    true
}
