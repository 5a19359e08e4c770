//! Core vocabulary shared by the engine, projector and input adapter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed step applied to the active index.
    #[inline]
    pub fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Playback state machine.
///
/// ```text
/// Autoplaying -> Manual   (any user interaction; irreversible)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    /// Timer advances the active index every period
    #[default]
    Autoplaying,
    /// The user took over; autoplay stays off for the rest of the session
    Manual,
}

impl PlaybackMode {
    pub fn is_autoplaying(self) -> bool {
        matches!(self, Self::Autoplaying)
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Autoplaying => f.write_str("autoplaying"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

/// An opaque display record with a stable identity key.
///
/// The engine never looks at the content of an item. The key is only used to
/// keep the same card centered when the upstream sequence is reordered.
pub trait CarouselItem {
    type Key: Eq + Clone + fmt::Debug;

    fn key(&self) -> Self::Key;
}
