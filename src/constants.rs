//! Carousel-wide constants.
//!
//! Centralizes magic numbers for timing and stage geometry so the projector,
//! the engine and the view agree on a single set of values.

// ============================================================================
// Animation & Timing
// ============================================================================

/// Default autoplay period in milliseconds
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Default duration of the slot transition between active indices
pub const DEFAULT_TRANSITION_MS: u64 = 500;

// ============================================================================
// Stage Geometry
// ============================================================================

/// Largest |offset| that is laid out. Five cards (active ± 2) regardless of N.
pub const MAX_VISIBLE_OFFSET: isize = 2;

/// Offset at which hidden cards are parked, just behind the outermost visible slot
pub const PARKED_OFFSET: isize = MAX_VISIBLE_OFFSET + 1;

/// Scale lost per step away from the active card
pub const SCALE_STEP: f32 = 0.2;

/// Horizontal translation per step, as a percentage of card width
pub const TRANSLATE_STEP_PERCENT: f32 = 60.0;

/// Y-axis rotation applied to every side card
pub const SIDE_ROTATION_DEGREES: f32 = 45.0;

/// z-index of the active card; neighbors sit one level lower per step
pub const BASE_Z_INDEX: i32 = 50;

/// Opacity of visible side cards
pub const SIDE_OPACITY: f32 = 0.5;

// ============================================================================
// View (gui feature)
// ============================================================================

/// Card width in pixels for the gpui stage
pub const CARD_WIDTH: f32 = 320.0;

/// Card height in pixels for the gpui stage
pub const CARD_HEIGHT: f32 = 220.0;

/// Stage height in pixels
pub const STAGE_HEIGHT: f32 = 300.0;

/// Diameter of a pagination dot
pub const INDICATOR_SIZE: f32 = 8.0;
