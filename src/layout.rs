//! Layout projector - circular position to visual transform.
//!
//! Pure functions of `(index, active, len)`. Nothing here is stored between
//! renders; the stage is recomputed from the engine's active index each time.
//!
//! ```text
//! offset   -2    -1     0    +1    +2   |offset| > 2
//! scale    0.6   0.8   1.0   0.8   0.6   hidden
//! x %     -120   -60    0    60    120
//! rotY     45    45     0   -45   -45
//! z        48    49    50    49    48
//! opacity  0.5   0.5   1.0   0.5   0.5   0.0
//! ```

use crate::constants::{
    BASE_Z_INDEX, MAX_VISIBLE_OFFSET, PARKED_OFFSET, SCALE_STEP, SIDE_OPACITY,
    SIDE_ROTATION_DEGREES, TRANSLATE_STEP_PERCENT,
};
use serde::Serialize;

/// Derived transform for one card at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualSlot {
    /// Shortest signed circular distance from the active card
    pub offset: isize,
    pub scale: f32,
    pub translate_x_percent: f32,
    pub rotate_y_degrees: f32,
    pub z_index: i32,
    pub opacity: f32,
    /// Laid out and interactive
    pub visible: bool,
}

/// One pagination dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Shortest signed distance from `active` to `index` on a ring of `len`.
///
/// The result lies in `(-len/2, len/2]`; on even rings the item exactly
/// opposite the active one is reported on the positive side.
pub fn circular_offset(index: usize, active: usize, len: usize) -> isize {
    debug_assert!(len > 0 && index < len && active < len);
    let len = len as isize;
    let mut offset = index as isize - active as isize;
    if 2 * offset > len {
        offset -= len;
    } else if 2 * offset <= -len {
        offset += len;
    }
    offset
}

/// Transform for a card at `offset` from the active card.
pub fn slot_for_offset(offset: isize) -> VisualSlot {
    let distance = offset.unsigned_abs() as isize;
    if distance > MAX_VISIBLE_OFFSET {
        // Parked just outside the window so fades don't sweep across the stage
        let parked = offset.signum() * PARKED_OFFSET;
        return VisualSlot {
            offset,
            visible: false,
            opacity: 0.0,
            z_index: 0,
            ..geometry(parked)
        };
    }
    geometry(offset)
}

fn geometry(offset: isize) -> VisualSlot {
    let distance = offset.unsigned_abs() as isize;
    VisualSlot {
        offset,
        scale: 1.0 - distance as f32 * SCALE_STEP,
        translate_x_percent: offset as f32 * TRANSLATE_STEP_PERCENT,
        rotate_y_degrees: -(offset.signum() as f32) * SIDE_ROTATION_DEGREES,
        z_index: BASE_Z_INDEX - distance as i32,
        opacity: if offset == 0 { 1.0 } else { SIDE_OPACITY },
        visible: true,
    }
}

/// Project a single card.
pub fn project(index: usize, active: usize, len: usize) -> VisualSlot {
    slot_for_offset(circular_offset(index, active, len))
}

/// Project every card on the ring. Empty when `len == 0`.
pub fn project_all(active: usize, len: usize) -> Vec<VisualSlot> {
    (0..len).map(|index| project(index, active, len)).collect()
}

/// Pagination dots for a ring of `len` with `active` highlighted.
pub fn indicators(active: Option<usize>, len: usize) -> Vec<Indicator> {
    (0..len)
        .map(|index| Indicator {
            index,
            active: active == Some(index),
        })
        .collect()
}

/// Card indices back-to-front, the order a painter without z-buffer needs.
pub fn paint_order(slots: &[VisualSlot]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..slots.len()).filter(|&i| slots[i].visible).collect();
    order.sort_by_key(|&i| slots[i].z_index);
    order
}
