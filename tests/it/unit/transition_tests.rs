//! Unit tests for slot transitions.

use crate::helpers::{assert_close, carousel};
use pathway_carousel::layout::{VisualSlot, project_all, slot_for_offset};
use pathway_carousel::transition::{SlotTransition, StageTransition};
use std::time::{Duration, Instant};

/// Projection keyed by position, for stages whose items never move.
fn by_index(active: usize, len: usize) -> Vec<(usize, VisualSlot)> {
    project_all(active, len).into_iter().enumerate().collect()
}

#[test]
fn test_finished_transition_equals_target() {
    let start = Instant::now();
    let transition = SlotTransition::new(
        slot_for_offset(0),
        slot_for_offset(1),
        start,
        Duration::from_millis(500),
    );

    assert!(transition.is_finished(start + Duration::from_millis(500)));
    assert_eq!(transition.sample(start + Duration::from_secs(3)), slot_for_offset(1));
}

#[test]
fn test_midway_sample_is_eased() {
    let start = Instant::now();
    let transition = SlotTransition::new(
        slot_for_offset(0),
        slot_for_offset(1),
        start,
        Duration::from_millis(1000),
    );

    let mid = transition.sample(start + Duration::from_millis(500));
    // ease-out cubic at 0.5 = 0.875
    assert_close(mid.scale, 1.0 - 0.2 * 0.875);
    assert_close(mid.translate_x_percent, 60.0 * 0.875);
    assert_eq!(mid.z_index, 49);
    assert!(mid.visible);
}

#[test]
fn test_fade_out_stays_visible_until_done() {
    let start = Instant::now();
    let transition = SlotTransition::new(
        slot_for_offset(2),
        slot_for_offset(3),
        start,
        Duration::from_millis(400),
    );

    assert!(transition.sample(start + Duration::from_millis(100)).visible);
    assert!(!transition.sample(start + Duration::from_millis(400)).visible);
}

#[test]
fn test_stage_settles_on_projection() {
    let start = Instant::now();
    let mut stage = StageTransition::new(Duration::from_millis(500));
    stage.retarget(by_index(0, 6), start);
    assert!(!stage.is_animating(start));

    stage.retarget(by_index(1, 6), start);
    assert!(stage.is_animating(start + Duration::from_millis(100)));
    assert_eq!(stage.sample(start + Duration::from_millis(500)), project_all(1, 6));
}

#[test]
fn test_retarget_mid_flight_continues_from_current() {
    let start = Instant::now();
    let mut stage = StageTransition::new(Duration::from_millis(1000));
    stage.retarget(by_index(0, 5), start);
    stage.retarget(by_index(1, 5), start);

    let mid = start + Duration::from_millis(500);
    let current = stage.sample(mid);
    stage.retarget(by_index(2, 5), mid);

    // No jump at the moment of retargeting
    let after = stage.sample(mid);
    for (a, b) in current.iter().zip(&after) {
        assert_close(a.scale, b.scale);
        assert_close(a.translate_x_percent, b.translate_x_percent);
    }
    assert_eq!(stage.sample(mid + Duration::from_millis(1000)), project_all(2, 5));
}

#[test]
fn test_new_items_land_and_removed_items_drop() {
    let start = Instant::now();
    let mut stage = StageTransition::new(Duration::from_millis(500));
    stage.retarget(by_index(0, 5), start);

    let targets = vec![
        (0, slot_for_offset(0)),
        (1, slot_for_offset(1)),
        (10, slot_for_offset(-1)),
    ];
    stage.retarget(targets, start);

    assert_eq!(stage.len(), 3);
    assert!(!stage.is_animating(start));
    assert_eq!(stage.sample(start)[2], slot_for_offset(-1));
}

#[test]
fn test_reorder_keeps_centered_card_still() {
    let start = Instant::now();
    let (mut carousel, _clock) = carousel(5);
    let mut stage = StageTransition::new(Duration::from_millis(500));
    stage.retarget(carousel.keyed_slots(), start);

    let mut reversed = carousel.items().to_vec();
    reversed.reverse();
    carousel.replace_items(reversed);
    stage.retarget(carousel.keyed_slots(), start);

    let active = carousel.active_index().expect("non-empty");
    assert_eq!(active, 4);
    assert_eq!(carousel.items()[active].title, "path-0");
    let sampled = stage.sample(start + Duration::from_millis(100));
    assert_eq!(sampled[active], slot_for_offset(0));
    assert_eq!(stage.sample(start + Duration::from_millis(500)), carousel.slots());
}

#[test]
fn test_card_leaving_window_is_not_interactive() {
    let start = Instant::now();
    let mut stage = StageTransition::new(Duration::from_millis(500));
    stage.retarget(by_index(0, 6), start);
    assert!(stage.is_interactive(4));

    // Item 4 goes from offset -2 to 3
    stage.retarget(by_index(1, 6), start);
    let mid = start + Duration::from_millis(100);
    assert!(stage.sample(mid)[4].visible);
    assert!(!stage.is_interactive(4));
    assert!(stage.is_interactive(3));
    assert!(!stage.is_interactive(6));
}
