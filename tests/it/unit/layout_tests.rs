//! Unit tests for the layout projector.

use pathway_carousel::layout::{circular_offset, indicators, project, project_all};

#[test]
fn test_offset_is_shortest_congruent_distance() {
    for len in 1..=12usize {
        let n = len as isize;
        for active in 0..len {
            for index in 0..len {
                let offset = circular_offset(index, active, len);
                assert!(-n < 2 * offset && 2 * offset <= n, "len={} offset={}", len, offset);
                let raw = index as isize - active as isize;
                assert_eq!((offset - raw).rem_euclid(n), 0);
            }
        }
    }
}

#[test]
fn test_visibility_window_is_active_plus_minus_two() {
    for len in 1..=12 {
        for active in 0..len {
            let slots = project_all(active, len);
            for slot in &slots {
                assert_eq!(slot.visible, slot.offset.abs() <= 2);
                if !slot.visible {
                    assert_eq!(slot.opacity, 0.0);
                }
            }
            let visible = slots.iter().filter(|s| s.visible).count();
            assert_eq!(visible, len.min(5));
        }
    }
}

#[test]
fn test_scale_steps_are_exact() {
    assert_eq!(project(0, 0, 5).scale, 1.0);
    assert_eq!(project(1, 0, 5).scale, 0.8);
    assert_eq!(project(4, 0, 5).scale, 0.8);
    assert_eq!(project(2, 0, 5).scale, 0.6);
    assert_eq!(project(3, 0, 5).scale, 0.6);
}

#[test]
fn test_transform_fields_for_visible_slots() {
    let left = project(6, 0, 7);
    assert_eq!(left.offset, -1);
    assert_eq!(left.translate_x_percent, -60.0);
    assert_eq!(left.rotate_y_degrees, 45.0);
    assert_eq!(left.z_index, 49);
    assert_eq!(left.opacity, 0.5);

    let right = project(2, 0, 7);
    assert_eq!(right.offset, 2);
    assert_eq!(right.translate_x_percent, 120.0);
    assert_eq!(right.rotate_y_degrees, -45.0);
    assert_eq!(right.z_index, 48);
}

#[test]
fn test_backward_from_first_of_five() {
    // Active moved 0 -> 4; item 0 sits one step to the right
    let slot = project(0, 4, 5);
    assert_eq!(slot.offset, 1);
    assert_eq!(slot.scale, 0.8);
    assert!(slot.visible);
}

#[test]
fn test_single_item_ring() {
    let slot = project(0, 0, 1);
    assert_eq!(slot.offset, 0);
    assert_eq!(slot.scale, 1.0);
    assert!(slot.visible);
}

#[test]
fn test_empty_ring_projects_nothing() {
    assert!(project_all(0, 0).is_empty());
    assert!(indicators(None, 0).is_empty());
}

#[test]
fn test_projection_is_pure() {
    assert_eq!(project(3, 1, 9), project(3, 1, 9));
    assert_eq!(project_all(4, 9), project_all(4, 9));
}

#[test]
fn test_indicators_mark_only_active() {
    let dots = indicators(Some(2), 4);
    assert_eq!(dots.len(), 4);
    assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
    assert!(dots[2].active);
}
