use super::*;

// =============================================================
// WheelDelta
// =============================================================

#[test]
fn wheel_up_zooms_in() {
    let delta = WheelDelta { dx: 0.0, dy: 1.0 };
    assert_eq!(delta.direction(), Some(ZoomDirection::In));
}

#[test]
fn wheel_down_zooms_out() {
    let delta = WheelDelta { dx: 0.0, dy: -1.0 };
    assert_eq!(delta.direction(), Some(ZoomDirection::Out));
}

#[test]
fn wheel_magnitude_is_ignored() {
    assert_eq!(WheelDelta { dx: 0.0, dy: 120.0 }.direction(), Some(ZoomDirection::In));
    assert_eq!(WheelDelta { dx: 0.0, dy: -0.01 }.direction(), Some(ZoomDirection::Out));
}

#[test]
fn horizontal_wheel_has_no_direction() {
    assert_eq!(WheelDelta { dx: 3.0, dy: 0.0 }.direction(), None);
}

// =============================================================
// Button / CursorIcon
// =============================================================

#[test]
fn button_variants_distinct() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Middle, Button::Secondary);
    assert_ne!(Button::Primary, Button::Secondary);
}

#[test]
fn cursor_default_is_arrow() {
    assert_eq!(CursorIcon::default(), CursorIcon::Default);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn panning_carries_anchor() {
    let state = InputState::Panning { anchor_world: Point::new(1.0, 2.0) };
    let InputState::Panning { anchor_world } = state else {
        panic!("expected Panning");
    };
    assert_eq!(anchor_world, Point::new(1.0, 2.0));
}

#[test]
fn dragging_states_compare_by_id() {
    let a = ItemId::new_v4();
    let b = ItemId::new_v4();
    assert_eq!(InputState::DraggingItem { id: a }, InputState::DraggingItem { id: a });
    assert_ne!(InputState::DraggingItem { id: a }, InputState::DraggingItem { id: b });
}
