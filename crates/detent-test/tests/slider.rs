//! Interaction tests for the slider, driven through the harness.

use detent_core::{AccessibleRole, Event, Key, Modifiers, MouseButton, Point, Rect, Widget};
use detent_test::Harness;
use detent_widgets::{SliderChanged, SliderProps, ValueLabel};
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const BOUNDS: Rect = Rect::new(100.0, 100.0, 400.0, 24.0);

fn at(fraction: f32) -> Point {
    BOUNDS.point_at(fraction, 0.5)
}

// =============================================================================
// Uncontrolled
// =============================================================================

#[test]
fn test_uncontrolled_default_then_drag_to_middle() {
    init_tracing();
    let mut h = Harness::new();
    let id = h
        .mount_at(SliderProps::new().default_value(25.0), BOUNDS)
        .unwrap();
    h.assert_value(id, 25);

    h.mouse_down(at(0.1)).mouse_move(at(0.5)).mouse_up(at(0.5));
    h.assert_value(id, 50);
    assert_eq!(h.messages_for(id), vec![10, 50]);
}

#[test]
fn test_drag_continues_outside_element() {
    init_tracing();
    let mut h = Harness::new();
    let id = h.mount_at(SliderProps::default(), BOUNDS).unwrap();

    h.mouse_down(at(0.5));
    // far below the slider, horizontally at 75%
    h.mouse_move(Point::new(400.0, 600.0));
    h.assert_value(id, 75).assert_dragging(id, true);

    // past the right edge
    h.mouse_move(Point::new(1200.0, 20.0));
    h.assert_value(id, 100);

    // past the left edge
    h.mouse_move(Point::new(-300.0, 20.0));
    h.assert_value(id, 0);
}

#[test]
fn test_dragging_flag_lifecycle() {
    init_tracing();
    let mut h = Harness::new();
    let id = h.mount_at(SliderProps::default(), BOUNDS).unwrap();

    h.assert_dragging(id, false);
    h.mouse_down(at(0.3));
    h.assert_dragging(id, true);
    h.mouse_move(Point::new(900.0, 700.0));
    h.assert_dragging(id, true);
    h.mouse_up(Point::new(900.0, 700.0));
    h.assert_dragging(id, false);
    assert_eq!(h.document().listener_count(), 0);
}

#[test]
fn test_any_release_ends_drag() {
    let mut h = Harness::new();
    let id = h.mount_at(SliderProps::default(), BOUNDS).unwrap();
    h.mouse_down(at(0.3));
    h.mouse_up_with(at(0.3), MouseButton::Right);
    h.assert_dragging(id, false);
}

#[test]
fn test_leaving_document_ends_drag() {
    let mut h = Harness::new();
    let id = h.mount_at(SliderProps::default(), BOUNDS).unwrap();
    h.mouse_down(at(0.3));
    h.mouse_leave_document();
    h.assert_dragging(id, false);
    h.mouse_move(at(0.9));
    h.assert_value(id, 30);
}

#[test]
fn test_moves_after_release_do_not_apply() {
    let mut h = Harness::new();
    let id = h.mount_at(SliderProps::default(), BOUNDS).unwrap();
    h.drag(id, 0.2, 0.6);
    h.assert_value(id, 60);
    h.mouse_move(at(0.9));
    h.assert_value(id, 60);
}

#[test]
fn test_secondary_presses_ignored() {
    let mut h = Harness::new();
    let id = h.mount_at(SliderProps::default(), BOUNDS).unwrap();
    h.mouse_down_with(at(0.5), MouseButton::Right, Modifiers::NONE);
    h.assert_dragging(id, false).assert_value(id, 0);
    h.mouse_down_with(at(0.5), MouseButton::Left, Modifiers::CTRL);
    h.assert_dragging(id, false).assert_value(id, 0);
    assert!(h.messages().is_empty());
}

#[test]
fn test_relayout_changes_mapping() {
    let mut h = Harness::new();
    let id = h.mount_at(SliderProps::default(), BOUNDS).unwrap();
    h.relayout(id, Rect::new(0.0, 0.0, 100.0, 24.0));
    h.mouse_down(Point::new(25.0, 12.0));
    h.assert_value(id, 25);
}

// =============================================================================
// Controlled
// =============================================================================

#[test]
fn test_controlled_drag_only_notifies() {
    init_tracing();
    let mut h = Harness::new();
    let id = h.mount_at(SliderProps::new().value(0.0), BOUNDS).unwrap();

    h.drag(id, 0.2, 0.5);
    h.assert_value(id, 0);
    assert_eq!(h.messages_for(id), vec![20, 50]);
    assert_eq!(h.slider(id).unwrap().view().handle_offset, 0);
}

#[test]
fn test_controlled_with_caller_feed_back() {
    let mut h = Harness::new().feed_back(true);
    let id = h.mount_at(SliderProps::new().value(0.0), BOUNDS).unwrap();

    h.drag(id, 0.2, 0.5);
    h.assert_value(id, 50);
}

#[test]
fn test_controlled_range_shrink_is_corrected() {
    let mut h = Harness::new().feed_back(true);
    let id = h.mount_at(SliderProps::new().value(80.0), BOUNDS).unwrap();
    h.set_range(id, 0.0, 60.0).unwrap();
    h.assert_value(id, 60);
    assert_eq!(h.messages_for(id), vec![60]);
}

#[test]
fn test_controlled_out_of_range_feed_back_is_corrected() {
    let mut h = Harness::new();
    let id = h.mount_at(SliderProps::new().value(10.0), BOUNDS).unwrap();
    h.set_value(id, Some(-40.0));
    h.assert_value(id, 0);
    assert_eq!(h.messages(), &[(id, SliderChanged { value: 0 })]);
}

// =============================================================================
// Keyboard
// =============================================================================

#[test]
fn test_keyboard_steps() {
    init_tracing();
    let mut h = Harness::new();
    let id = h
        .mount_at(SliderProps::new().default_value(10.0), BOUNDS)
        .unwrap();
    h.focus(id);

    h.press_key(Key::Right);
    h.assert_value(id, 11);

    let mut h = Harness::new();
    let id = h
        .mount_at(SliderProps::new().default_value(10.0), BOUNDS)
        .unwrap();
    h.focus(id);
    h.press_key_with(Key::Right, Modifiers::SHIFT);
    h.assert_value(id, 20);
}

#[test]
fn test_keyboard_needs_focus() {
    let mut h = Harness::new();
    let id = h
        .mount_at(SliderProps::new().default_value(10.0), BOUNDS)
        .unwrap();
    h.press_key(Key::Right);
    h.assert_value(id, 10);
    h.focus(id).blur().press_key(Key::Right);
    h.assert_value(id, 10);
}

#[test]
fn test_keyboard_goes_to_focused_slider_only() {
    let mut h = Harness::new();
    let a = h.mount(SliderProps::new().default_value(10.0)).unwrap();
    let b = h.mount(SliderProps::new().default_value(10.0)).unwrap();
    h.focus(b).press_key(Key::Up).press_key(Key::Up);
    h.assert_value(a, 10).assert_value(b, 12);
}

// =============================================================================
// Disabled
// =============================================================================

#[test]
fn test_disable_mid_drag_freezes_value() {
    init_tracing();
    let mut h = Harness::new();
    let id = h.mount_at(SliderProps::default(), BOUNDS).unwrap();

    h.mouse_down(at(0.2)).mouse_move(at(0.4));
    h.assert_value(id, 40);

    h.set_disabled(id, true);
    h.assert_dragging(id, false);
    assert_eq!(h.document().listener_count(), 0);

    h.mouse_move(at(0.9));
    h.assert_value(id, 40);
}

#[test]
fn test_disabled_slider_ignores_everything() {
    let mut h = Harness::new();
    let id = h
        .mount_at(SliderProps::new().default_value(30.0).disabled(true), BOUNDS)
        .unwrap();
    h.drag(id, 0.1, 0.9);
    h.focus(id).press_key(Key::Right);
    h.assert_value(id, 30).assert_dragging(id, false);
    assert!(h.messages().is_empty());
    assert_eq!(h.slider(id).unwrap().effective_color(), "gray");
}

// =============================================================================
// Several sliders in one document
// =============================================================================

#[test]
fn test_document_routing_targets_dragged_slider_only() {
    let mut h = Harness::new();
    let a = h.mount(SliderProps::new().default_value(10.0)).unwrap();
    let b = h.mount(SliderProps::new().default_value(10.0)).unwrap();
    let a_bounds = h.slider(a).unwrap().bounds();

    h.mouse_down(a_bounds.point_at(0.5, 0.5));
    assert_eq!(h.document().route(&Event::MouseLeave), vec![a]);

    // moving over slider b while dragging a
    let b_bounds = h.slider(b).unwrap().bounds();
    h.mouse_move(b_bounds.point_at(0.8, 0.5));
    h.mouse_up(b_bounds.point_at(0.8, 0.5));

    h.assert_value(a, 80).assert_value(b, 10);
    assert!(h.messages_for(b).is_empty());
}

#[test]
fn test_value_label_auto_follows_interaction() {
    let mut h = Harness::new();
    let id = h
        .mount_at(SliderProps::new().value_label(ValueLabel::Auto), BOUNDS)
        .unwrap();
    assert!(!h.slider(id).unwrap().view().label_visible);

    h.mouse_move(at(0.5));
    assert!(h.slider(id).unwrap().view().label_visible);

    h.mouse_move(Point::new(5.0, 5.0));
    assert!(!h.slider(id).unwrap().view().label_visible);

    h.focus(id);
    assert!(h.slider(id).unwrap().view().label_visible);
}

#[test]
fn test_sliders_expose_slider_role() {
    let mut h = Harness::new();
    h.mount(SliderProps::new().accessible_name("Volume")).unwrap();
    h.mount(SliderProps::new().accessible_name("Balance")).unwrap();
    h.assert_role_count(AccessibleRole::Slider, 2);
    assert!(h.query_name("Balance").is_some());
    assert!(h.query_name("Treble").is_none());
}

proptest! {
    #[test]
    fn prop_drag_value_always_in_range(
        min in -500i32..500,
        span in 1i32..1000,
        moves in proptest::collection::vec(-2.0f32..3.0, 1..20),
    ) {
        let max = min + span;
        let mut h = Harness::new();
        let id = h
            .mount_at(SliderProps::new().range_of(f64::from(min), f64::from(max)), BOUNDS)
            .unwrap();
        h.mouse_down(at(0.5));
        for fraction in moves {
            h.mouse_move(at(fraction));
            let value = h.value(id).unwrap();
            prop_assert!((i64::from(min)..=i64::from(max)).contains(&value));
        }
    }

    #[test]
    fn prop_controlled_value_never_moves_without_feed_back(
        start in 0i32..=100,
        moves in proptest::collection::vec(-1.0f32..2.0, 1..20),
    ) {
        let mut h = Harness::new();
        let id = h
            .mount_at(SliderProps::new().value(f64::from(start)), BOUNDS)
            .unwrap();
        h.mouse_down(at(0.5));
        for fraction in moves {
            h.mouse_move(at(fraction));
        }
        h.mouse_up(at(0.5));
        prop_assert_eq!(h.value(id), Some(i64::from(start)));
        for (_, message) in h.messages() {
            prop_assert!((0..=100).contains(&message.value));
        }
    }
}
