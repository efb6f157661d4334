// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn drag_reports_deltas_for_the_captured_pointer() {
    let mut drag = DragState::default();
    assert_eq!(drag.move_to(1, 10.0, 10.0), None);

    drag.begin(1, 100.0, 50.0);
    assert_eq!(drag.move_to(1, 110.0, 45.0), Some((10.0, -5.0)));
    assert_eq!(drag.move_to(1, 110.0, 45.0), Some((0.0, 0.0)));
    // a second finger does not steer the camera
    assert_eq!(drag.move_to(2, 500.0, 500.0), None);
}

#[test]
fn drag_ends_only_for_its_own_pointer() {
    let mut drag = DragState::default();
    drag.begin(7, 0.0, 0.0);
    assert!(!drag.end(3));
    assert!(drag.active);
    assert!(drag.end(7));
    assert!(!drag.active);
    assert!(!drag.end(7));
}

#[test]
fn wheel_is_one_notch_per_event() {
    assert_eq!(wheel_notch(120.0), 1.0);
    assert_eq!(wheel_notch(3.0), 1.0);
    assert_eq!(wheel_notch(-0.5), -1.0);
    assert_eq!(wheel_notch(0.0), 0.0);
}

#[test]
fn enter_submits_only_from_the_wish_input() {
    assert_eq!(key_action("Enter", true), Some(KeyAction::SubmitWish));
    assert_eq!(key_action("Enter", false), None);
}

#[test]
fn help_key_is_ignored_while_typing() {
    assert_eq!(key_action("h", false), Some(KeyAction::ToggleHelp));
    assert_eq!(key_action("H", false), Some(KeyAction::ToggleHelp));
    assert_eq!(key_action("h", true), None);
    assert_eq!(key_action("Escape", true), Some(KeyAction::DismissResult));
    assert_eq!(key_action("x", false), None);
}
