// Host-side tests for the mode controller state machine.

use std::f32::consts::PI;
use std::time::Duration;
use wish_tree_core::*;

const FRAME: Duration = Duration::from_millis(16);

fn tick(c: &mut ModeController, signal: Option<GestureSignal>) -> Vec<ControllerEvent> {
    let mut events = Vec::new();
    c.tick(FRAME, signal, &mut events);
    events
}

fn result_ready_count(events: &[ControllerEvent]) -> usize {
    events
        .iter()
        .filter(|e| **e == ControllerEvent::ResultReady)
        .count()
}

#[test]
fn starts_dispersed_and_unlocked() {
    let c = ModeController::new();
    assert_eq!(c.mode(), Mode::Dispersed);
    assert!(!c.is_locked());
    assert!(!c.is_result_visible());
    assert_eq!(c.rotation(), 0.0);
}

#[test]
fn pinch_then_open_toggles_assembled_and_dispersed() {
    let mut c = ModeController::new();
    let ev = tick(&mut c, Some(GestureSignal::pinch(0.5, 0.5)));
    assert_eq!(c.mode(), Mode::Assembled);
    assert_eq!(
        ev,
        vec![ControllerEvent::ModeChanged {
            from: Mode::Dispersed,
            to: Mode::Assembled
        }]
    );

    tick(&mut c, Some(GestureSignal::neutral(0.5, 0.5)));
    assert_eq!(c.mode(), Mode::Assembled);

    tick(&mut c, Some(GestureSignal::open(0.5, 0.5)));
    assert_eq!(c.mode(), Mode::Dispersed);

    tick(&mut c, Some(GestureSignal::pinch(0.5, 0.5)));
    assert_eq!(c.mode(), Mode::Assembled);
}

#[test]
fn absent_frames_never_change_mode_or_rotation() {
    let mut c = ModeController::new();
    tick(&mut c, Some(GestureSignal::pinch(0.9, 0.5)));
    let rot = c.rotation();
    for _ in 0..100 {
        let ev = tick(&mut c, None);
        assert!(ev.is_empty());
    }
    assert_eq!(c.mode(), Mode::Assembled);
    assert_eq!(c.rotation(), rot);
}

#[test]
fn repeated_signal_reports_mode_change_once() {
    let mut c = ModeController::new();
    let mut events = Vec::new();
    for _ in 0..10 {
        c.tick(FRAME, Some(GestureSignal::pinch(0.5, 0.5)), &mut events);
    }
    assert_eq!(events.len(), 1);
}

#[test]
fn rotation_smooths_toward_hand_angle() {
    let mut c = ModeController::new();
    // hand at the right edge: target angle = 0.5 * 2π = π
    tick(&mut c, Some(GestureSignal::neutral(1.0, 0.5)));
    assert!((c.rotation() - PI * 0.1).abs() < 1e-5);

    let mut prev_gap = PI - c.rotation();
    for _ in 0..200 {
        tick(&mut c, Some(GestureSignal::neutral(1.0, 0.5)));
        let gap = PI - c.rotation();
        assert!(gap <= prev_gap);
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-3);

    // centered hand pulls back toward zero
    for _ in 0..200 {
        tick(&mut c, Some(GestureSignal::neutral(0.5, 0.5)));
    }
    assert!(c.rotation().abs() < 1e-3);
}

#[test]
fn empty_or_whitespace_wish_is_rejected_without_state_change() {
    let mut c = ModeController::new();
    assert_eq!(c.submit_wish(""), Err(SubmitRejected::EmptyWish));
    assert_eq!(c.submit_wish("  \t\n"), Err(SubmitRejected::EmptyWish));
    assert!(!c.can_submit(" "));
    assert_eq!(c.mode(), Mode::Dispersed);
    assert!(!c.is_locked());
    assert_eq!(c.transmit_remaining(), None);
}

#[test]
fn submit_locks_and_enters_transmitting() {
    let mut c = ModeController::new();
    assert!(c.can_submit("a sled"));
    c.submit_wish("a sled").expect("accepted");
    assert_eq!(c.mode(), Mode::Transmitting);
    assert!(c.is_locked());
    assert!(!c.accepts_gestures());
    assert_eq!(c.transmit_remaining(), Some(TRANSMIT_DURATION));

    let ev = tick(&mut c, None);
    assert_eq!(
        ev,
        vec![
            ControllerEvent::TransmitStarted,
            ControllerEvent::ModeChanged {
                from: Mode::Dispersed,
                to: Mode::Transmitting
            },
        ]
    );
    // only once per accepted wish
    assert!(tick(&mut c, None).is_empty());
}

#[test]
fn rejected_or_canceled_wish_never_reports_a_start() {
    let mut c = ModeController::new();
    assert!(c.submit_wish(" ").is_err());
    assert!(tick(&mut c, None).is_empty());

    c.submit_wish("a kite").expect("accepted");
    c.cancel();
    let ev = tick(&mut c, None);
    assert!(!ev.contains(&ControllerEvent::TransmitStarted));
    assert_eq!(result_ready_count(&ev), 0);
}

#[test]
fn submit_while_locked_has_no_effect() {
    let mut c = ModeController::new();
    c.submit_wish("first").expect("accepted");
    for _ in 0..50 {
        tick(&mut c, None);
    }
    let remaining = c.transmit_remaining();
    assert_eq!(c.submit_wish("second"), Err(SubmitRejected::Locked));
    assert_eq!(c.transmit_remaining(), remaining);
    assert_eq!(c.mode(), Mode::Transmitting);
    assert!(c.is_locked());
}

#[test]
fn gestures_are_ignored_while_transmitting() {
    let mut c = ModeController::new();
    tick(&mut c, Some(GestureSignal::neutral(0.8, 0.5)));
    let rot = c.rotation();
    c.submit_wish("snow").expect("accepted");
    for i in 0..199 {
        let s = if i % 2 == 0 {
            GestureSignal::open(0.1, 0.5)
        } else {
            GestureSignal::pinch(0.9, 0.5)
        };
        tick(&mut c, Some(s));
        assert_eq!(c.mode(), Mode::Transmitting);
    }
    assert_eq!(c.rotation(), rot);
}

#[test]
fn transmission_ends_after_fixed_duration_with_one_result() {
    let mut c = ModeController::new();
    c.submit_wish("peace").expect("accepted");

    let mut events = Vec::new();
    // 199 frames of 16ms = 3.184s, not yet done
    for _ in 0..199 {
        c.tick(FRAME, None, &mut events);
    }
    assert_eq!(c.mode(), Mode::Transmitting);
    assert_eq!(result_ready_count(&events), 0);

    c.tick(FRAME, None, &mut events);
    assert_eq!(c.mode(), Mode::Dispersed);
    assert!(!c.is_locked());
    assert!(c.is_result_visible());
    assert_eq!(result_ready_count(&events), 1);

    for _ in 0..500 {
        c.tick(FRAME, None, &mut events);
    }
    assert_eq!(result_ready_count(&events), 1);
}

#[test]
fn result_display_blocks_gestures_until_dismissed() {
    let mut c = ModeController::new();
    c.submit_wish("peace").expect("accepted");
    let mut events = Vec::new();
    c.tick(TRANSMIT_DURATION, None, &mut events);
    assert!(c.is_result_visible());

    tick(&mut c, Some(GestureSignal::pinch(0.5, 0.5)));
    assert_eq!(c.mode(), Mode::Dispersed);
    assert_eq!(c.submit_wish("again"), Err(SubmitRejected::ResultShowing));

    c.dismiss_result();
    assert!(!c.is_result_visible());
    tick(&mut c, Some(GestureSignal::pinch(0.5, 0.5)));
    assert_eq!(c.mode(), Mode::Assembled);
    assert!(c.can_submit("again"));
}

#[test]
fn dismiss_is_ignored_while_transmitting() {
    let mut c = ModeController::new();
    c.submit_wish("peace").expect("accepted");
    c.dismiss_result();
    assert_eq!(c.mode(), Mode::Transmitting);
    assert!(c.is_locked());
}

#[test]
fn cancel_drops_pending_transmission_without_result() {
    let mut c = ModeController::new();
    c.submit_wish("peace").expect("accepted");
    tick(&mut c, None);
    c.cancel();
    assert_eq!(c.transmit_remaining(), None);
    assert!(!c.is_locked());

    let mut events = Vec::new();
    c.tick(TRANSMIT_DURATION * 2, None, &mut events);
    assert_eq!(result_ready_count(&events), 0);
    assert!(!c.is_result_visible());
    assert_eq!(c.mode(), Mode::Dispersed);
}
