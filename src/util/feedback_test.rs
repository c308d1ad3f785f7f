#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn feedback_delay_is_a_quarter_second() {
    assert_eq!(FEEDBACK_DELAY_MS, 250);
}

#[test]
fn new_action_has_nothing_scheduled() {
    let action = DelayedAction::new();
    assert!(!action.is_scheduled());
}

#[test]
fn default_matches_new() {
    assert!(!DelayedAction::default().is_scheduled());
}

#[test]
fn schedule_marks_an_action_pending() {
    let mut action = DelayedAction::new();
    action.schedule(|| {});
    assert!(action.is_scheduled());
}

#[test]
fn cancel_clears_the_pending_action() {
    let mut action = DelayedAction::new();
    action.schedule(|| {});
    action.cancel();
    assert!(!action.is_scheduled());
}

#[test]
fn rescheduling_supersedes_the_previous_action() {
    let mut action = DelayedAction::new();
    action.schedule(|| {});
    action.schedule(|| {});
    assert!(action.is_scheduled());
    action.cancel();
    assert!(!action.is_scheduled());
}

#[test]
fn cancel_without_schedule_is_a_noop() {
    let mut action = DelayedAction::new();
    action.cancel();
    assert!(!action.is_scheduled());
}

#[test]
fn schedule_accepts_capturing_callbacks() {
    let destination = "/lecture".to_owned();
    let mut action = DelayedAction::new();
    action.schedule(move || drop(destination));
    assert!(action.is_scheduled());
}
