use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn wizard_starts_with_first_step_open_and_warning_shown() {
    let state = CalibrationState::default();
    assert_eq!(state.expanded, Some(1));
    assert_eq!(state.completed_count(), 0);
    assert!(state.show_warning);
    assert!(!state.show_success);
    assert!(state.events.is_empty());
}

// =============================================================
// Expansion
// =============================================================

#[test]
fn at_most_one_step_is_open() {
    let mut state = CalibrationState::default();
    state.toggle_expanded(3);
    assert_eq!(state.expanded, Some(3));
    state.toggle_expanded(5);
    assert_eq!(state.expanded, Some(5));
}

#[test]
fn toggling_the_open_step_closes_it() {
    let mut state = CalibrationState::default();
    state.toggle_expanded(1);
    assert_eq!(state.expanded, None);
}

// =============================================================
// Completion
// =============================================================

#[test]
fn toggle_complete_twice_is_identity() {
    let mut state = CalibrationState::default();
    state.toggle_complete(2);
    assert!(state.is_completed(2));
    state.toggle_complete(2);
    assert!(!state.is_completed(2));
}

#[test]
fn completing_every_step_swaps_banners() {
    let mut state = CalibrationState::default();
    for step in CALIBRATION_PROCEDURE {
        assert!(state.show_warning);
        assert!(!state.show_success);
        state.toggle_complete(step.id);
    }
    assert!(state.is_complete());
    assert_eq!(state.progress_percent(), 100);
    assert!(state.show_success);
    assert!(!state.show_warning);
}

#[test]
fn complete_all_marks_every_step_once() {
    let mut state = CalibrationState::default();
    state.toggle_complete(CALIBRATION_PROCEDURE[0].id);
    state.complete_all();
    assert_eq!(state.completed_count(), CALIBRATION_PROCEDURE.len());
    assert!(state.show_success);
}

#[test]
fn dismiss_warning_leaves_progress_untouched() {
    let mut state = CalibrationState::default();
    state.dismiss_warning();
    assert!(!state.show_warning);
    assert!(!state.show_success);
    assert_eq!(state.completed_count(), 0);
}

// =============================================================
// Event log
// =============================================================

#[test]
fn events_are_newest_first() {
    let mut state = CalibrationState::default();
    state.push_event("10:00:00".into(), "Expanded step", "Step 1");
    state.push_event("10:00:05".into(), "Completed step", "Step 1");
    assert_eq!(state.events[0].action, "Completed step");
    assert_eq!(state.events[1].action, "Expanded step");
}

#[test]
fn event_log_is_bounded() {
    let mut state = CalibrationState::default();
    for i in 0..EVENT_LOG_CAP + 5 {
        state.push_event(format!("10:00:{i:02}"), "Viewed tooltip", "Flow Rate");
    }
    assert_eq!(state.events.len(), EVENT_LOG_CAP);
    // The newest entry survives eviction.
    assert_eq!(state.events[0].time, format!("10:00:{:02}", EVENT_LOG_CAP + 4));
}
