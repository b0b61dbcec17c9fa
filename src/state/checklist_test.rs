use super::*;

fn plain_step() -> &'static ChecklistStep {
    ONBOARDING_STEPS
        .iter()
        .find(|s| !s.requires_tour)
        .expect("checklist has a non-gated step")
}

fn gated_step() -> &'static ChecklistStep {
    ONBOARDING_STEPS
        .iter()
        .find(|s| s.requires_tour)
        .expect("checklist has a tour-gated step")
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn checklist_starts_empty_and_expanded_window() {
    let list = Checklist::default();
    assert_eq!(list.completed_count(), 0);
    assert_eq!(list.progress_percent(), 0);
    assert!(!list.minimized);
    assert!(!list.is_complete());
}

// =============================================================
// Completion toggles
// =============================================================

#[test]
fn toggle_twice_is_identity() {
    let mut list = Checklist::default();
    let step = plain_step();

    list.toggle_complete(step.id);
    assert!(list.is_completed(step.id));
    list.toggle_complete(step.id);
    assert!(!list.is_completed(step.id));
    assert_eq!(list.completed_count(), 0);
}

#[test]
fn completed_set_is_subset_of_defined_steps() {
    let mut list = Checklist::default();
    for step in ONBOARDING_STEPS {
        if !step.requires_tour {
            list.toggle_complete(step.id);
        }
    }
    list.complete_tour();
    for id in list.completed() {
        assert!(ONBOARDING_STEPS.iter().any(|s| s.id == *id));
    }
}

#[test]
fn progress_percent_tracks_completion() {
    let mut list = Checklist::default();
    assert_eq!(ONBOARDING_STEPS.len(), 5);

    list.toggle_complete(plain_step().id);
    assert_eq!(list.progress_percent(), 20);

    for step in ONBOARDING_STEPS {
        if !list.is_completed(step.id) {
            list.toggle_complete(step.id);
        }
    }
    assert_eq!(list.progress_percent(), 100);
    assert!(list.is_complete());
}

// =============================================================
// Tour gating
// =============================================================

#[test]
fn gated_step_demands_tour_when_unchecked() {
    let mut list = Checklist::default();
    let step = gated_step();
    assert_eq!(list.request_toggle(step), ToggleOutcome::TourRequired);
    assert!(!list.is_completed(step.id));
}

#[test]
fn complete_tour_checks_the_gated_step_once() {
    let mut list = Checklist::default();
    list.complete_tour();
    list.complete_tour();
    assert!(list.is_completed(gated_step().id));
    assert_eq!(list.completed_count(), 1);
}

#[test]
fn gated_step_can_be_unchecked_after_tour() {
    let mut list = Checklist::default();
    let step = gated_step();
    list.complete_tour();
    assert_eq!(list.request_toggle(step), ToggleOutcome::Toggled);
    assert!(!list.is_completed(step.id));
}

#[test]
fn plain_step_toggles_directly() {
    let mut list = Checklist::default();
    let step = plain_step();
    assert_eq!(list.request_toggle(step), ToggleOutcome::Toggled);
    assert!(list.is_completed(step.id));
}

// =============================================================
// Expansion
// =============================================================

#[test]
fn expansion_is_independent_of_completion() {
    let mut list = Checklist::default();
    let step = plain_step();

    list.toggle_expanded(step.id);
    assert!(list.is_expanded(step.id));
    assert!(!list.is_completed(step.id));

    list.toggle_complete(step.id);
    assert!(list.is_expanded(step.id));

    list.toggle_expanded(step.id);
    assert!(!list.is_expanded(step.id));
    assert!(list.is_completed(step.id));
}
