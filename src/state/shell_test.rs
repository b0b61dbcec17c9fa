use super::*;

// =============================================================
// Page
// =============================================================

#[test]
fn page_default_is_home() {
    assert_eq!(Page::default(), Page::Home);
}

#[test]
fn page_nav_order_matches_navigation_bar() {
    assert_eq!(
        Page::NAV,
        [
            Page::Home,
            Page::Samples,
            Page::Instruments,
            Page::Reports,
            Page::Calibration,
            Page::Agentic,
        ]
    );
}

#[test]
fn page_labels_are_unique() {
    for (i, a) in Page::NAV.iter().enumerate() {
        for b in &Page::NAV[i + 1..] {
            assert_ne!(a.label(), b.label());
        }
    }
}

// =============================================================
// ShellState defaults
// =============================================================

#[test]
fn shell_starts_on_home_with_onboarding() {
    let state = ShellState::default();
    assert_eq!(state.page, Page::Home);
    assert!(state.show_onboarding);
    assert!(!state.drift_banner_dismissed);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn navigate_switches_page() {
    let mut state = ShellState::default();
    state.navigate(Page::Samples);
    assert_eq!(state.page, Page::Samples);
    state.navigate(Page::Reports);
    assert_eq!(state.page, Page::Reports);
}

#[test]
fn navigate_to_current_page_is_harmless() {
    let mut state = ShellState::default();
    state.navigate(Page::Home);
    assert_eq!(state.page, Page::Home);
}

// =============================================================
// Drift banner
// =============================================================

#[test]
fn start_calibration_navigates_and_dismisses_banner_once() {
    let mut state = ShellState::default();
    state.navigate(Page::Samples);

    assert!(state.start_calibration());
    assert_eq!(state.page, Page::Calibration);
    assert!(state.drift_banner_dismissed);

    // A second trigger still navigates but reports no new dismissal.
    state.navigate(Page::Samples);
    assert!(!state.start_calibration());
    assert_eq!(state.page, Page::Calibration);
}

#[test]
fn close_onboarding_hides_overlay() {
    let mut state = ShellState::default();
    state.close_onboarding();
    assert!(!state.show_onboarding);
}
