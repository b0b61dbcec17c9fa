use super::*;

// =============================================================
// Native (no browser) behavior
// =============================================================

#[test]
fn schedule_is_a_no_op_without_a_browser() {
    let mut set = TimerSet::new();
    set.schedule(2_000, || {});
    set.schedule(5_000, || {});
    assert_eq!(set.held(), 0);
}

#[test]
fn drop_releases_every_scheduled_handle() {
    let mut set = TimerSet::new();
    for delay in [2_000, 5_000, 7_000] {
        set.schedule(delay, || {});
    }
    // Teardown is the only release path; it must not panic with entries
    // outstanding.
    drop(set);
}

#[test]
fn debug_reports_held_count() {
    let set = TimerSet::new();
    assert_eq!(format!("{set:?}"), "TimerSet { held: 0 }");
}
