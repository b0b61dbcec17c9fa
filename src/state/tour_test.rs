use super::*;
use crate::model::tours::{CALIBRATION_TOUR, CORRECTIVE_ACTION_TOUR, PRODUCT_TOUR};

// =============================================================
// Initial state
// =============================================================

#[test]
fn tour_starts_at_first_step() {
    let tour = Tour::new(PRODUCT_TOUR);
    assert_eq!(tour.index(), 0);
    assert!(!tour.is_finished());
    assert_eq!(tour.current().title, PRODUCT_TOUR[0].title);
}

#[test]
fn tour_len_matches_step_list() {
    assert_eq!(Tour::new(PRODUCT_TOUR).len(), PRODUCT_TOUR.len());
    assert_eq!(Tour::new(CALIBRATION_TOUR).len(), CALIBRATION_TOUR.len());
    assert_eq!(
        Tour::new(CORRECTIVE_ACTION_TOUR).len(),
        CORRECTIVE_ACTION_TOUR.len()
    );
}

// =============================================================
// next
// =============================================================

#[test]
fn next_advances_one_step_at_a_time() {
    let mut tour = Tour::new(CALIBRATION_TOUR);
    for expected in 1..CALIBRATION_TOUR.len() {
        assert!(!tour.next(), "finished before the last step");
        assert_eq!(tour.index(), expected);
    }
}

#[test]
fn next_on_last_step_finishes_without_moving_cursor() {
    let mut tour = Tour::new(PRODUCT_TOUR);
    while !tour.is_last() {
        tour.next();
    }
    let last = tour.index();
    assert!(tour.next());
    assert!(tour.is_finished());
    assert_eq!(tour.index(), last);
}

#[test]
fn cursor_never_leaves_bounds() {
    let mut tour = Tour::new(CORRECTIVE_ACTION_TOUR);
    for _ in 0..CORRECTIVE_ACTION_TOUR.len() * 2 {
        tour.next();
        assert!(tour.index() < tour.len());
    }
}

#[test]
fn next_after_finish_reports_nothing() {
    let mut tour = Tour::new(PRODUCT_TOUR);
    tour.skip();
    assert!(!tour.next());
    assert!(tour.is_finished());
}

// =============================================================
// skip
// =============================================================

#[test]
fn skip_finishes_from_the_first_step() {
    let mut tour = Tour::new(PRODUCT_TOUR);
    assert!(tour.skip());
    assert!(tour.is_finished());
}

#[test]
fn skip_finishes_from_any_mid_step() {
    let mut tour = Tour::new(CALIBRATION_TOUR);
    tour.next();
    tour.next();
    assert!(tour.skip());
    assert!(tour.is_finished());
}

#[test]
fn skip_after_finish_reports_nothing() {
    let mut tour = Tour::new(CALIBRATION_TOUR);
    tour.skip();
    assert!(!tour.skip());
}
