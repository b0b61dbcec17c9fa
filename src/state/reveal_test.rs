use super::*;

// =============================================================
// Sequence
// =============================================================

#[test]
fn reveal_starts_at_question() {
    assert_eq!(RevealStage::default(), RevealStage::Question);
}

#[test]
fn next_walks_the_full_sequence_without_skips() {
    let mut stage = RevealStage::Question;
    let mut seen = vec![stage];
    while let Some(next) = stage.next() {
        stage = next;
        seen.push(stage);
    }
    assert_eq!(
        seen,
        [
            RevealStage::Question,
            RevealStage::Analysis,
            RevealStage::Actions,
            RevealStage::Complete,
        ]
    );
}

#[test]
fn complete_is_terminal() {
    assert_eq!(RevealStage::Complete.next(), None);
}

#[test]
fn stage_order_is_strictly_monotonic() {
    let mut stage = RevealStage::Question;
    while let Some(next) = stage.next() {
        assert!(next > stage);
        stage = next;
    }
}

// =============================================================
// Delays
// =============================================================

#[test]
fn question_renders_immediately() {
    assert_eq!(RevealStage::Question.delay_ms(), 0);
}

#[test]
fn timed_delays_are_strictly_increasing() {
    let delays: Vec<u32> = RevealStage::TIMED.iter().map(|s| s.delay_ms()).collect();
    assert_eq!(delays, [2_000, 5_000, 7_000]);
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn later_stages_keep_earlier_sections_visible() {
    assert!(RevealStage::Complete.shows(RevealStage::Question));
    assert!(RevealStage::Complete.shows(RevealStage::Analysis));
    assert!(RevealStage::Complete.shows(RevealStage::Actions));
    assert!(RevealStage::Actions.shows(RevealStage::Analysis));
}

#[test]
fn future_sections_stay_hidden() {
    assert!(!RevealStage::Question.shows(RevealStage::Analysis));
    assert!(!RevealStage::Analysis.shows(RevealStage::Actions));
    assert!(!RevealStage::Actions.shows(RevealStage::Complete));
}

// =============================================================
// advance_to
// =============================================================

#[test]
fn advance_to_moves_forward_only() {
    let mut stage = RevealStage::Question;
    advance_to(&mut stage, RevealStage::Analysis);
    assert_eq!(stage, RevealStage::Analysis);

    // A stale timer firing out of order cannot rewind.
    advance_to(&mut stage, RevealStage::Question);
    assert_eq!(stage, RevealStage::Analysis);

    advance_to(&mut stage, RevealStage::Complete);
    assert_eq!(stage, RevealStage::Complete);
    advance_to(&mut stage, RevealStage::Actions);
    assert_eq!(stage, RevealStage::Complete);
}
