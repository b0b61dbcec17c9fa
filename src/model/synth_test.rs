use super::*;

// =============================================================
// Determinism
// =============================================================

#[test]
fn same_seed_same_samples() {
    assert_eq!(samples(42, 12), samples(42, 12));
}

#[test]
fn different_seeds_differ() {
    // Twelve draws from a twelve-name pool colliding across two seeds would
    // be astronomically unlikely; treat it as a generator bug.
    assert_ne!(samples(1, 12), samples(2, 12));
}

// =============================================================
// Shape
// =============================================================

#[test]
fn count_is_respected() {
    assert_eq!(samples(0, 0).len(), 0);
    assert_eq!(samples(0, 5).len(), 5);
    assert_eq!(samples(0, 12).len(), 12);
}

#[test]
fn ids_count_down_from_the_newest_sample() {
    let list = samples(7, 4);
    assert_eq!(list[0].id, "S-2024-1891");
    assert_eq!(list[1].id, "S-2024-1890");
    assert_eq!(list[3].id, "S-2024-1888");
}

#[test]
fn dates_are_zero_padded_november_days() {
    for sample in samples(3, 20) {
        assert!(sample.date.starts_with("2024-11-"), "{}", sample.date);
        assert_eq!(sample.date.len(), 10);
    }
}

#[test]
fn only_in_progress_samples_sit_on_an_instrument() {
    for sample in samples(11, 40) {
        if sample.status == SampleStatus::InProgress {
            assert!(sample.instrument.is_some(), "{} has no instrument", sample.id);
        } else {
            assert!(sample.instrument.is_none(), "{} should be parked", sample.id);
        }
    }
}
