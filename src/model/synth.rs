//! Seedable synthetic sample generator.
//!
//! DESIGN
//! ======
//! Generation is a pure function of an explicit `u64` seed: the samples
//! screen draws one seed on mount and keeps it, so the list is stable across
//! re-renders and reproducible in tests. No unseeded randomness anywhere.

#[cfg(test)]
#[path = "synth_test.rs"]
mod synth_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::model::fixtures::{Sample, SampleStatus};

const NAME_POOL: &[(&str, &str)] = &[
    ("Stability Study Batch 45", "QC"),
    ("Raw Material QC - Lot 5679", "QC"),
    ("Dissolution Test - Product A", "Assay"),
    ("Impurity Testing", "Assay"),
    ("Content Uniformity Test", "QC"),
    ("Residual Solvents Screen", "Assay"),
    ("Blend Uniformity - Batch 46", "QC"),
    ("Assay Potency - Product B", "Assay"),
    ("Moisture Determination", "QC"),
    ("Related Substances - Lot 5680", "Stability"),
    ("Forced Degradation Study", "Stability"),
    ("Reference Standard Check", "QC"),
];

const STATUS_POOL: [SampleStatus; 4] = [
    SampleStatus::Pending,
    SampleStatus::InProgress,
    SampleStatus::Complete,
    SampleStatus::Failed,
];

const INSTRUMENT_POOL: [&str; 3] = ["HPLC-001", "HPLC-002", "HPLC-003"];

/// Generate `count` synthetic samples from `seed`.
///
/// Ids count down from S-2024-1891 so the newest sample sorts first, matching
/// the fixture ids sprinkled through the rest of the UI.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn samples(seed: u64, count: usize) -> Vec<Sample> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let (name, kind) = NAME_POOL[rng.random_range(0..NAME_POOL.len())];
            let status = STATUS_POOL[rng.random_range(0..STATUS_POOL.len())];
            // In-flight samples are parked on an instrument; finished and
            // queued ones are not.
            let instrument = (status == SampleStatus::InProgress)
                .then(|| INSTRUMENT_POOL[rng.random_range(0..INSTRUMENT_POOL.len())]);
            let day = 15_u32.saturating_sub(i as u32 / 4).max(1);
            Sample {
                id: format!("S-2024-{}", 1891_usize.saturating_sub(i)),
                name: name.to_owned(),
                kind,
                status,
                date: format!("2024-11-{day:02}"),
                instrument,
            }
        })
        .collect()
}
