use super::*;

// =============================================================
// QC records
// =============================================================

#[test]
fn the_flagged_failure_is_qc_2024_003() {
    let flagged: Vec<&QcRecord> = QC_RECORDS.iter().filter(|qc| qc.flagged).collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].id, "QC-2024-003");
    assert_eq!(flagged[0].status, QcStatus::Fail);
    assert_eq!(flagged[0].result, "RSD 8.2%");
}

#[test]
fn passing_records_are_never_flagged() {
    for qc in QC_RECORDS {
        if qc.status == QcStatus::Pass {
            assert!(!qc.flagged, "{} is flagged but passed", qc.id);
        }
    }
}

#[test]
fn assistant_question_restates_the_record_id() {
    let qc = QC_RECORDS.iter().find(|qc| qc.id == "QC-2024-003").unwrap();
    assert_eq!(
        qc.assistant_question(),
        "Why did QC test QC-2024-003 fail, and what corrective actions should I take?"
    );
}

#[test]
fn export_summary_is_valid_json_with_the_record_fields() {
    let qc = QC_RECORDS.iter().find(|qc| qc.flagged).unwrap();
    let json: serde_json::Value = serde_json::from_str(&qc.export_summary()).unwrap();
    assert_eq!(json["id"], "QC-2024-003");
    assert_eq!(json["assay"], "Content Uniformity");
    assert_eq!(json["status"], "Fail");
}

// =============================================================
// Instruments
// =============================================================

#[test]
fn fleet_has_six_instruments_with_unique_ids() {
    assert_eq!(INSTRUMENTS.len(), 6);
    for (i, a) in INSTRUMENTS.iter().enumerate() {
        for b in &INSTRUMENTS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn instrument_under_maintenance_is_idle() {
    let down = INSTRUMENTS
        .iter()
        .find(|i| i.status == InstrumentStatus::Maintenance)
        .unwrap();
    assert_eq!(down.pressure_bar, 0);
    assert!(down.flow_ml_min.abs() < f64::EPSILON);
}

// =============================================================
// Status labels
// =============================================================

#[test]
fn sample_status_labels_match_display_copy() {
    assert_eq!(SampleStatus::Pending.label(), "Pending");
    assert_eq!(SampleStatus::InProgress.label(), "In Progress");
    assert_eq!(SampleStatus::Complete.label(), "Complete");
    assert_eq!(SampleStatus::Failed.label(), "Failed");
}

#[test]
fn dashboard_has_four_stat_cards_and_three_alerts() {
    assert_eq!(DASHBOARD_STATS.len(), 4);
    assert_eq!(SYSTEM_ALERTS.len(), 3);
}
