//! Fixture data for the demo screens: instruments, QC records, dashboard
//! stats, and system alerts.
//!
//! Everything here is static display content. Sample lists are generated in
//! [`crate::model::synth`] instead so they can vary per session.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use serde::Serialize;

/// Lifecycle status of a laboratory sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SampleStatus {
    Pending,
    InProgress,
    Complete,
    Failed,
}

impl SampleStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SampleStatus::Pending => "Pending",
            SampleStatus::InProgress => "In Progress",
            SampleStatus::Complete => "Complete",
            SampleStatus::Failed => "Failed",
        }
    }

    /// Badge modifier class for this status.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            SampleStatus::Pending => "badge badge--muted",
            SampleStatus::InProgress => "badge badge--info",
            SampleStatus::Complete => "badge badge--ok",
            SampleStatus::Failed => "badge badge--fail",
        }
    }
}

/// A laboratory sample as shown in sample lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub id: String,
    pub name: String,
    pub kind: &'static str,
    pub status: SampleStatus,
    pub date: String,
    pub instrument: Option<&'static str>,
}

/// Operational status of an instrument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum InstrumentStatus {
    Ready,
    Running,
    Maintenance,
}

impl InstrumentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InstrumentStatus::Ready => "Ready",
            InstrumentStatus::Running => "Running",
            InstrumentStatus::Maintenance => "Maintenance",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            InstrumentStatus::Ready => "badge badge--ok",
            InstrumentStatus::Running => "badge badge--info",
            InstrumentStatus::Maintenance => "badge badge--warn",
        }
    }
}

/// An HPLC instrument with its live operating readings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Instrument {
    pub id: &'static str,
    pub name: &'static str,
    pub status: InstrumentStatus,
    pub temperature_c: f64,
    pub pressure_bar: u32,
    pub flow_ml_min: f64,
}

/// The instrument fleet monitored on the instruments screen.
pub const INSTRUMENTS: &[Instrument] = &[
    Instrument { id: "HPLC-001", name: "Agilent 1290 Infinity II", status: InstrumentStatus::Ready, temperature_c: 30.0, pressure_bar: 185, flow_ml_min: 1.0 },
    Instrument { id: "HPLC-002", name: "Agilent 1290 Infinity II", status: InstrumentStatus::Running, temperature_c: 35.0, pressure_bar: 192, flow_ml_min: 0.8 },
    Instrument { id: "HPLC-003", name: "Waters Acquity UPLC", status: InstrumentStatus::Ready, temperature_c: 28.0, pressure_bar: 178, flow_ml_min: 1.2 },
    Instrument { id: "HPLC-004", name: "Shimadzu Prominence", status: InstrumentStatus::Maintenance, temperature_c: 25.0, pressure_bar: 0, flow_ml_min: 0.0 },
    Instrument { id: "HPLC-005", name: "Thermo Vanquish", status: InstrumentStatus::Ready, temperature_c: 30.0, pressure_bar: 188, flow_ml_min: 1.1 },
    Instrument { id: "HPLC-006", name: "PerkinElmer Flexar", status: InstrumentStatus::Running, temperature_c: 33.0, pressure_bar: 195, flow_ml_min: 0.9 },
];

/// Pass/fail outcome of a quality-control test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QcStatus {
    Pass,
    Fail,
}

impl QcStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QcStatus::Pass => "Pass",
            QcStatus::Fail => "Fail",
        }
    }
}

/// A quality-control test record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QcRecord {
    pub id: &'static str,
    pub assay: &'static str,
    pub status: QcStatus,
    pub result: &'static str,
    pub date: &'static str,
    /// Flagged failures expose the "Ask Assistant" affordance.
    pub flagged: bool,
}

impl QcRecord {
    /// The question the assistant modal restates for this record.
    #[must_use]
    pub fn assistant_question(&self) -> String {
        format!(
            "Why did QC test {} fail, and what corrective actions should I take?",
            self.id
        )
    }

    /// JSON payload for the "Export Summary" action.
    #[must_use]
    pub fn export_summary(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Recent QC results shown on the reports screen.
pub const QC_RECORDS: &[QcRecord] = &[
    QcRecord { id: "QC-2024-001", assay: "Purity Assay (HPLC)", status: QcStatus::Pass, result: "99.2%", date: "2024-11-14", flagged: false },
    QcRecord { id: "QC-2024-002", assay: "Dissolution Test", status: QcStatus::Pass, result: "98.5%", date: "2024-11-14", flagged: false },
    QcRecord { id: "QC-2024-003", assay: "Content Uniformity", status: QcStatus::Fail, result: "RSD 8.2%", date: "2024-11-15", flagged: true },
    QcRecord { id: "QC-2024-004", assay: "Impurity Profile", status: QcStatus::Pass, result: "< 0.1%", date: "2024-11-15", flagged: false },
    QcRecord { id: "QC-2024-005", assay: "Moisture Content", status: QcStatus::Pass, result: "2.1%", date: "2024-11-15", flagged: false },
];

/// A dashboard stat card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// Quick stats across the top of the dashboard.
pub const DASHBOARD_STATS: &[StatCard] = &[
    StatCard { title: "Pending Samples", value: "23", note: "+4 from yesterday" },
    StatCard { title: "Active Runs", value: "8", note: "Across 3 instruments" },
    StatCard { title: "QC Pass Rate", value: "94.2%", note: "Last 30 days" },
    StatCard { title: "Pending Reviews", value: "12", note: "Awaiting approval" },
];

/// Severity of a system alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertSeverity {
    Error,
    Warning,
    Info,
}

/// A dashboard system alert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemAlert {
    pub severity: AlertSeverity,
    pub title: &'static str,
    pub detail: &'static str,
}

/// Alerts listed on the dashboard.
pub const SYSTEM_ALERTS: &[SystemAlert] = &[
    SystemAlert {
        severity: AlertSeverity::Error,
        title: "QC Failure Detected",
        detail: "Content uniformity test failed - QC-2024-003",
    },
    SystemAlert {
        severity: AlertSeverity::Warning,
        title: "Calibration Due",
        detail: "HPLC-002 requires recalibration within 3 days",
    },
    SystemAlert {
        severity: AlertSeverity::Info,
        title: "Batch Approved",
        detail: "Batch 2024-045 released for distribution",
    },
];

/// A metric row on an instrument card, with its tooltip copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricInfo {
    pub label: &'static str,
    pub heading: &'static str,
    pub blurb: &'static str,
    pub video_id: &'static str,
}

/// Tooltip copy for the three instrument metric rows.
pub const METRIC_INFO: [MetricInfo; 3] = [
    MetricInfo {
        label: "Column Temp",
        heading: "Column Temperature",
        blurb: "Maintains consistent temperature for reproducible retention times.",
        video_id: "m-bH_mQQ-Dg",
    },
    MetricInfo {
        label: "Pressure",
        heading: "System Pressure",
        blurb: "Current backpressure in the system. High pressure may indicate column blockage.",
        video_id: "KnFbPtieRTE",
    },
    MetricInfo {
        label: "Flow Rate",
        heading: "Flow Rate",
        blurb: "Mobile phase flow rate through the column. Affects separation time and resolution.",
        video_id: "m-bH_mQQ-Dg",
    },
];

/// A proposed change in the digital-twin simulation form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwinChange {
    pub id: &'static str,
    pub label: &'static str,
    pub impact: &'static str,
}

/// Changes offered by the digital-twin simulation card.
pub const TWIN_CHANGES: &[TwinChange] = &[
    TwinChange { id: "reagent", label: "Replace with new reagent lot", impact: "high" },
    TwinChange { id: "column", label: "Install fresh analytical column", impact: "medium" },
    TwinChange { id: "temp", label: "Reduce column temperature by 5\u{b0}C", impact: "low" },
    TwinChange { id: "flow", label: "Adjust flow rate to 0.8 mL/min", impact: "low" },
];
