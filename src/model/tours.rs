//! Canned step content for the guided tours, the onboarding checklist, and
//! the calibration procedure.
//!
//! All copy is fixed demo text; nothing here is computed.

/// A single step in a guided overlay tour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourStep {
    pub title: &'static str,
    pub description: &'static str,
    /// Label for the advance button on this step, when it is not the plain
    /// "Next".
    pub action: Option<&'static str>,
}

/// A step in the getting-started checklist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistStep {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Embedded tutorial video shown when the step is expanded.
    pub video_id: Option<&'static str>,
    /// Step 2 cannot be checked off directly; it completes through the
    /// interactive tour.
    pub requires_tour: bool,
}

/// A step of the calibration procedure checklist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcedureStep {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub video_placeholder: &'static str,
}

/// Platform walkthrough launched from the onboarding checklist.
pub const PRODUCT_TOUR: &[TourStep] = &[
    TourStep {
        title: "Dashboard Overview",
        description: "This is your main dashboard where you can see all active samples, instruments, and QC results at a glance.",
        action: None,
    },
    TourStep {
        title: "Navigation Menu",
        description: "Use these tabs to navigate between Samples, Instruments, and QC Reports sections.",
        action: None,
    },
    TourStep {
        title: "System Alerts",
        description: "Important notifications about QC failures, calibrations, and approvals appear here.",
        action: None,
    },
    TourStep {
        title: "Quick Stats",
        description: "Monitor key metrics like pending samples, active runs, and QC pass rates in real-time.",
        action: None,
    },
    TourStep {
        title: "You're All Set!",
        description: "You can now start using the LIMS platform. Click \"Get Started\" to begin working with samples and instruments.",
        action: Some("Get Started"),
    },
];

/// Walkthrough of the recalibration procedure for HPLC-002.
pub const CALIBRATION_TOUR: &[TourStep] = &[
    TourStep {
        title: "Prepare Calibration Standards",
        description: "First, prepare your calibration standards according to the SOP. Ensure all standards are within their expiration dates.",
        action: None,
    },
    TourStep {
        title: "Load Standards into Autosampler",
        description: "Place the calibration standards in the autosampler tray according to the sequence table.",
        action: None,
    },
    TourStep {
        title: "Run System Suitability Test",
        description: "Execute the system suitability test to verify instrument performance before calibration.",
        action: None,
    },
    TourStep {
        title: "Verify Calibration Curve",
        description: "Review the calibration curve to ensure R\u{b2} \u{2265} 0.999 and all points are within acceptance criteria.",
        action: None,
    },
    TourStep {
        title: "Complete Documentation",
        description: "Document the calibration results in the LIMS and sign the electronic batch record.",
        action: Some("Finish"),
    },
];

/// Corrective-action walkthrough launched from the assistant's
/// "Isolate reagent lot 5678" recommendation.
pub const CORRECTIVE_ACTION_TOUR: &[TourStep] = &[
    TourStep {
        title: "Navigate to Inventory",
        description: "First, go to the Inventory section to locate reagent lot 5678.",
        action: Some("Open Inventory"),
    },
    TourStep {
        title: "Search for Reagent Lot",
        description: "Use the search function to find lot 5678 in the reagent database.",
        action: Some("Search Lot 5678"),
    },
    TourStep {
        title: "Quarantine the Lot",
        description: "Click the quarantine button to prevent this lot from being used in future tests.",
        action: Some("Quarantine"),
    },
    TourStep {
        title: "Document the Issue",
        description: "Add a note documenting the QC failure and correlation analysis.",
        action: Some("Add Note"),
    },
    TourStep {
        title: "Action Complete!",
        description: "The reagent lot has been quarantined and documented. Quality team has been notified.",
        action: Some("Complete"),
    },
];

/// Getting-started checklist shown on the dashboard.
pub const ONBOARDING_STEPS: &[ChecklistStep] = &[
    ChecklistStep {
        id: 1,
        title: "Watch Welcome Video",
        description: "Get an overview of the ADAPT LIMS platform and learn about its key features for laboratory management.",
        video_id: Some("m-bH_mQQ-Dg"),
        requires_tour: false,
    },
    ChecklistStep {
        id: 2,
        title: "Complete Interactive Tour",
        description: "Take a guided tour through the platform to understand navigation, sample tracking, and reporting features.",
        video_id: None,
        requires_tour: true,
    },
    ChecklistStep {
        id: 3,
        title: "Create First Sample",
        description: "Learn how to register and track samples in the LIMS system with proper metadata and workflow assignments.",
        video_id: Some("KnFbPtieRTE"),
        requires_tour: false,
    },
    ChecklistStep {
        id: 4,
        title: "Run QC Analysis",
        description: "Understand quality control procedures, how to interpret results, and manage QC failures effectively.",
        video_id: Some("m-bH_mQQ-Dg"),
        requires_tour: false,
    },
    ChecklistStep {
        id: 5,
        title: "Generate Report",
        description: "Create comprehensive reports for regulatory compliance, including data visualization and export options.",
        video_id: Some("KnFbPtieRTE"),
        requires_tour: false,
    },
];

/// Calibration procedure steps for the wizard screen.
pub const CALIBRATION_PROCEDURE: &[ProcedureStep] = &[
    ProcedureStep {
        id: 1,
        title: "Prepare Instrument",
        description: "Verify instrument status and prepare for calibration",
        video_placeholder: "Instrument Preparation Guide",
    },
    ProcedureStep {
        id: 2,
        title: "Load Standard / Reagent",
        description: "Load calibration standards and verify reagent integrity",
        video_placeholder: "Standard Loading Procedure",
    },
    ProcedureStep {
        id: 3,
        title: "Run Calibration",
        description: "Execute automated calibration sequence",
        video_placeholder: "Calibration Execution",
    },
    ProcedureStep {
        id: 4,
        title: "Review QC Results",
        description: "Analyze calibration curves and QC metrics",
        video_placeholder: "QC Results Interpretation",
    },
    ProcedureStep {
        id: 5,
        title: "Lock Settings",
        description: "Save and lock calibration parameters",
        video_placeholder: "Finalizing Calibration",
    },
];
