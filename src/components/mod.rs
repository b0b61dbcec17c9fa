//! Shared UI components used across the screens.

pub mod footer;
pub mod onboarding_checklist;
pub mod qc_assistant_modal;
pub mod tour_overlay;
pub mod video_dialog;
