//! One module per screen reachable from the navigation bar.

pub mod agentic;
pub mod calibration;
pub mod home;
pub mod instruments;
pub mod reports;
pub mod samples;
