//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`shell`, `tour`, `checklist`, etc.) so individual
//! screens can depend on small focused models. Every module here is plain
//! Rust with no framework types, which keeps the view-state machines testable
//! on the host target; components wrap these in `RwSignal`s.

pub mod agentic;
pub mod calibration;
pub mod checklist;
pub mod reveal;
pub mod shell;
pub mod tour;
