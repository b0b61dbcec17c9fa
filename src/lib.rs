//! # lims-ui
//!
//! Leptos + WASM front-end for the ADAPT LIMS demonstration: a navigation
//! shell over six screens (dashboard, samples, instruments, QC reports,
//! calibration wizard, multi-agent analysis) with guided tours and a
//! scripted lab-assistant overlay.
//!
//! Everything is client-side. There is no backend, persistence, or network
//! protocol: screen data is fixture content or generated from a per-session
//! seed, and every "workflow" is a scripted sequence of view-state
//! transitions. The pure state machines live in [`state`] and the data
//! models in [`model`]; both are framework-free and test on the host
//! target.

pub mod app;
pub mod components;
pub mod model;
pub mod pages;
pub mod state;
pub mod util;
