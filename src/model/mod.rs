//! Display data for the demo: fixtures, canned tour copy, and seedable
//! synthetic generators. Nothing in this module touches the DOM, so all of it
//! tests natively.

pub mod fixtures;
pub mod graph;
pub mod synth;
pub mod tours;
