//! Browser glue: everything here that touches the DOM or the clock is gated
//! behind the `csr` feature so the crate builds and tests on the host target.

pub mod clock;
pub mod dark_mode;
pub mod timers;
