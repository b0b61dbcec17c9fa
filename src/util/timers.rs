//! Scoped one-shot timers for the scripted reveal panels.
//!
//! DESIGN
//! ======
//! `gloo_timers::callback::Timeout` cancels its underlying `setTimeout` when
//! dropped, so bundling every pending handle into one owned value makes
//! teardown a structural guarantee: whatever drops the `TimerSet` — closing
//! the modal, unmounting the screen — cancels anything that has not fired.
//! Nothing can leave a callback pending against a dismissed overlay.
//!
//! Outside the browser (`csr` off) scheduling is a no-op; the pure stage
//! machines in [`crate::state::reveal`] are tested directly instead.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

/// An owned set of pending timeouts, cancelled as a unit on drop.
#[derive(Default)]
pub struct TimerSet {
    #[cfg(feature = "csr")]
    handles: Vec<gloo_timers::callback::Timeout>,
}

impl TimerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` to run once after `delay_ms`, tying its lifetime
    /// to this set.
    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "csr")]
        self.handles
            .push(gloo_timers::callback::Timeout::new(delay_ms, callback));
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay_ms, callback);
        }
    }

    /// Number of handles still held. Fired timeouts are not released
    /// individually, so this is an upper bound on what is actually pending.
    #[must_use]
    pub fn held(&self) -> usize {
        #[cfg(feature = "csr")]
        {
            self.handles.len()
        }
        #[cfg(not(feature = "csr"))]
        {
            0
        }
    }
}

impl std::fmt::Debug for TimerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerSet").field("held", &self.held()).finish()
    }
}
