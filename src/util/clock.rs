//! Wall-clock access for event labels and generator seeds.
//!
//! Kept behind the `csr` gate like the rest of the browser glue; native
//! builds get fixed values, which is what the tests want anyway.

/// A `u64` seed drawn from the current time, for per-session synthetic data.
#[must_use]
pub fn session_seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            js_sys::Date::now() as u64
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        0x5EED
    }
}

/// Local `HH:MM:SS` label for the guidance analytics log.
#[must_use]
pub fn time_label() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:02}:{:02}:{:02}",
            now.get_hours(),
            now.get_minutes(),
            now.get_seconds()
        )
    }
    #[cfg(not(feature = "csr"))]
    {
        String::from("00:00:00")
    }
}
