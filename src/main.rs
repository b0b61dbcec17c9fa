//! CSR bootstrap: panic hook, console logger, and root mount.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(lims_ui::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The binary only does anything as a WASM bundle built with `--features
    // csr`; native builds exist for `cargo test` on the state machines.
}
