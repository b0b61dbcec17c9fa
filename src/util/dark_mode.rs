//! Dark mode preference, persisted to `localStorage`.
//!
//! The stylesheet keys every dark variant off a `.dark-mode` class on the
//! `<html>` element; this module owns reading the stored preference, falling
//! back to the system scheme, and flipping the class.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "adapt_lims_dark";

/// Read the stored dark mode preference, falling back to the system
/// `prefers-color-scheme` when nothing is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Some(stored) = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        {
            return stored == "true";
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let class_list = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|el| el.class_list());
        if let Some(class_list) = class_list {
            let _ = if enabled {
                class_list.add_1("dark-mode")
            } else {
                class_list.remove_1("dark-mode")
            };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip dark mode, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
