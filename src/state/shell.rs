//! Top-level navigation state owned by the application shell.
//!
//! DESIGN
//! ======
//! Navigation is a closed enum mutated through explicit actions, not a URL
//! router: the demo has no addressable surface and every reload resets to the
//! dashboard. Cross-screen flags that must survive navigation (onboarding
//! visibility, the calibration-drift banner) live here rather than in the
//! screen that happens to render them.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// The screens reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Samples,
    Instruments,
    Reports,
    Calibration,
    Agentic,
}

impl Page {
    /// Pages listed in the navigation bar, in display order.
    pub const NAV: [Page; 6] = [
        Page::Home,
        Page::Samples,
        Page::Instruments,
        Page::Reports,
        Page::Calibration,
        Page::Agentic,
    ];

    /// Label shown on the navigation button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Samples => "Samples",
            Page::Instruments => "Instruments",
            Page::Reports => "QC Reports",
            Page::Calibration => "Calibration",
            Page::Agentic => "Multi-Agent",
        }
    }
}

/// Shell state: the active page plus the cross-screen overlay flags.
#[derive(Clone, Debug)]
pub struct ShellState {
    pub page: Page,
    /// Whether the getting-started checklist overlay is shown on the dashboard.
    pub show_onboarding: bool,
    /// Set once the user acts on the calibration-drift banner; the banner
    /// never reappears within a session.
    pub drift_banner_dismissed: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            show_onboarding: true,
            drift_banner_dismissed: false,
        }
    }
}

impl ShellState {
    /// Switch the active page. Always succeeds; the enum is closed so there
    /// is no invalid target to reject.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// Handle "Start Calibration" from the samples screen's drift banner:
    /// navigate to the calibration wizard and dismiss the banner.
    ///
    /// Returns `true` only the first time, when the banner was actually
    /// dismissed by this call.
    pub fn start_calibration(&mut self) -> bool {
        self.page = Page::Calibration;
        if self.drift_banner_dismissed {
            false
        } else {
            self.drift_banner_dismissed = true;
            true
        }
    }

    /// Close the getting-started overlay.
    pub fn close_onboarding(&mut self) {
        self.show_onboarding = false;
    }
}
