//! Calibration wizard state: procedure checklist, banners, and the guidance
//! analytics event log.

#[cfg(test)]
#[path = "calibration_test.rs"]
mod calibration_test;

use crate::model::tours::CALIBRATION_PROCEDURE;

/// Maximum number of interaction events retained in the analytics panel.
pub const EVENT_LOG_CAP: usize = 10;

/// One recorded interaction with a guidance element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuidanceEvent {
    pub time: String,
    pub action: String,
    pub element: String,
}

/// State for the calibration wizard screen.
#[derive(Clone, Debug)]
pub struct CalibrationState {
    /// Procedure step currently unfolded, if any. At most one step is open.
    pub expanded: Option<u32>,
    completed: Vec<u32>,
    /// Drift warning banner; cleared when calibration completes or the user
    /// dismisses it.
    pub show_warning: bool,
    /// Success banner shown once every procedure step is complete.
    pub show_success: bool,
    /// Most recent guidance interactions, newest first, bounded by
    /// [`EVENT_LOG_CAP`].
    pub events: Vec<GuidanceEvent>,
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self {
            expanded: Some(1),
            completed: Vec::new(),
            show_warning: true,
            show_success: false,
            events: Vec::new(),
        }
    }
}

impl CalibrationState {
    #[must_use]
    pub fn is_completed(&self, step_id: u32) -> bool {
        self.completed.contains(&step_id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed.len() == CALIBRATION_PROCEDURE.len()
    }

    /// Rounded completion percentage for the progress bar.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress_percent(&self) -> u32 {
        let total = CALIBRATION_PROCEDURE.len();
        if total == 0 {
            return 0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.completed.len() as f64 / total as f64;
        (ratio * 100.0).round() as u32
    }

    /// Fold or unfold a procedure step. Unfolding one step folds any other.
    pub fn toggle_expanded(&mut self, step_id: u32) {
        self.expanded = if self.expanded == Some(step_id) {
            None
        } else {
            Some(step_id)
        };
    }

    /// Flip a procedure step's completion flag. Completing the final step
    /// swaps the drift warning for the success banner.
    pub fn toggle_complete(&mut self, step_id: u32) {
        if let Some(pos) = self.completed.iter().position(|id| *id == step_id) {
            self.completed.remove(pos);
        } else {
            self.completed.push(step_id);
        }
        if self.is_complete() {
            self.show_success = true;
            self.show_warning = false;
        }
    }

    /// Mark the entire procedure complete, as when the guided tour finishes.
    pub fn complete_all(&mut self) {
        for step in CALIBRATION_PROCEDURE {
            if !self.is_completed(step.id) {
                self.completed.push(step.id);
            }
        }
        self.show_success = true;
        self.show_warning = false;
    }

    /// Dismiss the drift warning banner without completing anything.
    pub fn dismiss_warning(&mut self) {
        self.show_warning = false;
    }

    /// Record a guidance interaction, evicting the oldest entry past the cap.
    pub fn push_event(&mut self, time: String, action: &str, element: &str) {
        self.events.insert(
            0,
            GuidanceEvent {
                time,
                action: action.to_owned(),
                element: element.to_owned(),
            },
        );
        self.events.truncate(EVENT_LOG_CAP);
    }
}
