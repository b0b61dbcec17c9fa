//! Onboarding checklist state for the getting-started overlay.

#[cfg(test)]
#[path = "checklist_test.rs"]
mod checklist_test;

use crate::model::tours::{ChecklistStep, ONBOARDING_STEPS};

/// Result of asking to toggle a checklist step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The completion flag flipped.
    Toggled,
    /// The step is gated behind the interactive tour; nothing changed.
    TourRequired,
}

/// Completion and expansion state for the onboarding checklist.
///
/// Completed and expanded sets are independent: expanding a step to read its
/// description or watch its video never affects completion, and vice versa.
#[derive(Clone, Debug, Default)]
pub struct Checklist {
    completed: Vec<u32>,
    expanded: Vec<u32>,
    pub minimized: bool,
}

impl Checklist {
    /// Ids of the completed steps, in completion order.
    #[must_use]
    pub fn completed(&self) -> &[u32] {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, step_id: u32) -> bool {
        self.completed.contains(&step_id)
    }

    #[must_use]
    pub fn is_expanded(&self, step_id: u32) -> bool {
        self.expanded.contains(&step_id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Whether every defined step is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed.len() == ONBOARDING_STEPS.len()
    }

    /// Rounded completion percentage for the progress bar.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress_percent(&self) -> u32 {
        let total = ONBOARDING_STEPS.len();
        if total == 0 {
            return 0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.completed.len() as f64 / total as f64;
        (ratio * 100.0).round() as u32
    }

    /// Ask to toggle a step's completion.
    ///
    /// A tour-gated step cannot be checked off directly: the caller must run
    /// the tour and report back through [`Checklist::complete_tour`].
    /// Unchecking a tour-gated step is allowed.
    pub fn request_toggle(&mut self, step: &ChecklistStep) -> ToggleOutcome {
        if step.requires_tour && !self.is_completed(step.id) {
            return ToggleOutcome::TourRequired;
        }
        self.toggle_complete(step.id);
        ToggleOutcome::Toggled
    }

    /// Flip a step's completion flag. Toggling twice restores the original
    /// state.
    pub fn toggle_complete(&mut self, step_id: u32) {
        if let Some(pos) = self.completed.iter().position(|id| *id == step_id) {
            self.completed.remove(pos);
        } else {
            self.completed.push(step_id);
        }
    }

    /// Flip a step's expansion flag.
    pub fn toggle_expanded(&mut self, step_id: u32) {
        if let Some(pos) = self.expanded.iter().position(|id| *id == step_id) {
            self.expanded.remove(pos);
        } else {
            self.expanded.push(step_id);
        }
    }

    /// Mark the tour-gated step complete after the interactive tour ends.
    pub fn complete_tour(&mut self) {
        if let Some(step) = ONBOARDING_STEPS.iter().find(|s| s.requires_tour) {
            if !self.is_completed(step.id) {
                self.completed.push(step.id);
            }
        }
    }
}
