//! Scripted reveal stages for the lab-assistant modal.
//!
//! The assistant performs no computation: sections appear on fixed wall-clock
//! delays from the moment the modal opens. The stage order is total, so a
//! later stage always keeps every earlier section visible.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Stages of the assistant reveal, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealStage {
    /// The restated question, rendered immediately on open.
    #[default]
    Question,
    /// Root-cause analysis with the evidence list.
    Analysis,
    /// Recommended corrective actions.
    Actions,
    /// Action buttons enabled; the sequence is over.
    Complete,
}

impl RevealStage {
    /// Stages that are revealed by timers, i.e. everything after the question.
    pub const TIMED: [RevealStage; 3] = [
        RevealStage::Analysis,
        RevealStage::Actions,
        RevealStage::Complete,
    ];

    /// Delay from modal open until this stage becomes visible.
    #[must_use]
    pub fn delay_ms(self) -> u32 {
        match self {
            RevealStage::Question => 0,
            RevealStage::Analysis => 2_000,
            RevealStage::Actions => 5_000,
            RevealStage::Complete => 7_000,
        }
    }

    /// The stage that follows this one, if any.
    #[must_use]
    pub fn next(self) -> Option<RevealStage> {
        match self {
            RevealStage::Question => Some(RevealStage::Analysis),
            RevealStage::Analysis => Some(RevealStage::Actions),
            RevealStage::Actions => Some(RevealStage::Complete),
            RevealStage::Complete => None,
        }
    }

    /// Whether the section introduced at `section` is visible at this stage.
    #[must_use]
    pub fn shows(self, section: RevealStage) -> bool {
        section <= self
    }
}

/// Advance a stage monotonically: a stale timer can never move it backwards
/// or repeat a stage.
pub fn advance_to(stage: &mut RevealStage, target: RevealStage) {
    if target > *stage {
        *stage = target;
    }
}
