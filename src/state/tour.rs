//! Guided-tour state machine shared by every overlay tour.
//!
//! DESIGN
//! ======
//! The product tour, calibration tour, and corrective-action tour all need
//! the same cursor-advance/skip logic, so it lives in one type parameterized
//! by a static step list. Components own a `Tour` in a signal and fire their
//! completion callback when a transition reports the tour finished.

#[cfg(test)]
#[path = "tour_test.rs"]
mod tour_test;

use crate::model::tours::TourStep;

/// Cursor over an ordered list of tour steps.
///
/// The cursor always points at a valid step; finishing is a separate flag
/// rather than an out-of-range index. Every transition succeeds — there are
/// no failure or retry semantics.
#[derive(Clone, Debug)]
pub struct Tour {
    steps: &'static [TourStep],
    cursor: usize,
    finished: bool,
}

impl Tour {
    /// Start a tour at its first step.
    #[must_use]
    pub fn new(steps: &'static [TourStep]) -> Self {
        debug_assert!(!steps.is_empty());
        Self {
            steps,
            cursor: 0,
            finished: false,
        }
    }

    /// The step the cursor currently points at.
    #[must_use]
    pub fn current(&self) -> &TourStep {
        &self.steps[self.cursor]
    }

    /// 0-based cursor position. User-facing step numbers are `index() + 1`.
    #[must_use]
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Total number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the cursor is on the final step.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.steps.len()
    }

    /// Whether the tour has reached its terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to the next step, or finish when already on the last one.
    ///
    /// Returns `true` when this call finished the tour, so the caller can
    /// invoke its completion callback exactly once.
    pub fn next(&mut self) -> bool {
        if self.finished {
            return false;
        }
        if self.is_last() {
            self.finished = true;
            true
        } else {
            self.cursor += 1;
            false
        }
    }

    /// Finish immediately, bypassing any remaining steps.
    ///
    /// Returns `true` when this call finished the tour.
    pub fn skip(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.finished = true;
        true
    }
}
