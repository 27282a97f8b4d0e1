//! Step Sequencer
//!
//! Tracks which checkout step is active. The whole state is the position of the active step:
//! everything before it is completed and everything after it is upcoming. Once the payment step
//! completes there is no active step and the sequencer is terminal.

use thiserror::Error;

use crate::checkout::steps::{CheckoutStep, CheckoutStepId, StepStatus};

/// Illegal sequencer transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequencerError {
    /// Every step is already completed.
    #[error("checkout is already complete")]
    Terminal,

    /// The jump target has not been completed yet.
    #[error("cannot jump to {0}: step is not completed")]
    NotCompleted(CheckoutStepId),

    /// A step list does not describe a valid sequencer state.
    #[error("malformed checkout steps: {0}")]
    Malformed(&'static str),
}

/// Step Sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSequencer {
    active: Option<CheckoutStepId>,
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSequencer {
    /// First step active, the rest upcoming.
    pub const fn new() -> Self {
        Self {
            active: Some(CheckoutStepId::FIRST),
        }
    }

    /// Restore a sequencer from a rendered step list.
    ///
    /// The list must contain each step once, in sequence, as zero or more `completed` steps
    /// followed by one `active` step and then only `upcoming` steps, or consist solely of
    /// `completed` steps.
    ///
    /// # Errors
    ///
    /// Returns [`SequencerError::Malformed`] if the list breaks those rules.
    pub fn from_steps(steps: &[CheckoutStep]) -> Result<Self, SequencerError> {
        if steps.len() != CheckoutStepId::ALL.len() {
            return Err(SequencerError::Malformed("expected exactly four steps"));
        }

        let mut active = None;
        let mut seen_active = false;

        for (step, expected) in steps.iter().zip(CheckoutStepId::ALL) {
            if step.id != expected {
                return Err(SequencerError::Malformed("steps are out of order"));
            }

            match (step.status, seen_active) {
                (StepStatus::Completed, false) => {}
                (StepStatus::Active, false) => {
                    active = Some(step.id);
                    seen_active = true;
                }
                (StepStatus::Upcoming, true) => {}
                (StepStatus::Upcoming, false) => {
                    return Err(SequencerError::Malformed(
                        "upcoming step before the active step",
                    ));
                }
                (StepStatus::Completed | StepStatus::Active, true) => {
                    return Err(SequencerError::Malformed(
                        "only upcoming steps may follow the active step",
                    ));
                }
            }
        }

        Ok(Self { active })
    }

    /// The active step, or `None` once every step is completed.
    pub const fn active(&self) -> Option<CheckoutStepId> {
        self.active
    }

    /// Whether every step is completed.
    pub const fn is_terminal(&self) -> bool {
        self.active.is_none()
    }

    /// Status of a single step.
    pub fn status(&self, step: CheckoutStepId) -> StepStatus {
        match self.active {
            None => StepStatus::Completed,
            Some(active) if step < active => StepStatus::Completed,
            Some(active) if step == active => StepStatus::Active,
            Some(_) => StepStatus::Upcoming,
        }
    }

    /// All steps with their statuses, in sequence.
    pub fn steps(&self) -> [CheckoutStep; 4] {
        CheckoutStepId::ALL.map(|id| CheckoutStep::new(id, self.status(id)))
    }

    /// Complete the active step and activate the next one. Returns the step that was completed.
    ///
    /// # Errors
    ///
    /// Returns [`SequencerError::Terminal`] when every step is already completed.
    pub fn advance(&mut self) -> Result<CheckoutStepId, SequencerError> {
        let completed = self.active.ok_or(SequencerError::Terminal)?;

        self.active = completed.next();

        Ok(completed)
    }

    /// Reopen a completed step. Every later step reverts to upcoming.
    ///
    /// # Errors
    ///
    /// Returns [`SequencerError::NotCompleted`] when `step` is active or upcoming.
    pub fn jump_to(&mut self, step: CheckoutStepId) -> Result<(), SequencerError> {
        if self.status(step) != StepStatus::Completed {
            return Err(SequencerError::NotCompleted(step));
        }

        self.active = Some(step);

        Ok(())
    }
}
