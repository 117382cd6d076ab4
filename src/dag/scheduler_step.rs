// src/dag/scheduler_step.rs

//! Step-by-step result type for the scheduler.

use crate::dag::semester::{PlannerState, Semester};

/// Structured result of a single scheduler "step".
///
/// Useful for callers and tests that want to advance the plan one semester at
/// a time and inspect what changed.
#[derive(Debug, Clone)]
pub struct SchedulerStep {
    /// The semester produced by this step, or `None` if the run was already
    /// done.
    pub semester: Option<Semester>,
    /// Number of completed courses (seed included) after this step.
    pub completed: usize,
    /// State of the run after this step.
    pub state: PlannerState,
}

impl SchedulerStep {
    pub fn is_done(&self) -> bool {
        self.state == PlannerState::Done
    }
}
