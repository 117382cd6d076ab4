// src/dag/mod.rs

//! Prerequisite graph and semester planning.
//!
//! - [`graph`] answers prerequisite queries: ready courses, cycles, layers.
//! - [`scheduler`] contains the per-run state machine that turns ready courses
//!   into semesters until every course is placed.
//! - [`semester`] provides the planned semester and schedule types.
//! - [`scheduler_step`] defines the result type for scheduler steps.

pub mod graph;
pub mod scheduler;
pub mod scheduler_step;
pub mod semester;

pub use graph::{CompletedSet, DependencyGraph};
pub use scheduler::{PlanRequest, Scheduler, plan};
pub use scheduler_step::SchedulerStep;
pub use semester::{PlannerState, Schedule, ScheduledCourse, Semester};
