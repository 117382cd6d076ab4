// src/select/mod.rs

//! Semester selection: which ready courses go into the next semester.
//!
//! Both strategies answer the same question (a subset of the ready courses
//! whose credits fit under the cap) with different trade-offs:
//!
//! - [`greedy`]: smallest courses first, O(n log n), approximate.
//! - [`exact`]: 0/1 knapsack dynamic program, O(n * cap), maximal credit load.
//!
//! The scheduler only sees the [`SemesterSelector`] trait; the strategy is
//! picked once from a [`SelectionMode`].

pub mod exact;
pub mod greedy;

use std::fmt::Debug;

use crate::catalog::Course;
use crate::types::SelectionMode;

pub use exact::ExactSelector;
pub use greedy::GreedySelector;

/// Chooses a subset of `ready` whose credit sum is at most `max_credits`.
///
/// Implementations must:
/// - never exceed `max_credits`
/// - skip courses that are larger than `max_credits` on their own
/// - return the selection in ascending code order
/// - give the same answer for the same set of courses, whatever their order
pub trait SemesterSelector: Debug {
    fn name(&self) -> &'static str;

    fn select<'c>(&self, ready: &[&'c Course], max_credits: u32) -> Vec<&'c Course>;
}

impl SelectionMode {
    /// The selector implementing this mode.
    pub fn selector(self) -> Box<dyn SemesterSelector> {
        match self {
            SelectionMode::Greedy => Box::new(GreedySelector),
            SelectionMode::Exact => Box::new(ExactSelector),
        }
    }
}

/// Sum of credits of a selection.
pub fn total_credits(courses: &[&Course]) -> u64 {
    courses.iter().map(|c| u64::from(c.credits)).sum()
}

/// Candidates in ascending code order, so results never depend on how the
/// ready set was ordered by the caller.
fn by_code<'c>(ready: &[&'c Course]) -> Vec<&'c Course> {
    let mut candidates = ready.to_vec();
    candidates.sort_by(|a, b| a.code.cmp(&b.code));
    candidates
}
