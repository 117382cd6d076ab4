// src/select/greedy.rs

use tracing::trace;

use crate::catalog::Course;
use crate::select::{SemesterSelector, by_code};

/// Smallest-first selection.
///
/// Candidates are ordered by `(credits, code)` and each one is admitted while
/// it still fits. This fits as many courses as possible but can leave credits
/// unused that the exact selector would fill.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector;

impl SemesterSelector for GreedySelector {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn select<'c>(&self, ready: &[&'c Course], max_credits: u32) -> Vec<&'c Course> {
        let mut candidates = by_code(ready);
        candidates.sort_by_key(|c| c.credits);

        let cap = u64::from(max_credits);
        let mut used = 0u64;
        let mut selected = Vec::new();

        for course in candidates {
            let credits = u64::from(course.credits);
            if used + credits <= cap {
                used += credits;
                selected.push(course);
            } else {
                trace!(course = %course.code, credits, used, cap, "greedy: course does not fit");
            }
        }

        selected.sort_by(|a, b| a.code.cmp(&b.code));
        selected
    }
}
