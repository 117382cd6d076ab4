// src/select/exact.rs

use tracing::trace;

use crate::catalog::Course;
use crate::select::{SemesterSelector, by_code, total_credits};

/// Score of a partial selection: total credits first, course count second.
type Score = (u64, u32);

/// 0/1 knapsack selection over credit values.
///
/// `table[i][w]` is the best [`Score`] reachable with the first `i` candidates
/// and at most `w` credits. A candidate is only taken when it strictly improves
/// the score, so among equally good selections the ones built from earlier
/// codes win.
///
/// When every candidate fits at once no table is built. Otherwise credits and
/// the cap are divided by the gcd of the candidate credits, so the table width
/// is `min(max_credits, total credits) / gcd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSelector;

impl SemesterSelector for ExactSelector {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn select<'c>(&self, ready: &[&'c Course], max_credits: u32) -> Vec<&'c Course> {
        let candidates: Vec<&'c Course> = by_code(ready)
            .into_iter()
            .filter(|c| c.credits <= max_credits)
            .collect();

        if candidates.is_empty() {
            return Vec::new();
        }

        let total = total_credits(&candidates);
        if total <= u64::from(max_credits) {
            trace!(candidates = candidates.len(), credits = total, "exact: everything fits");
            return candidates;
        }

        let unit = candidates.iter().fold(0, |g, c| gcd(g, c.credits));
        let scaled = |course: &Course| (course.credits / unit) as usize;

        let width = (total.min(u64::from(max_credits)) / u64::from(unit)) as usize;
        let n = candidates.len();
        let row = width + 1;
        let mut table: Vec<Score> = vec![(0, 0); (n + 1) * row];

        for (i, course) in candidates.iter().enumerate() {
            let credits = scaled(*course);
            for w in 0..=width {
                let skip = table[i * row + w];
                let mut best = skip;
                if credits <= w {
                    let (c, k) = table[i * row + w - credits];
                    let take = (c + credits as u64, k + 1);
                    if take > best {
                        best = take;
                    }
                }
                table[(i + 1) * row + w] = best;
            }
        }

        let mut selected = Vec::new();
        let mut w = width;
        for i in (1..=n).rev() {
            if table[i * row + w] != table[(i - 1) * row + w] {
                let course = candidates[i - 1];
                selected.push(course);
                w -= scaled(course);
            }
        }

        selected.reverse();
        trace!(
            candidates = n,
            width,
            unit,
            credits = total_credits(&selected),
            "exact: knapsack solved"
        );
        selected
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
