use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the scheduler picks the courses of a semester out of the ready set.
///
/// - `Greedy`: smallest courses first, admitted while they fit. Fast, but only
///   an approximation of the best credit load.
/// - `Exact`: 0/1 knapsack over the credit values; always fills the semester
///   as much as the cap allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Greedy,
    #[value(alias = "optimal")]
    #[serde(alias = "optimal")]
    Exact,
}

impl Default for SelectionMode {
    fn default() -> Self {
        SelectionMode::Greedy
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Greedy => f.write_str("greedy"),
            SelectionMode::Exact => f.write_str("exact"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greedy" => Ok(SelectionMode::Greedy),
            "exact" | "optimal" => Ok(SelectionMode::Exact),
            other => Err(format!(
                "invalid selection mode: {other} (expected \"greedy\" or \"exact\")"
            )),
        }
    }
}

/// Output format for the final schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable semester listing.
    Text,
    /// The schedule serialized as pretty-printed JSON.
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}
