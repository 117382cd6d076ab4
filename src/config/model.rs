// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::SelectionMode;

/// Settings file as read from TOML, before validation.
///
/// ```toml
/// [planner]
/// catalog = "pensum.json"
/// max_credits = 18
/// mode = "exact"
/// convalidated = ["MAT101", "FIS101"]
/// ```
///
/// Every key is optional; missing ones fall back to CLI flags or defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawSettingsFile {
    #[serde(default)]
    pub planner: RawPlannerSection,
}

/// `[planner]` section as written by the user.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPlannerSection {
    /// Path to the catalog JSON. Relative paths are resolved against the
    /// directory holding the settings file.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Signed so that `0` and negative caps are reported as configuration
    /// errors rather than TOML type errors.
    #[serde(default)]
    pub max_credits: Option<i64>,

    /// `"greedy"` or `"exact"`.
    #[serde(default)]
    pub mode: Option<String>,

    #[serde(default)]
    pub convalidated: Vec<String>,
}

/// A validated settings file.
///
/// Can only be obtained through `TryFrom<RawSettingsFile>`.
#[derive(Debug, Clone, Default)]
pub struct SettingsFile {
    pub planner: PlannerSection,
}

/// Validated `[planner]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerSection {
    pub catalog: Option<PathBuf>,
    pub max_credits: Option<u32>,
    pub mode: Option<SelectionMode>,
    pub convalidated: Vec<String>,
}

impl SettingsFile {
    pub(crate) fn new_unchecked(planner: PlannerSection) -> Self {
        Self { planner }
    }
}
