// src/config/settings.rs

//! Effective settings for one run.
//!
//! Precedence, highest first:
//! 1. CLI flags ([`Overrides`])
//! 2. interactive answers (applied afterwards by [`crate::prompt`], only for
//!    values no flag set)
//! 3. the settings file
//! 4. built-in defaults

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::model::SettingsFile;
use crate::config::validate::normalize_codes;
use crate::dag::PlanRequest;
use crate::errors::{PensumError, Result};
use crate::types::SelectionMode;

/// Credit cap used when neither a flag nor the settings file sets one.
pub const DEFAULT_MAX_CREDITS: u32 = 18;

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalog: Option<PathBuf>,
    pub max_credits: Option<u32>,
    pub mode: Option<SelectionMode>,
    /// Non-empty replaces the file's `convalidated` list.
    pub convalidated: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog: PathBuf,
    pub max_credits: u32,
    pub mode: SelectionMode,
    pub convalidated: BTreeSet<String>,
}

impl Overrides {
    /// Trimmed, de-duplicated convalidated codes; blank entries are dropped.
    pub fn convalidated_codes(&self) -> Vec<String> {
        normalize_codes(self.convalidated.iter().map(String::as_str))
    }
}

impl Settings {
    pub fn plan_request(&self) -> PlanRequest {
        PlanRequest::new(self.max_credits, self.mode)
            .with_convalidated(self.convalidated.iter().cloned())
    }
}

/// Merge CLI overrides, the optional settings file and defaults.
pub fn resolve(file: Option<&SettingsFile>, overrides: &Overrides) -> Result<Settings> {
    let planner = file.map(|f| f.planner.clone()).unwrap_or_default();

    let catalog = overrides
        .catalog
        .clone()
        .or(planner.catalog)
        .ok_or_else(|| {
            PensumError::ConfigError(
                "no catalog given (pass a path or set [planner].catalog)".to_string(),
            )
        })?;

    let max_credits = overrides
        .max_credits
        .or(planner.max_credits)
        .unwrap_or(DEFAULT_MAX_CREDITS);
    if max_credits == 0 {
        return Err(PensumError::ConfigError(
            "max credits per semester must be >= 1 (got 0)".to_string(),
        ));
    }

    let mode = overrides.mode.or(planner.mode).unwrap_or_default();

    let codes = overrides.convalidated_codes();
    let convalidated = if codes.is_empty() {
        planner.convalidated
    } else {
        codes
    };

    Ok(Settings {
        catalog,
        max_credits,
        mode,
        convalidated: convalidated.into_iter().collect(),
    })
}
