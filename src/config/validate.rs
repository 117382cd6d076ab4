// src/config/validate.rs

use std::str::FromStr;

use crate::config::model::{PlannerSection, RawPlannerSection, RawSettingsFile, SettingsFile};
use crate::errors::{PensumError, Result};
use crate::types::SelectionMode;

impl TryFrom<RawSettingsFile> for SettingsFile {
    type Error = PensumError;

    fn try_from(raw: RawSettingsFile) -> std::result::Result<Self, Self::Error> {
        let planner = validate_planner(raw.planner)?;
        Ok(SettingsFile::new_unchecked(planner))
    }
}

fn validate_planner(raw: RawPlannerSection) -> Result<PlannerSection> {
    let max_credits = raw.max_credits.map(validate_max_credits).transpose()?;

    let mode = raw
        .mode
        .as_deref()
        .map(|s| {
            SelectionMode::from_str(s)
                .map_err(|e| PensumError::ConfigError(format!("[planner].mode: {e}")))
        })
        .transpose()?;

    let convalidated = normalize_codes(raw.convalidated.iter().map(String::as_str));

    Ok(PlannerSection {
        catalog: raw.catalog,
        max_credits,
        mode,
        convalidated,
    })
}

fn validate_max_credits(value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(PensumError::ConfigError(format!(
            "[planner].max_credits must be >= 1 (got {value})"
        )));
    }
    u32::try_from(value).map_err(|_| {
        PensumError::ConfigError(format!("[planner].max_credits is too large (got {value})"))
    })
}

/// Trim codes, drop empty entries, and de-duplicate while keeping order.
pub fn normalize_codes<'s>(codes: impl IntoIterator<Item = &'s str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for code in codes {
        let code = code.trim();
        if !code.is_empty() && !out.iter().any(|c| c == code) {
            out.push(code.to_string());
        }
    }
    out
}
