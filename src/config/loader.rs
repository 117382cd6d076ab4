// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawSettingsFile, SettingsFile};
use crate::errors::Result;

/// Load a settings file from a given path and return the raw `RawSettingsFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSettingsFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let settings: RawSettingsFile = toml::from_str(&contents)?;

    Ok(settings)
}

/// Load a settings file from path and validate it.
///
/// - Reads TOML.
/// - Checks `max_credits >= 1` and that `mode` names a known selector.
/// - Resolves a relative `catalog` path against the file's directory.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<SettingsFile> {
    let path = path.as_ref();
    let raw = load_from_path(path)?;
    let mut settings = SettingsFile::try_from(raw)?;

    if let Some(catalog) = settings.planner.catalog.take() {
        settings.planner.catalog = Some(resolve_against(path, catalog));
    }

    debug!(path = ?path, planner = ?settings.planner, "settings file loaded");
    Ok(settings)
}

/// Load the settings file if there is one.
///
/// - An explicit path must exist.
/// - Without one, [`default_config_path`] is used when present and silently
///   skipped otherwise.
pub fn load_optional(explicit: Option<&Path>) -> Result<Option<SettingsFile>> {
    match explicit {
        Some(path) => load_and_validate(path).map(Some),
        None => {
            let path = default_config_path();
            if path.is_file() {
                load_and_validate(&path).map(Some)
            } else {
                debug!(path = ?path, "no settings file; using flags and defaults");
                Ok(None)
            }
        }
    }
}

/// Default settings path: `Pensum.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Pensum.toml")
}

fn resolve_against(settings_path: &Path, catalog: PathBuf) -> PathBuf {
    if catalog.is_absolute() {
        return catalog;
    }
    match settings_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(catalog),
        _ => catalog,
    }
}
