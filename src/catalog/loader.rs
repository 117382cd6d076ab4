// src/catalog/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::catalog::Catalog;
use crate::catalog::model::RawCatalog;
use crate::errors::Result;

/// Load a catalog file and return the raw [`RawCatalog`].
///
/// This only performs JSON deserialization; it does **not** check codes or
/// prerequisite references. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawCatalog> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let raw: RawCatalog = serde_json::from_str(&contents)?;

    debug!(path = ?path, courses = raw.courses.len(), "catalog file parsed");
    Ok(raw)
}

/// Parse and validate a catalog from an in-memory JSON document.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let raw: RawCatalog = serde_json::from_str(json)?;
    Catalog::try_from(raw)
}

/// Load a catalog file from path and validate it.
///
/// - Reads JSON.
/// - Rejects empty catalogs, empty codes, non-positive credits.
/// - Rejects duplicate codes and prerequisites naming unknown courses.
///
/// Cycle detection is left to the scheduler.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Catalog> {
    let raw = load_from_path(&path)?;
    Catalog::try_from(raw)
}
