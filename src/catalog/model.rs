// src/catalog/model.rs

use serde::Deserialize;

/// Catalog as read from a JSON file, before any semantic validation.
///
/// ```json
/// {
///   "courses": [
///     { "code": "MAT101", "name": "Calculus I", "credits": 4, "prerequisites": [] },
///     { "code": "MAT102", "name": "Calculus II", "credits": 4, "prerequisites": ["MAT101"] }
///   ]
/// }
/// ```
///
/// Unknown fields are ignored so that richer curriculum exports still load.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCatalog {
    #[serde(default)]
    pub courses: Vec<RawCourse>,
}

/// One entry of `courses`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCourse {
    pub code: String,

    /// Display name; optional.
    #[serde(default)]
    pub name: Option<String>,

    /// Kept signed so that zero and negative values reach validation and are
    /// reported with the offending course code.
    pub credits: i64,

    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl RawCourse {
    pub fn new(code: impl Into<String>, credits: i64) -> Self {
        Self {
            code: code.into(),
            name: None,
            credits,
            prerequisites: Vec::new(),
        }
    }
}
