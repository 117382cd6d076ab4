// src/errors.rs

//! Crate-wide error types.
//!
//! Every planning error is fatal for the run that produced it. The caller is
//! expected to fix its input (catalog, cap, convalidated list) and start a new
//! run; nothing in the crate retries.

use thiserror::Error;

use crate::catalog::CourseCode;

/// Structural problems found while building a [`crate::catalog::Catalog`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog contains no courses")]
    Empty,

    #[error("duplicate course code '{0}'")]
    DuplicateCode(CourseCode),

    #[error("course '{course}' lists unknown prerequisite '{missing}'")]
    DanglingPrerequisite {
        course: CourseCode,
        missing: CourseCode,
    },
}

#[derive(Error, Debug)]
pub enum PensumError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Prerequisite cycle detected: {}", .courses.join(" -> "))]
    Cycle { courses: Vec<CourseCode> },

    #[error(
        "Credit cap too low: course '{course}' needs {credits} credits but the cap is \
         {max_credits} ({completed} courses completed so far)"
    )]
    Capacity {
        course: CourseCode,
        credits: u32,
        max_credits: u32,
        completed: usize,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PensumError>;
