// src/config/mod.rs

//! Planner settings for pensum.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a settings file from disk (`loader.rs`).
//! - Validate basic invariants like a positive credit cap (`validate.rs`).
//! - Layer CLI flags over the file and the built-in defaults (`settings.rs`).

pub mod loader;
pub mod model;
pub mod settings;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_optional};
pub use model::{PlannerSection, RawPlannerSection, RawSettingsFile, SettingsFile};
pub use settings::{DEFAULT_MAX_CREDITS, Overrides, Settings, resolve};
