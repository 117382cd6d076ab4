// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Overrides;
use crate::config::validate::normalize_codes;
use crate::types::{OutputFormat, SelectionMode};

/// Command-line arguments for `pensum`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pensum",
    version,
    about = "Plan the fewest semesters needed to complete a course catalog.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the course catalog (JSON).
    ///
    /// Overrides `[planner].catalog` from the settings file.
    #[arg(value_name = "CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Path to the settings file (TOML).
    ///
    /// Default: `Pensum.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum credits per semester (default 18).
    #[arg(long, value_name = "N")]
    pub max_credits: Option<u32>,

    /// Course selection strategy.
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<SelectionMode>,

    /// Convalidated (already completed) course codes, comma separated.
    #[arg(long, value_name = "CODES", value_delimiter = ',')]
    pub convalidated: Vec<String>,

    /// Ask on stdin for every setting not given as a flag.
    #[arg(long, short)]
    pub interactive: bool,

    /// How to print the schedule.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PENSUM_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load + validate, print the prerequisite layers, but don't plan.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Settings given explicitly on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            catalog: self.catalog.clone(),
            max_credits: self.max_credits,
            mode: self.mode,
            convalidated: normalize_codes(self.convalidated.iter().map(String::as_str)),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
