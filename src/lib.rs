// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod select;
pub mod types;

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::cli::CliArgs;
use crate::config::{Settings, load_optional, resolve};
use crate::dag::{DependencyGraph, Scheduler};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings file + CLI flags (+ interactive answers)
/// - catalog loading and validation
/// - the scheduler
/// - report output on stdout
pub fn run(args: CliArgs) -> Result<()> {
    let overrides = args.overrides();
    let file = load_optional(args.config.as_deref()).context("loading settings file")?;
    let mut settings = resolve(file.as_ref(), &overrides)?;

    let catalog = catalog::load_and_validate(&settings.catalog)
        .with_context(|| format!("loading catalog from {:?}", settings.catalog))?;
    info!(path = ?settings.catalog, courses = catalog.len(), "catalog loaded");

    if args.dry_run {
        return print_dry_run(&catalog);
    }

    if args.interactive {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stderr();
        prompt::prompt_settings(&mut input, &mut output, &mut settings, &overrides)?;
    }

    let schedule = plan_with_settings(&catalog, &settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_schedule(&mut out, &schedule, args.format)?;
    out.flush()?;

    Ok(())
}

/// Run the scheduler for a loaded catalog with resolved settings.
pub fn plan_with_settings(catalog: &Catalog, settings: &Settings) -> errors::Result<dag::Schedule> {
    let request = settings.plan_request();
    debug!(?request, "planning request");
    Scheduler::new(catalog, request)?.run()
}

/// Simple dry-run output: validate the graph and print its layers.
fn print_dry_run(catalog: &Catalog) -> Result<()> {
    let layers = DependencyGraph::new(catalog).layers()?;
    print!("{}", report::render_layers(catalog, &layers));

    debug!("dry-run complete (no planning)");
    Ok(())
}
