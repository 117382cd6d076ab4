// src/prompt.rs

//! Interactive questions for settings not given on the command line.
//!
//! Reads answers line by line from any `BufRead` so the flow can be driven
//! from tests. An empty answer (or end of input) keeps the value that the
//! settings file or the defaults already provide.

use std::io::{BufRead, Write};

use crate::config::validate::normalize_codes;
use crate::config::{Overrides, Settings};
use crate::errors::{PensumError, Result};
use crate::types::SelectionMode;

/// Ask for convalidated codes, credit cap and mode, skipping any of them that
/// a CLI flag already fixed.
pub fn prompt_settings<R, W>(
    input: &mut R,
    output: &mut W,
    settings: &mut Settings,
    overrides: &Overrides,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    if overrides.convalidated_codes().is_empty() {
        ask_convalidated(input, output, settings)?;
    }
    if overrides.max_credits.is_none() {
        ask_max_credits(input, output, settings)?;
    }
    if overrides.mode.is_none() {
        ask_mode(input, output, settings)?;
    }
    Ok(())
}

fn ask_convalidated<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &mut Settings,
) -> Result<()> {
    let question = if settings.convalidated.is_empty() {
        "Enter convalidated course codes (comma separated, or Enter for none): ".to_string()
    } else {
        let current: Vec<&str> = settings.convalidated.iter().map(String::as_str).collect();
        format!(
            "Enter convalidated course codes (comma separated, or Enter to keep {}): ",
            current.join(", ")
        )
    };

    let answer = ask(input, output, &question)?;
    if !answer.is_empty() {
        settings.convalidated = normalize_codes(answer.split(',')).into_iter().collect();
        writeln!(output, "Convalidated courses: {}", answer)?;
    }
    Ok(())
}

fn ask_max_credits<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &mut Settings,
) -> Result<()> {
    let question = format!(
        "Enter max credits per semester (default {}): ",
        settings.max_credits
    );

    let answer = ask(input, output, &question)?;
    if answer.is_empty() {
        return Ok(());
    }

    match answer.parse::<u32>() {
        Ok(n) if n > 0 => {
            settings.max_credits = n;
            Ok(())
        }
        _ => Err(PensumError::ConfigError(format!(
            "max credits per semester must be a positive integer (got {answer:?})"
        ))),
    }
}

fn ask_mode<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &mut Settings,
) -> Result<()> {
    let question = match settings.mode {
        SelectionMode::Exact => "Use optimal knapsack? (Y/n): ",
        SelectionMode::Greedy => "Use optimal knapsack? (y/N): ",
    };

    let answer = ask(input, output, question)?.to_lowercase();
    settings.mode = match answer.as_str() {
        "" => settings.mode,
        "y" | "yes" => SelectionMode::Exact,
        "n" | "no" => SelectionMode::Greedy,
        other => {
            return Err(PensumError::ConfigError(format!(
                "expected y or n, got {other:?}"
            )));
        }
    };
    Ok(())
}

/// Print `question`, read one line, and return it trimmed.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
