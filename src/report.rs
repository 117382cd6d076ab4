// src/report.rs

//! Rendering of schedules and dry-run summaries.

use std::fmt::Write as _;
use std::io::Write;

use crate::catalog::{Catalog, Course};
use crate::dag::Schedule;
use crate::errors::Result;
use crate::types::OutputFormat;

/// Write `schedule` to `out` in the requested format.
pub fn write_schedule<W: Write>(out: &mut W, schedule: &Schedule, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(schedule),
        OutputFormat::Json => render_json(schedule)?,
    };
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Human-readable listing, one block per semester.
pub fn render_text(schedule: &Schedule) -> String {
    let mut s = String::new();

    let _ = writeln!(s, "=== RESULTS ({} mode, max {} credits) ===", schedule.mode, schedule.max_credits);
    if !schedule.convalidated.is_empty() {
        let _ = writeln!(s, "Convalidated: {}", schedule.convalidated.join(", "));
    }
    let _ = writeln!(s, "Total semesters needed: {}", schedule.len());

    for semester in schedule.semesters.iter() {
        let _ = writeln!(s);
        let _ = writeln!(
            s,
            "Semester {} ({} credits):",
            semester.index, semester.total_credits
        );
        for course in semester.courses.iter() {
            if course.name.is_empty() {
                let _ = writeln!(s, "  - {} ({} cr)", course.code, course.credits);
            } else {
                let _ = writeln!(
                    s,
                    "  - {}: {} ({} cr)",
                    course.code, course.name, course.credits
                );
            }
        }
    }

    let _ = writeln!(s);
    let _ = writeln!(s, "Total credits: {}", schedule.total_credits());
    s
}

/// The schedule as pretty-printed JSON, newline terminated.
pub fn render_json(schedule: &Schedule) -> Result<String> {
    let mut s = serde_json::to_string_pretty(schedule)?;
    s.push('\n');
    Ok(s)
}

/// Dry-run output: catalog summary plus prerequisite layers.
pub fn render_layers(catalog: &Catalog, layers: &[Vec<&Course>]) -> String {
    let mut s = String::new();

    let _ = writeln!(s, "pensum dry-run");
    let _ = writeln!(
        s,
        "  courses = {}, total credits = {}, largest course = {} cr",
        catalog.len(),
        catalog.total_credits(),
        catalog.max_course_credits()
    );
    let _ = writeln!(s, "  prerequisite layers = {} (minimum semesters)", layers.len());

    for (depth, layer) in layers.iter().enumerate() {
        let _ = writeln!(s);
        let _ = writeln!(s, "layer {depth}:");
        for course in layer.iter() {
            let _ = write!(s, "  - {} ({} cr)", course.code, course.credits);
            if !course.prerequisites.is_empty() {
                let _ = write!(s, " after {}", course.prerequisites.join(", "));
            }
            let _ = writeln!(s);
        }
    }

    s
}
