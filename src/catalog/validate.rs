// src/catalog/validate.rs

use std::collections::HashSet;

use crate::catalog::model::{RawCatalog, RawCourse};
use crate::catalog::{Catalog, Course, CourseId};
use crate::errors::{CatalogError, PensumError, Result};

impl TryFrom<RawCatalog> for Catalog {
    type Error = PensumError;

    fn try_from(raw: RawCatalog) -> std::result::Result<Self, Self::Error> {
        validate_raw_catalog(&raw)?;
        let courses = raw.courses.into_iter().map(into_course).collect();
        Ok(Catalog::new_unchecked(courses))
    }
}

fn validate_raw_catalog(raw: &RawCatalog) -> Result<()> {
    ensure_has_courses(raw)?;
    validate_course_fields(raw)?;
    validate_unique_codes(raw)?;
    validate_prerequisites(raw)?;
    Ok(())
}

fn ensure_has_courses(raw: &RawCatalog) -> Result<()> {
    if raw.courses.is_empty() {
        return Err(CatalogError::Empty.into());
    }
    Ok(())
}

fn validate_course_fields(raw: &RawCatalog) -> Result<()> {
    for course in raw.courses.iter() {
        if course.code.trim().is_empty() {
            return Err(PensumError::ConfigError(
                "course code must not be empty".to_string(),
            ));
        }
        if course.credits <= 0 || course.credits > i64::from(u32::MAX) {
            return Err(PensumError::ConfigError(format!(
                "course '{}' has invalid credit value {} (expected a positive integer)",
                course.code, course.credits
            )));
        }
    }
    Ok(())
}

fn validate_unique_codes(raw: &RawCatalog) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for course in raw.courses.iter() {
        if !seen.insert(course.code.as_str()) {
            return Err(CatalogError::DuplicateCode(course.code.clone()).into());
        }
    }
    Ok(())
}

fn validate_prerequisites(raw: &RawCatalog) -> Result<()> {
    let codes: HashSet<&str> = raw.courses.iter().map(|c| c.code.as_str()).collect();

    for course in raw.courses.iter() {
        for pre in course.prerequisites.iter() {
            if !codes.contains(pre.as_str()) {
                return Err(CatalogError::DanglingPrerequisite {
                    course: course.code.clone(),
                    missing: pre.clone(),
                }
                .into());
            }
        }
    }
    Ok(())
}

fn into_course(raw: RawCourse) -> Course {
    let mut seen = HashSet::new();
    let prerequisites = raw
        .prerequisites
        .into_iter()
        .filter(|code| seen.insert(code.clone()))
        .collect();

    Course {
        id: CourseId(0),
        code: raw.code,
        name: raw.name.unwrap_or_default(),
        // Range checked in `validate_course_fields`.
        credits: raw.credits as u32,
        prerequisites,
    }
}
