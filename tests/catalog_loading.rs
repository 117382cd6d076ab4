// tests/catalog_loading.rs
mod common;
use crate::common::builders::{CatalogBuilder, CourseBuilder};
use crate::common::{SAMPLE_CATALOG_JSON, init_tracing, write_file};

use std::error::Error;

use pensum::catalog::{Catalog, RawCourse, load_and_validate, parse_catalog};
use pensum::errors::{CatalogError, PensumError};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn sample_catalog_parses_in_code_order() -> TestResult {
    init_tracing();

    let catalog = parse_catalog(SAMPLE_CATALOG_JSON)?;
    assert_eq!(catalog.len(), 6);

    let codes: Vec<&str> = catalog.courses().map(|c| c.code.as_str()).collect();
    assert_eq!(
        codes,
        vec!["EST201", "FIS101", "MAT101", "MAT102", "PRG101", "PRG102"]
    );

    let fis = catalog.by_code("FIS101").expect("FIS101 present");
    assert_eq!(fis.name, "Physics I");
    assert_eq!(fis.credits, 4);
    assert_eq!(fis.prerequisites, vec!["MAT101".to_string()]);

    // `prerequisites` omitted in the JSON.
    let prg = catalog.by_code("PRG101").expect("PRG101 present");
    assert!(prg.prerequisites.is_empty());

    assert_eq!(catalog.total_credits(), 21);
    assert_eq!(catalog.max_course_credits(), 4);
    Ok(())
}

#[test]
fn edges_are_stored_in_both_directions() -> TestResult {
    let catalog = parse_catalog(SAMPLE_CATALOG_JSON)?;

    let mat101 = catalog.id_of("MAT101").expect("MAT101 present");
    let dependents: Vec<&str> = catalog
        .dependents_of(mat101)
        .iter()
        .map(|&id| catalog.get(id).code.as_str())
        .collect();
    assert_eq!(dependents, vec!["FIS101", "MAT102"]);

    let est201 = catalog.id_of("EST201").expect("EST201 present");
    let prereqs: Vec<&str> = catalog
        .prerequisites_of(est201)
        .iter()
        .map(|&id| catalog.get(id).code.as_str())
        .collect();
    assert_eq!(prereqs, vec!["MAT102"]);
    Ok(())
}

#[test]
fn missing_name_defaults_to_empty_and_duplicate_prerequisites_collapse() {
    let catalog = CatalogBuilder::new()
        .course("A", 2, &[])
        .with_course(CourseBuilder::new("B", 3).after("A").after("A").build())
        .build();

    let b = catalog.by_code("B").expect("B present");
    assert_eq!(b.name, "");
    assert_eq!(b.prerequisites, vec!["A".to_string()]);
    assert_eq!(catalog.prerequisites_of(b.id).len(), 1);
}

#[test]
fn dangling_prerequisite_is_a_catalog_error() {
    let result = CatalogBuilder::new()
        .course("A", 3, &[])
        .course("B", 3, &["NonExistent"])
        .try_build();

    match result {
        Err(PensumError::Catalog(CatalogError::DanglingPrerequisite { course, missing })) => {
            assert_eq!(course, "B");
            assert_eq!(missing, "NonExistent");
        }
        Err(e) => panic!("Expected DanglingPrerequisite, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn duplicate_code_is_a_catalog_error() {
    let result = CatalogBuilder::new()
        .course("A", 3, &[])
        .course("A", 4, &[])
        .try_build();

    match result {
        Err(PensumError::Catalog(CatalogError::DuplicateCode(code))) => assert_eq!(code, "A"),
        Err(e) => panic!("Expected DuplicateCode, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_catalog_is_rejected() {
    let result = parse_catalog(r#"{ "courses": [] }"#);
    assert!(matches!(
        result,
        Err(PensumError::Catalog(CatalogError::Empty))
    ));
}

#[test]
fn non_positive_credits_are_configuration_errors() {
    for credits in [0, -3] {
        let result = CatalogBuilder::new().course("ZERO", credits, &[]).try_build();
        match result {
            Err(PensumError::ConfigError(msg)) => {
                assert!(msg.contains("ZERO"), "message should name the course: {msg}");
                assert!(msg.contains(&credits.to_string()));
            }
            Err(e) => panic!("Expected ConfigError, got: {:?}", e),
            Ok(_) => panic!("Expected error for credits = {credits}"),
        }
    }
}

#[test]
fn malformed_json_is_a_json_error() {
    let result = parse_catalog(r#"{ "courses": [ { "code": "A" } ] }"#);
    assert!(matches!(result, Err(PensumError::JsonError(_))));
}

#[test]
fn raw_catalog_is_checked_on_conversion() {
    let mut raw = CatalogBuilder::new().course("A", 3, &[]).raw();
    let mut dangling = RawCourse::new("B", 3);
    dangling.prerequisites.push("NOPE".to_string());
    raw.courses.push(dangling);

    match Catalog::try_from(raw) {
        Err(PensumError::Catalog(CatalogError::DanglingPrerequisite { course, missing })) => {
            assert_eq!(course, "B");
            assert_eq!(missing, "NOPE");
        }
        other => panic!("Expected DanglingPrerequisite, got: {:?}", other),
    }
}

#[test]
fn cyclic_catalog_still_builds() {
    // Cycles are reported by the scheduler, not at construction.
    let catalog = CatalogBuilder::new()
        .course("A", 3, &["B"])
        .course("B", 3, &["A"])
        .build();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn load_from_disk() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = write_file(dir.path(), "pensum.json", SAMPLE_CATALOG_JSON);

    let catalog = load_and_validate(&path)?;
    assert_eq!(catalog.len(), 6);
    assert!(catalog.contains("EST201"));
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = load_and_validate(dir.path().join("nope.json"));
    assert!(matches!(result, Err(PensumError::IoError(_))));
}
