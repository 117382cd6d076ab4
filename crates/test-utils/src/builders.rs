#![allow(dead_code)]

use pensum::catalog::{Catalog, RawCatalog, RawCourse};
use pensum::errors::Result;

/// Builder for `Catalog` to simplify test setup.
pub struct CatalogBuilder {
    catalog: RawCatalog,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            catalog: RawCatalog::default(),
        }
    }

    pub fn with_course(mut self, course: RawCourse) -> Self {
        self.catalog.courses.push(course);
        self
    }

    /// Shorthand for a course given as code, credits and prerequisite codes.
    pub fn course(self, code: &str, credits: i64, prerequisites: &[&str]) -> Self {
        let mut builder = CourseBuilder::new(code, credits);
        for pre in prerequisites {
            builder = builder.after(pre);
        }
        self.with_course(builder.build())
    }

    pub fn raw(self) -> RawCatalog {
        self.catalog
    }

    pub fn try_build(self) -> Result<Catalog> {
        Catalog::try_from(self.catalog)
    }

    pub fn build(self) -> Catalog {
        self.try_build()
            .expect("Failed to build valid catalog from builder")
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `RawCourse`.
pub struct CourseBuilder {
    course: RawCourse,
}

impl CourseBuilder {
    pub fn new(code: &str, credits: i64) -> Self {
        Self {
            course: RawCourse::new(code, credits),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.course.name = Some(name.to_string());
        self
    }

    pub fn after(mut self, code: &str) -> Self {
        self.course.prerequisites.push(code.to_string());
        self
    }

    pub fn build(self) -> RawCourse {
        self.course
    }
}
