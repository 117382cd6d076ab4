// src/catalog/mod.rs

//! Course catalog: the immutable input of every planning run.
//!
//! - [`model`] is the JSON-backed raw shape (`{"courses": [...]}`).
//! - [`validate`] turns a raw catalog into a [`Catalog`] (duplicate codes,
//!   dangling prerequisites, credit values).
//! - [`loader`] reads a catalog file from disk.
//!
//! A [`Catalog`] is an arena: courses live in a `Vec` ordered by ascending
//! code, and prerequisite edges are stored as index lists in both directions.
//! Cycles are *not* rejected here; the scheduler checks for them before it
//! produces any semester.

pub mod loader;
pub mod model;
pub mod validate;

use std::collections::HashMap;

use serde::Serialize;

pub use loader::{load_and_validate, load_from_path, parse_catalog};
pub use model::{RawCatalog, RawCourse};

/// Canonical course code type used throughout the crate.
pub type CourseCode = String;

/// Dense index of a course inside its [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(usize);

impl CourseId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single course. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    #[serde(skip)]
    pub id: CourseId,
    pub code: CourseCode,
    pub name: String,
    pub credits: u32,
    /// Direct prerequisites, de-duplicated, in the order they were listed.
    pub prerequisites: Vec<CourseCode>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<CourseCode, CourseId>,
    prerequisites: Vec<Vec<CourseId>>,
    dependents: Vec<Vec<CourseId>>,
}

impl Catalog {
    /// Build the arena from courses that already passed validation.
    ///
    /// Assumes that:
    /// - codes are unique
    /// - every prerequisite names a course in `courses`
    pub(crate) fn new_unchecked(mut courses: Vec<Course>) -> Self {
        courses.sort_by(|a, b| a.code.cmp(&b.code));

        let mut index = HashMap::with_capacity(courses.len());
        for (i, course) in courses.iter_mut().enumerate() {
            course.id = CourseId(i);
            index.insert(course.code.clone(), CourseId(i));
        }

        let mut prerequisites = vec![Vec::new(); courses.len()];
        let mut dependents = vec![Vec::new(); courses.len()];

        for course in courses.iter() {
            for code in course.prerequisites.iter() {
                if let Some(&pre) = index.get(code) {
                    prerequisites[course.id.0].push(pre);
                    dependents[pre.0].push(course.id);
                }
            }
        }

        Self {
            courses,
            index,
            prerequisites,
            dependents,
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All courses in ascending code order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn get(&self, id: CourseId) -> &Course {
        &self.courses[id.0]
    }

    pub fn id_of(&self, code: &str) -> Option<CourseId> {
        self.index.get(code).copied()
    }

    pub fn by_code(&self, code: &str) -> Option<&Course> {
        self.id_of(code).map(|id| self.get(id))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Immediate prerequisites of a course.
    pub fn prerequisites_of(&self, id: CourseId) -> &[CourseId] {
        &self.prerequisites[id.0]
    }

    /// Immediate dependents of a course (courses listing it as a prerequisite).
    pub fn dependents_of(&self, id: CourseId) -> &[CourseId] {
        &self.dependents[id.0]
    }

    pub fn total_credits(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.credits)).sum()
    }

    /// Largest single-course credit value (0 for an empty catalog).
    pub fn max_course_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).max().unwrap_or(0)
    }
}
