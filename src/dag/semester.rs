// src/dag/semester.rs

//! Planned semesters and the overall schedule.

use serde::Serialize;

use crate::catalog::{Course, CourseCode};
use crate::types::SelectionMode;

/// Public, read-only view of where a planning run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlannerState {
    /// Courses remain and the last step made progress.
    Planning,
    /// Every course is completed (convalidated or scheduled).
    Done,
    /// No further progress is possible; the run ended with an error.
    Stuck,
}

/// A course as placed in a semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledCourse {
    pub code: CourseCode,
    pub name: String,
    pub credits: u32,
}

impl ScheduledCourse {
    pub fn from_course(course: &Course) -> Self {
        Self {
            code: course.code.clone(),
            name: course.name.clone(),
            credits: course.credits,
        }
    }
}

/// One semester of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Semester {
    /// 1-based position in the schedule.
    pub index: u32,
    /// Courses in ascending code order.
    pub courses: Vec<ScheduledCourse>,
    pub total_credits: u64,
}

impl Semester {
    pub fn new(index: u32, selected: &[&Course]) -> Self {
        let courses: Vec<ScheduledCourse> = selected
            .iter()
            .map(|c| ScheduledCourse::from_course(c))
            .collect();
        let total_credits = courses.iter().map(|c| u64::from(c.credits)).sum();
        Self {
            index,
            courses,
            total_credits,
        }
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(|c| c.code.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c.code == code)
    }
}

/// Result of a finished planning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub mode: SelectionMode,
    pub max_credits: u32,
    /// Convalidated codes that matched a catalog course, ascending.
    pub convalidated: Vec<CourseCode>,
    pub semesters: Vec<Semester>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    pub fn total_credits(&self) -> u64 {
        self.semesters.iter().map(|s| s.total_credits).sum()
    }

    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(|s| s.courses.len()).sum()
    }

    /// Index of the semester in which `code` is taken, if it was scheduled.
    pub fn semester_of(&self, code: &str) -> Option<u32> {
        self.semesters
            .iter()
            .find(|s| s.contains(code))
            .map(|s| s.index)
    }
}
