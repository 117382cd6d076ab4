use std::collections::BTreeSet;

use anyhow::anyhow;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Course, CourseCode};
use crate::dag::graph::{CompletedSet, DependencyGraph};
use crate::dag::scheduler_step::SchedulerStep;
use crate::dag::semester::{PlannerState, Schedule, Semester};
use crate::errors::{PensumError, Result};
use crate::select::{SemesterSelector, total_credits};
use crate::types::SelectionMode;

/// Everything a planning run needs besides the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    /// Codes considered already completed (transferred courses).
    pub convalidated: BTreeSet<CourseCode>,
    pub max_credits: u32,
    pub mode: SelectionMode,
}

impl PlanRequest {
    pub fn new(max_credits: u32, mode: SelectionMode) -> Self {
        Self {
            convalidated: BTreeSet::new(),
            max_credits,
            mode,
        }
    }

    pub fn with_convalidated<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CourseCode>,
    {
        self.convalidated.extend(codes.into_iter().map(Into::into));
        self
    }
}

/// Scheduler holds the immutable catalog view plus the mutable state of one
/// planning run.
///
/// It is responsible for:
/// - rejecting a cyclic catalog or a zero cap before any semester exists
/// - seeding the completed set with convalidated courses
/// - asking the dependency graph for ready courses each semester
/// - asking the selector which of them to take
/// - detecting runs that can no longer make progress
#[derive(Debug)]
pub struct Scheduler<'a> {
    graph: DependencyGraph<'a>,
    selector: Box<dyn SemesterSelector>,
    request: PlanRequest,
    completed: CompletedSet,
    convalidated: Vec<CourseCode>,
    semesters: Vec<Semester>,
    state: PlannerState,
}

impl<'a> Scheduler<'a> {
    /// Validate the request against `catalog` and prepare a run.
    pub fn new(catalog: &'a Catalog, request: PlanRequest) -> Result<Self> {
        if request.max_credits == 0 {
            return Err(PensumError::ConfigError(
                "max credits per semester must be >= 1 (got 0)".to_string(),
            ));
        }

        let graph = DependencyGraph::new(catalog);
        if let Some(courses) = graph.find_cycle() {
            warn!(cycle = ?courses, "scheduler: prerequisite cycle; refusing to plan");
            return Err(PensumError::Cycle { courses });
        }

        let mut completed = CompletedSet::new(catalog);
        let mut convalidated = Vec::new();
        for code in request.convalidated.iter() {
            match catalog.id_of(code) {
                Some(id) => {
                    completed.insert(id);
                    convalidated.push(code.clone());
                }
                None => {
                    warn!(course = %code, "convalidated code not in catalog; ignoring");
                }
            }
        }

        let state = if completed.is_full() {
            PlannerState::Done
        } else {
            PlannerState::Planning
        };

        info!(
            courses = catalog.len(),
            convalidated = convalidated.len(),
            max_credits = request.max_credits,
            mode = %request.mode,
            "scheduler: starting planning run"
        );

        Ok(Self {
            graph,
            selector: request.mode.selector(),
            request,
            completed,
            convalidated,
            semesters: Vec::new(),
            state,
        })
    }

    pub fn state(&self) -> PlannerState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == PlannerState::Done
    }

    /// Number of completed courses, convalidated ones included.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Courses not yet completed, in ascending code order.
    pub fn remaining(&self) -> Vec<&'a Course> {
        self.graph
            .catalog()
            .courses()
            .filter(|c| !self.completed.contains(c.id))
            .collect()
    }

    /// Courses that could be taken in the next semester.
    pub fn ready(&self) -> Vec<&'a Course> {
        self.graph.ready(&self.completed)
    }

    /// Semesters planned so far.
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Plan the next semester.
    ///
    /// After the run is done this is a no-op. A stuck run stays stuck: the
    /// completed set does not change, so the same error is returned again.
    pub fn step(&mut self) -> Result<SchedulerStep> {
        if self.state == PlannerState::Done || self.completed.is_full() {
            self.state = PlannerState::Done;
            return Ok(self.snapshot(None));
        }

        let index = self.semesters.len() as u32 + 1;
        let ready = self.graph.ready(&self.completed);
        debug!(semester = index, ready = ?codes(&ready), "scheduler: ready courses");

        if ready.is_empty() {
            self.state = PlannerState::Stuck;
            let courses: Vec<CourseCode> =
                self.remaining().iter().map(|c| c.code.clone()).collect();
            warn!(remaining = ?courses, "scheduler: courses remain but none is ready");
            return Err(PensumError::Cycle { courses });
        }

        let selected = self.selector.select(&ready, self.request.max_credits);

        if selected.is_empty() {
            self.state = PlannerState::Stuck;
            return Err(self.capacity_error(&ready));
        }

        let before = self.completed.len();
        for course in selected.iter() {
            self.completed.insert(course.id);
        }
        if self.completed.len() <= before {
            self.state = PlannerState::Stuck;
            return Err(PensumError::Other(anyhow!(
                "semester {index} selected only courses that were already completed"
            )));
        }

        let semester = Semester::new(index, &selected);
        info!(
            semester = index,
            courses = ?codes(&selected),
            credits = total_credits(&selected),
            selector = self.selector.name(),
            "scheduler: semester planned"
        );
        self.semesters.push(semester.clone());

        if self.completed.is_full() {
            info!(semesters = self.semesters.len(), "scheduler: all courses placed");
            self.state = PlannerState::Done;
        }

        Ok(self.snapshot(Some(semester)))
    }

    /// Step until every course is placed, then hand back the schedule.
    pub fn run(mut self) -> Result<Schedule> {
        while !self.is_done() {
            self.step()?;
        }
        Ok(self.into_schedule())
    }

    /// The schedule as planned so far.
    pub fn into_schedule(self) -> Schedule {
        Schedule {
            mode: self.request.mode,
            max_credits: self.request.max_credits,
            convalidated: self.convalidated,
            semesters: self.semesters,
        }
    }

    fn snapshot(&self, semester: Option<Semester>) -> SchedulerStep {
        SchedulerStep {
            semester,
            completed: self.completed.len(),
            state: self.state,
        }
    }

    /// Name the smallest ready course: if the cap cannot admit it, it cannot
    /// admit anything.
    fn capacity_error(&self, ready: &[&Course]) -> PensumError {
        let blocking = ready.iter().min_by(|a, b| {
            a.credits.cmp(&b.credits).then_with(|| a.code.cmp(&b.code))
        });

        match blocking {
            Some(course) => {
                warn!(
                    course = %course.code,
                    credits = course.credits,
                    max_credits = self.request.max_credits,
                    "scheduler: cap admits none of the ready courses"
                );
                PensumError::Capacity {
                    course: course.code.clone(),
                    credits: course.credits,
                    max_credits: self.request.max_credits,
                    completed: self.completed.len(),
                }
            }
            None => PensumError::Other(anyhow!("capacity check on an empty ready set")),
        }
    }
}

/// Plan `catalog` to completion in one call.
pub fn plan(catalog: &Catalog, request: PlanRequest) -> Result<Schedule> {
    Scheduler::new(catalog, request)?.run()
}

fn codes(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.code.clone()).collect()
}
