// tests/property_scheduler.rs
mod common;
use crate::common::builders::CatalogBuilder;

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use pensum::catalog::{Catalog, Course};
use pensum::dag::{PlanRequest, plan};
use pensum::select::{ExactSelector, GreedySelector, SemesterSelector, total_credits};
use pensum::types::SelectionMode;

// Strategy to generate a valid DAG catalog.
// We ensure acyclicity by only allowing course N to require courses 0..N-1.
fn dag_catalog_strategy(max_courses: usize) -> impl Strategy<Value = Catalog> {
    (1..=max_courses).prop_flat_map(|num_courses| {
        let credits_strat = proptest::collection::vec(1i64..=8, num_courses);
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..3),
            num_courses,
        );

        (credits_strat, deps_strat).prop_map(move |(credits, raw_deps)| {
            let mut builder = CatalogBuilder::new();
            for (i, potential_deps) in raw_deps.into_iter().enumerate() {
                let mut deps = BTreeSet::new();
                if i > 0 {
                    for dep_idx in potential_deps {
                        deps.insert(format!("C{:02}", dep_idx % i));
                    }
                }
                let deps: Vec<&str> = deps.iter().map(String::as_str).collect();
                builder = builder.course(&format!("C{:02}", i), credits[i], &deps);
            }
            builder.build()
        })
    })
}

fn mode_strategy() -> impl Strategy<Value = SelectionMode> {
    prop_oneof![Just(SelectionMode::Greedy), Just(SelectionMode::Exact)]
}

proptest! {
    #[test]
    fn every_course_is_planned_exactly_once(
        catalog in dag_catalog_strategy(14),
        extra_cap in 0u32..10,
        mode in mode_strategy(),
    ) {
        let cap = catalog.max_course_credits() + extra_cap;
        let schedule = plan(&catalog, PlanRequest::new(cap, mode))
            .expect("a DAG with cap >= largest course must be plannable");

        let mut seen: HashMap<String, u32> = HashMap::new();
        for semester in schedule.semesters.iter() {
            prop_assert!(!semester.courses.is_empty());
            prop_assert!(semester.total_credits <= u64::from(cap));
            for code in semester.codes() {
                prop_assert!(seen.insert(code.to_string(), semester.index).is_none(),
                    "course {} planned twice", code);
            }
        }
        prop_assert_eq!(seen.len(), catalog.len());

        // Prerequisites always land in an earlier semester.
        for course in catalog.courses() {
            let at = seen[&course.code];
            for pre in course.prerequisites.iter() {
                prop_assert!(seen[pre] < at, "{} in {} but prerequisite {} in {}",
                    course.code, at, pre, seen[pre]);
            }
        }
    }

    #[test]
    fn planning_is_idempotent(
        catalog in dag_catalog_strategy(12),
        mode in mode_strategy(),
    ) {
        let request = PlanRequest::new(catalog.max_course_credits() + 3, mode);
        let first = plan(&catalog, request.clone()).expect("plannable");
        let second = plan(&catalog, request).expect("plannable");
        prop_assert_eq!(
            serde_json::to_string(&first).expect("serializable"),
            serde_json::to_string(&second).expect("serializable")
        );
    }

    #[test]
    fn convalidated_courses_are_never_planned(
        catalog in dag_catalog_strategy(12),
        seed_mask in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let seed: Vec<String> = catalog
            .courses()
            .zip(seed_mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(c, _)| c.code.clone())
            .collect();

        let request = PlanRequest::new(catalog.max_course_credits(), SelectionMode::Exact)
            .with_convalidated(seed.iter().cloned());
        let schedule = plan(&catalog, request).expect("plannable");

        for code in seed.iter() {
            prop_assert_eq!(schedule.semester_of(code), None);
        }
        prop_assert_eq!(schedule.course_count() + seed.len(), catalog.len());
    }

    #[test]
    fn exact_never_selects_fewer_credits_than_greedy(
        credits in proptest::collection::vec(1i64..=9, 1..12),
        cap in 1u32..30,
    ) {
        let mut builder = CatalogBuilder::new();
        for (i, c) in credits.iter().enumerate() {
            builder = builder.course(&format!("R{:02}", i), *c, &[]);
        }
        let catalog = builder.build();
        let ready: Vec<&Course> = catalog.courses().collect();

        let greedy = GreedySelector.select(&ready, cap);
        let exact = ExactSelector.select(&ready, cap);

        prop_assert!(total_credits(&greedy) <= u64::from(cap));
        prop_assert!(total_credits(&exact) <= u64::from(cap));
        prop_assert!(total_credits(&exact) >= total_credits(&greedy));
    }
}
