// src/dag/graph.rs

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::catalog::{Catalog, Course, CourseCode, CourseId};
use crate::errors::{PensumError, Result};

/// Set of courses considered satisfied during one planning run.
///
/// Indexed by [`CourseId`], so membership checks are O(1).
#[derive(Debug, Clone)]
pub struct CompletedSet {
    done: Vec<bool>,
    count: usize,
}

impl CompletedSet {
    /// Empty set sized for `catalog`.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            done: vec![false; catalog.len()],
            count: 0,
        }
    }

    /// Returns `true` if the course was not already in the set.
    pub fn insert(&mut self, id: CourseId) -> bool {
        let slot = &mut self.done[id.index()];
        if *slot {
            return false;
        }
        *slot = true;
        self.count += 1;
        true
    }

    pub fn contains(&self, id: CourseId) -> bool {
        self.done[id.index()]
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether every course of the catalog is in the set.
    pub fn is_full(&self) -> bool {
        self.count == self.done.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Prerequisite queries over a [`Catalog`].
///
/// Edges point from a course to its prerequisites; the catalog stores them as
/// index lists so every query here is a walk over `CourseId`s.
#[derive(Debug, Clone, Copy)]
pub struct DependencyGraph<'a> {
    catalog: &'a Catalog,
}

impl<'a> DependencyGraph<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Courses not in `completed` whose prerequisites are all in `completed`,
    /// in ascending code order.
    pub fn ready(&self, completed: &CompletedSet) -> Vec<&'a Course> {
        self.catalog
            .courses()
            .filter(|course| !completed.contains(course.id))
            .filter(|course| {
                self.catalog
                    .prerequisites_of(course.id)
                    .iter()
                    .all(|&pre| completed.contains(pre))
            })
            .collect()
    }

    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Depth-first search with white/gray/black colouring.
    ///
    /// Reaching a gray course means it is still on the current path, so the
    /// returned codes start and end with that course, e.g. `["A", "B", "A"]`
    /// when A requires B and B requires A.
    pub fn find_cycle(&self) -> Option<Vec<CourseCode>> {
        let mut color = vec![Color::White; self.catalog.len()];

        for root in self.catalog.courses().map(|c| c.id) {
            if color[root.index()] != Color::White {
                continue;
            }

            color[root.index()] = Color::Gray;
            let mut stack: Vec<(CourseId, usize)> = vec![(root, 0)];

            while let Some(&(node, next)) = stack.last() {
                let prerequisites = self.catalog.prerequisites_of(node);

                let Some(&child) = prerequisites.get(next) else {
                    color[node.index()] = Color::Black;
                    stack.pop();
                    continue;
                };

                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }

                match color[child.index()] {
                    Color::White => {
                        color[child.index()] = Color::Gray;
                        stack.push((child, 0));
                    }
                    Color::Gray => {
                        let start = stack
                            .iter()
                            .position(|&(id, _)| id == child)
                            .unwrap_or(0);
                        let mut path: Vec<CourseCode> = stack[start..]
                            .iter()
                            .map(|&(id, _)| self.catalog.get(id).code.clone())
                            .collect();
                        path.push(self.catalog.get(child).code.clone());
                        return Some(path);
                    }
                    Color::Black => {}
                }
            }
        }

        None
    }

    /// Group courses by the length of their longest prerequisite chain.
    ///
    /// Layer 0 holds courses without prerequisites; a course sits one layer
    /// above its deepest prerequisite. The number of layers is a lower bound on
    /// the number of semesters any schedule needs.
    pub fn layers(&self) -> Result<Vec<Vec<&'a Course>>> {
        // Edge direction: prerequisite -> course.
        let mut graph: DiGraph<CourseId, ()> = DiGraph::with_capacity(
            self.catalog.len(),
            self.catalog.courses().map(|c| c.prerequisites.len()).sum(),
        );

        let nodes: Vec<NodeIndex> = self
            .catalog
            .courses()
            .map(|course| graph.add_node(course.id))
            .collect();

        for course in self.catalog.courses() {
            for &pre in self.catalog.prerequisites_of(course.id) {
                graph.add_edge(nodes[pre.index()], nodes[course.id.index()], ());
            }
        }

        let order = toposort(&graph, None).map_err(|cycle| {
            let courses = self.find_cycle().unwrap_or_else(|| {
                vec![self.catalog.get(graph[cycle.node_id()]).code.clone()]
            });
            PensumError::Cycle { courses }
        })?;

        let mut depth = vec![0usize; self.catalog.len()];
        for node in order {
            let id = graph[node];
            depth[id.index()] = self
                .catalog
                .prerequisites_of(id)
                .iter()
                .map(|pre| depth[pre.index()] + 1)
                .max()
                .unwrap_or(0);
        }

        let height = depth.iter().copied().max().map_or(0, |d| d + 1);
        let mut layers: Vec<Vec<&'a Course>> = vec![Vec::new(); height];
        for course in self.catalog.courses() {
            layers[depth[course.id.index()]].push(course);
        }

        Ok(layers)
    }
}
