//! Empty-group resolution: a connected pocket of unassigned cells whose
//! entire boundary resolves to a single galaxy must belong to it.

use super::{Deduction, Rule};
use crate::error::SolveResult;
use crate::grid::{Grid, Neighbor};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

pub struct EmptyGroupResolution;

impl Rule for EmptyGroupResolution {
    fn id(&self) -> &'static str {
        "empty_group_resolution"
    }

    fn apply(&self, grid: &Grid) -> SolveResult<Vec<Deduction>> {
        let mut out = Vec::new();
        let mut visited = FxHashSet::default();
        for start in grid.cells() {
            if grid.parent_of(start).is_some() || !visited.insert(start) {
                continue;
            }
            // flood the component of unassigned cells through open edges,
            // collecting the parents seen just outside it
            let mut component = Vec::new();
            let mut seen_parents = FxHashSet::default();
            let mut frontier = VecDeque::from([start]);
            while let Some(cell) = frontier.pop_front() {
                component.push(cell);
                for neighbor in grid.adjacent(cell).into_iter().flatten() {
                    let Neighbor::Cell(next) = neighbor else {
                        continue;
                    };
                    match grid.parent_of(next) {
                        Some(parent) => {
                            seen_parents.insert(parent);
                        }
                        None => {
                            if visited.insert(next) {
                                frontier.push_back(next);
                            }
                        }
                    }
                }
            }
            let mut parents = seen_parents.iter();
            if let (Some(&galaxy), None) = (parents.next(), parents.next()) {
                out.extend(
                    component
                        .into_iter()
                        .map(|cell| Deduction::Assign(cell, galaxy)),
                );
            }
        }
        Ok(out)
    }
}
