//! Fixpoint driver
//!
//! Applies the propagation rules in a fixed order, pass after pass, until
//! a full pass leaves the grid unchanged. The result is Solved when every
//! cell has a parent and every galaxy's group matches its assigned cells,
//! Stuck otherwise. No guessing or backtracking happens here; Stuck is a
//! normal terminal state.

use crate::error::SolveResult;
use crate::grid::{GalaxyId, Grid, Snapshot};
use crate::rules::{all_rules, seed_markers, Deduction, Rule};
use crate::symmetry;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Driver configuration
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Upper bound on passes; 0 means no limit. Monotonicity already
    /// bounds the pass count by the number of cells plus edges, so this is
    /// a safety valve rather than a tuning knob.
    pub max_passes: usize,

    /// Checked between passes; setting the flag stops the solve with
    /// `Verdict::Cancelled`. There is no cancellation mid-pass.
    pub cancel: Option<Arc<AtomicBool>>,
}

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Every cell assigned and every galaxy bounded.
    Solved,
    /// Propagation alone cannot make further progress.
    Stuck,
    /// The caller's cancel flag was observed between passes.
    Cancelled,
}

/// Outcome of a solve: the verdict plus the final grid facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub verdict: Verdict,
    pub passes: usize,
    pub snapshot: Snapshot,
}

/// Fixpoint propagation driver
pub struct Solver {
    config: SolverConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            rules: all_rules(),
        }
    }

    /// Run propagation on `grid` until a pass changes nothing.
    ///
    /// The grid is exclusively owned by the driver for the duration: each
    /// pass is a deterministic sequence of pure reads and monotonic
    /// writes, so re-running on an already solved grid changes nothing.
    pub fn solve(&self, grid: &mut Grid) -> SolveResult<SolveReport> {
        seed_markers(grid)?;
        refresh_completeness(grid);
        let mut passes = 0;
        loop {
            if self.cancelled() {
                info!(passes, "solve cancelled");
                return Ok(report(Verdict::Cancelled, passes, grid));
            }
            if self.config.max_passes != 0 && passes >= self.config.max_passes {
                debug!(passes, "pass budget exhausted");
                return Ok(report(Verdict::Stuck, passes, grid));
            }
            let before = grid.snapshot();
            passes += 1;
            for rule in &self.rules {
                let deductions = rule.apply(grid)?;
                let mut changes = 0usize;
                for deduction in &deductions {
                    if apply_deduction(grid, deduction)? {
                        changes += 1;
                    }
                }
                debug!(rule = rule.id(), changes, pass = passes, "rule applied");
            }
            refresh_completeness(grid);
            if grid.snapshot() == before {
                let verdict = if is_solved(grid) {
                    Verdict::Solved
                } else {
                    Verdict::Stuck
                };
                info!(?verdict, passes, "propagation reached a fixpoint");
                return Ok(report(verdict, passes, grid));
            }
        }
    }

    fn cancelled(&self) -> bool {
        self.config
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

fn report(verdict: Verdict, passes: usize, grid: &Grid) -> SolveReport {
    SolveReport {
        verdict,
        passes,
        snapshot: grid.snapshot(),
    }
}

fn apply_deduction(grid: &mut Grid, deduction: &Deduction) -> SolveResult<bool> {
    match deduction {
        Deduction::Assign(cell, galaxy) => grid.assign_parent(*cell, *galaxy),
        Deduction::Border(edge) => grid.mark_border(*edge),
        Deduction::Restrict(cell, allowed) => grid.restrict_candidates(*cell, allowed),
    }
}

/// A galaxy is complete when its symmetric expansion is bounded and matches
/// exactly the cells assigned to it. Recomputed, never incrementally
/// merged.
fn refresh_completeness(grid: &mut Grid) {
    let ids: Vec<GalaxyId> = grid.galaxies().iter().map(|g| g.id).collect();
    for id in ids {
        let group = symmetry::group_of(grid, id);
        let complete = !group.open && group.cells == grid.cells_of(id);
        grid.set_complete(id, complete);
    }
}

fn is_solved(grid: &Grid) -> bool {
    grid.cells().all(|cell| grid.parent_of(cell).is_some())
        && grid.galaxies().iter().all(|galaxy| galaxy.complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;

    #[test]
    fn test_single_cell_marker_board() {
        let mut grid = Grid::new(3, 3, vec![Coord::new(1, 1)]).unwrap();
        let report = Solver::new(SolverConfig::default())
            .solve(&mut grid)
            .unwrap();
        assert_eq!(report.verdict, Verdict::Solved);
        assert_eq!(grid.parent_of(Coord::new(1, 1)), Some(GalaxyId(0)));
    }

    #[test]
    fn test_cancel_before_first_pass() {
        let flag = Arc::new(AtomicBool::new(true));
        let config = SolverConfig {
            max_passes: 0,
            cancel: Some(flag),
        };
        let mut grid = Grid::new(5, 5, vec![Coord::new(2, 2)]).unwrap();
        let report = Solver::new(config).solve(&mut grid).unwrap();
        assert_eq!(report.verdict, Verdict::Cancelled);
        assert_eq!(report.passes, 0);
    }

    #[test]
    fn test_pass_budget_reports_stuck() {
        // the smallest real budget on a board that needs more than one
        // pass to confirm the fixpoint
        let budget = SolverConfig {
            max_passes: 1,
            cancel: None,
        };
        let mut grid = Grid::new(11, 11, vec![Coord::new(5, 5)]).unwrap();
        let report = Solver::new(budget).solve(&mut grid).unwrap();
        // one pass assigns everything, but the fixpoint is not yet
        // confirmed when the budget runs out
        assert_eq!(report.verdict, Verdict::Stuck);
        assert_eq!(report.passes, 1);
    }
}
