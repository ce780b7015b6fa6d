//! Propagation rules
//!
//! Each rule is a pure reader over the grid that produces monotonic
//! deductions. The driver applies one rule's deductions before running the
//! next, so later rules in the same pass observe updated state. Rule order
//! affects convergence speed, not the final fixpoint: every rule only adds
//! facts consistent with the current invariants.

pub mod bordering;
pub mod elimination;
pub mod mirroring;
pub mod projection;
pub mod regions;

pub use bordering::InterGalaxyBordering;
pub use elimination::EliminationByUniqueness;
pub use mirroring::TwinMirroring;
pub use projection::ForcedProjection;
pub use regions::EmptyGroupResolution;

use crate::error::SolveResult;
use crate::grid::{Coord, GalaxyId, Grid};
use crate::symmetry;

/// A single monotonic fact produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deduction {
    /// Assign a cell to a galaxy.
    Assign(Coord, GalaxyId),
    /// Mark an edge as a proven border.
    Border(Coord),
    /// Shrink a cell's candidate parents to the given set.
    Restrict(Coord, Vec<GalaxyId>),
}

/// Rule trait - all propagation rules implement this
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Read the grid and produce deductions not yet reflected in it.
    fn apply(&self, grid: &Grid) -> SolveResult<Vec<Deduction>>;
}

/// Get all propagation rules, in application order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(InterGalaxyBordering),
        Box::new(TwinMirroring),
        Box::new(ForcedProjection),
        Box::new(EmptyGroupResolution),
        Box::new(EliminationByUniqueness),
    ]
}

/// Seed assignment: every cell directly touching a marker belongs to that
/// marker's galaxy. Runs once before the pass loop, not per pass. Two
/// markers claiming the same cell is a `Conflict`.
pub fn seed_markers(grid: &mut Grid) -> SolveResult<()> {
    let seeds: Vec<(Coord, GalaxyId)> = grid
        .galaxies()
        .iter()
        .flat_map(|galaxy| {
            symmetry::touching_cells(galaxy.center)
                .into_iter()
                .map(move |cell| (cell, galaxy.id))
        })
        .collect();
    for (cell, galaxy) in seeds {
        grid.assign_parent(cell, galaxy)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    #[test]
    fn test_seed_markers_by_kind() {
        // a vertex marker claims its four diagonal cells, an edge marker
        // the two cells it separates, a cell marker just itself
        let mut grid = Grid::new(7, 7, vec![Coord::new(2, 2), Coord::new(5, 4)]).unwrap();
        seed_markers(&mut grid).unwrap();
        for cell in [
            Coord::new(1, 1),
            Coord::new(1, 3),
            Coord::new(3, 1),
            Coord::new(3, 3),
        ] {
            assert_eq!(grid.parent_of(cell), Some(GalaxyId(0)));
        }
        assert_eq!(grid.parent_of(Coord::new(5, 3)), Some(GalaxyId(1)));
        assert_eq!(grid.parent_of(Coord::new(5, 5)), Some(GalaxyId(1)));
        assert_eq!(grid.parent_of(Coord::new(5, 1)), None);
    }

    #[test]
    fn test_seed_markers_overlap_is_conflict() {
        // two vertex markers sharing a touching cell
        let mut grid = Grid::new(7, 7, vec![Coord::new(2, 2), Coord::new(2, 4)]).unwrap();
        assert!(matches!(
            seed_markers(&mut grid),
            Err(SolveError::Conflict(_))
        ));
    }
}
