//! Forced projection: a region cannot terminate on three sides of a cell
//! without extending through the last, so the far cell in the one open
//! direction inherits the parent directly.

use super::{Deduction, Rule};
use crate::error::SolveResult;
use crate::grid::{Direction, Grid, Neighbor};

pub struct ForcedProjection;

impl Rule for ForcedProjection {
    fn id(&self) -> &'static str {
        "forced_projection"
    }

    fn apply(&self, grid: &Grid) -> SolveResult<Vec<Deduction>> {
        let mut out = Vec::new();
        for cell in grid.cells() {
            let Some(parent) = grid.parent_of(cell) else {
                continue;
            };
            let adjacent = grid.adjacent(cell);
            let mut borders = 0;
            let mut open = None;
            for dir in Direction::ALL {
                match adjacent[dir.index()] {
                    Some(Neighbor::Border(_)) => borders += 1,
                    Some(Neighbor::Cell(far)) => open = Some(far),
                    None => {}
                }
            }
            if borders == 3 {
                if let Some(far) = open {
                    if grid.parent_of(far) != Some(parent) {
                        out.push(Deduction::Assign(far, parent));
                    }
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Coord, GalaxyId};
    use crate::rules::seed_markers;

    #[test]
    fn test_projects_through_single_open_side() {
        // corner cell walled in on three sides by the frame
        let mut grid = Grid::new(3, 7, vec![Coord::new(1, 1)]).unwrap();
        seed_markers(&mut grid).unwrap();
        let deductions = ForcedProjection.apply(&grid).unwrap();
        assert!(deductions.contains(&Deduction::Assign(Coord::new(1, 3), GalaxyId(0))));
    }

    #[test]
    fn test_no_projection_with_two_open_sides() {
        let mut grid = Grid::new(5, 5, vec![Coord::new(1, 1)]).unwrap();
        seed_markers(&mut grid).unwrap();
        assert!(ForcedProjection.apply(&grid).unwrap().is_empty());
    }

    #[test]
    fn test_no_projection_when_far_cell_already_owned() {
        let mut grid = Grid::new(3, 7, vec![Coord::new(1, 2)]).unwrap();
        seed_markers(&mut grid).unwrap();
        // both cells already share the parent; nothing to emit for them
        let deductions = ForcedProjection.apply(&grid).unwrap();
        assert!(!deductions
            .iter()
            .any(|d| matches!(d, Deduction::Assign(c, _) if *c == Coord::new(1, 1))));
    }
}
