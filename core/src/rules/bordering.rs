//! Inter-galaxy bordering: adjacent cells with different known parents are
//! provably in different regions, so the edge between them is a border.

use super::{Deduction, Rule};
use crate::error::SolveResult;
use crate::grid::{Direction, Grid, Neighbor};

pub struct InterGalaxyBordering;

impl Rule for InterGalaxyBordering {
    fn id(&self) -> &'static str {
        "inter_galaxy_bordering"
    }

    fn apply(&self, grid: &Grid) -> SolveResult<Vec<Deduction>> {
        let mut out = Vec::new();
        for cell in grid.cells() {
            let Some(parent) = grid.parent_of(cell) else {
                continue;
            };
            let adjacent = grid.adjacent(cell);
            for dir in Direction::ALL {
                if let Some(Neighbor::Cell(next)) = adjacent[dir.index()] {
                    if matches!(grid.parent_of(next), Some(other) if other != parent) {
                        out.push(Deduction::Border(cell.step(dir)));
                    }
                }
            }
        }
        Ok(out)
    }
}
