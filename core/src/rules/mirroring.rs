//! Twin mirroring: rotational symmetry forces an assigned cell's point
//! reflection into the same galaxy, and mirrors its borders to the
//! opposite side of the twin.

use super::{Deduction, Rule};
use crate::error::{SolveError, SolveResult};
use crate::grid::{Direction, Grid};

pub struct TwinMirroring;

impl Rule for TwinMirroring {
    fn id(&self) -> &'static str {
        "twin_mirroring"
    }

    fn apply(&self, grid: &Grid) -> SolveResult<Vec<Deduction>> {
        let mut out = Vec::new();
        for cell in grid.cells() {
            let Some(parent) = grid.parent_of(cell) else {
                continue;
            };
            let center = grid.galaxy(parent).center;
            let twin = cell.reflect_about(center);
            if !grid.in_bounds(twin) {
                // an assigned cell whose twin leaves the board cannot be
                // part of any valid region; the board is contradictory
                return Err(SolveError::Conflict(format!(
                    "assigned cell {cell} reflects outside the board about {center}"
                )));
            }
            if grid.parent_of(twin) != Some(parent) {
                // a twin already owned by someone else surfaces as a
                // Conflict when this assignment is applied
                out.push(Deduction::Assign(twin, parent));
            }
            for dir in Direction::ALL {
                if grid.is_border(cell.step(dir)) {
                    let mirrored = twin.step(dir.opposite());
                    if grid.in_bounds(mirrored) && !grid.is_border(mirrored) {
                        out.push(Deduction::Border(mirrored));
                    }
                }
            }
        }
        Ok(out)
    }
}
