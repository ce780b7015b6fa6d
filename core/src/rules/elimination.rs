//! Elimination by uniqueness: an unassigned cell whose candidate parents
//! narrow to exactly one galaxy belongs to it.
//!
//! A galaxy stays a candidate only if the cell's twin about its marker is
//! on the board, is not another galaxy's marker or territory, no existing
//! border separates the cell from that galaxy's own cells, and the
//! symmetric expansion from the marker actually reaches the cell. The last
//! check keeps the rule from assigning a cell to a galaxy whose region
//! cannot geometrically reach it.

use super::{Deduction, Rule};
use crate::error::SolveResult;
use crate::grid::{Coord, Direction, GalaxyId, Grid};
use crate::symmetry::{self, Group};

pub struct EliminationByUniqueness;

impl Rule for EliminationByUniqueness {
    fn id(&self) -> &'static str {
        "elimination_by_uniqueness"
    }

    fn apply(&self, grid: &Grid) -> SolveResult<Vec<Deduction>> {
        // group_of is a pure query; compute each galaxy's reach once
        let groups: Vec<Group> = grid
            .galaxies()
            .iter()
            .map(|galaxy| symmetry::group_of(grid, galaxy.id))
            .collect();
        let mut out = Vec::new();
        for cell in grid.cells() {
            if grid.parent_of(cell).is_some() {
                continue;
            }
            let mut candidates = Vec::new();
            for galaxy in grid.galaxies() {
                let Some(twin) = symmetry::twin_of(grid, cell, galaxy.center) else {
                    continue;
                };
                if matches!(grid.marker_at(twin), Some(other) if other != galaxy.id) {
                    continue;
                }
                if matches!(grid.parent_of(twin), Some(other) if other != galaxy.id) {
                    continue;
                }
                if blocked_by_border(grid, cell, galaxy.id) {
                    continue;
                }
                if !groups[galaxy.id.0 as usize].cells.contains(&cell) {
                    continue;
                }
                candidates.push(galaxy.id);
            }
            let remaining: Vec<GalaxyId> = match grid.candidates_of(cell) {
                Some(previous) => previous
                    .iter()
                    .copied()
                    .filter(|g| candidates.contains(g))
                    .collect(),
                None => candidates,
            };
            out.push(Deduction::Restrict(cell, remaining.clone()));
            if let [galaxy] = remaining[..] {
                out.push(Deduction::Assign(cell, galaxy));
            }
        }
        Ok(out)
    }
}

/// A border between `cell` and a neighbor already confirmed in `galaxy`
/// rules the galaxy out: borders only ever separate different regions.
fn blocked_by_border(grid: &Grid, cell: Coord, galaxy: GalaxyId) -> bool {
    Direction::ALL.iter().any(|&dir| {
        grid.is_border(cell.step(dir)) && grid.parent_of(cell.jump(dir)) == Some(galaxy)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::seed_markers;

    #[test]
    fn test_assigns_unique_candidate() {
        // the corner cell's twin about the far galaxy leaves the board, so
        // only the near galaxy survives
        let mut grid = Grid::new(3, 11, vec![Coord::new(1, 3), Coord::new(1, 9)]).unwrap();
        seed_markers(&mut grid).unwrap();
        let deductions = EliminationByUniqueness.apply(&grid).unwrap();
        assert!(deductions.contains(&Deduction::Assign(Coord::new(1, 1), GalaxyId(0))));
    }

    #[test]
    fn test_two_candidates_only_restrict() {
        // both galaxies can still reach the middle cell
        let mut grid = Grid::new(3, 11, vec![Coord::new(1, 3), Coord::new(1, 7)]).unwrap();
        seed_markers(&mut grid).unwrap();
        let middle = Coord::new(1, 5);
        let deductions = EliminationByUniqueness.apply(&grid).unwrap();
        assert!(!deductions
            .iter()
            .any(|d| matches!(d, Deduction::Assign(c, _) if *c == middle)));
        let restrict = deductions
            .iter()
            .find(|d| matches!(d, Deduction::Restrict(c, _) if *c == middle))
            .expect("middle cell should be restricted");
        if let Deduction::Restrict(_, set) = restrict {
            assert_eq!(set.len(), 2);
        }
    }

    #[test]
    fn test_twin_on_foreign_marker_disqualifies() {
        // the twin of the probe cell about galaxy 0 lands on galaxy 1's
        // marker cell, so galaxy 0 is ruled out
        let mut grid = Grid::new(3, 11, vec![Coord::new(1, 5), Coord::new(1, 7)]).unwrap();
        seed_markers(&mut grid).unwrap();
        let deductions = EliminationByUniqueness.apply(&grid).unwrap();
        let restrict = deductions
            .iter()
            .find(|d| matches!(d, Deduction::Restrict(c, _) if *c == Coord::new(1, 3)))
            .expect("probe cell should be restricted");
        if let Deduction::Restrict(_, set) = restrict {
            assert!(!set.contains(&GalaxyId(0)));
        }
    }

    #[test]
    fn test_border_to_own_cell_disqualifies() {
        let mut grid = Grid::new(3, 7, vec![Coord::new(1, 3)]).unwrap();
        seed_markers(&mut grid).unwrap();
        grid.mark_border(Coord::new(1, 2)).unwrap();
        // (1, 1) sits across a border from galaxy 0's marker cell
        let deductions = EliminationByUniqueness.apply(&grid).unwrap();
        let restrict = deductions
            .iter()
            .find(|d| matches!(d, Deduction::Restrict(c, _) if *c == Coord::new(1, 1)))
            .expect("walled cell should be restricted");
        if let Deduction::Restrict(_, set) = restrict {
            assert!(set.is_empty());
        }
    }
}
