//! Symmetry resolver
//!
//! Computes the point-reflected "twin" of a grid element about a galaxy
//! center and the set of cells a galaxy could currently own, by symmetric
//! breadth-first expansion from its marker.

use crate::grid::{Coord, ElementKind, GalaxyId, Grid, Neighbor};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Point reflection of `coord` about `center`, bounds-checked against the
/// grid. `None` means the twin leaves the board, which callers read as
/// "the galaxy centered there can never own `coord`", not as an error.
pub fn twin_of(grid: &Grid, coord: Coord, center: Coord) -> Option<Coord> {
    let twin = coord.reflect_about(center);
    grid.in_bounds(twin).then_some(twin)
}

/// Result of a symmetric expansion from a galaxy's marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Cells reachable from the marker that could still belong to it.
    pub cells: FxHashSet<Coord>,
    /// True if the expansion ran into a cell confirmed to belong to a
    /// different galaxy, i.e. the region is not yet bounded. Not a
    /// validity judgement.
    pub open: bool,
}

/// Symmetric breadth-first expansion from `galaxy`'s marker.
///
/// A neighboring cell joins the group when it is unassigned or assigned to
/// this same galaxy, provided its twin about the center lies on the board
/// and is not confirmed to belong to someone else. Expansion never crosses
/// a border. Pure query; the grid is not mutated.
pub fn group_of(grid: &Grid, galaxy: GalaxyId) -> Group {
    let center = grid.galaxy(galaxy).center;
    let mut cells = FxHashSet::default();
    let mut frontier: VecDeque<Coord> = seed_cells(center)
        .into_iter()
        .filter(|c| grid.in_bounds(*c))
        .collect();
    for cell in &frontier {
        cells.insert(*cell);
    }
    let mut open = false;
    while let Some(cell) = frontier.pop_front() {
        for neighbor in grid.adjacent(cell).into_iter().flatten() {
            let next = match neighbor {
                Neighbor::Border(_) => continue,
                Neighbor::Cell(c) => c,
            };
            if cells.contains(&next) {
                continue;
            }
            match grid.parent_of(next) {
                Some(parent) if parent == galaxy => {}
                Some(_) => {
                    open = true;
                    continue;
                }
                None => {
                    // membership is impossible if the twin falls off the
                    // board or is already someone else's
                    let Some(twin) = twin_of(grid, next, center) else {
                        continue;
                    };
                    if matches!(grid.parent_of(twin), Some(p) if p != galaxy) {
                        continue;
                    }
                }
            }
            cells.insert(next);
            frontier.push_back(next);
        }
    }
    Group { cells, open }
}

/// Expansion seeds: the cell itself for a cell-centered marker, the two
/// separated cells for an edge marker, one diagonal twin pair for a vertex
/// marker (the other pair is reached by expansion).
pub(crate) fn seed_cells(center: Coord) -> Vec<Coord> {
    match center.kind() {
        ElementKind::Cell => vec![center],
        ElementKind::Edge => edge_sides(center),
        ElementKind::Vertex => vec![
            Coord::new(center.row - 1, center.col - 1),
            Coord::new(center.row + 1, center.col + 1),
        ],
    }
}

/// Every cell a marker touches directly: one for a cell-centered marker,
/// two for an edge marker, the four diagonals for a vertex marker. These
/// are the trivial seed facts of a solve.
pub(crate) fn touching_cells(center: Coord) -> Vec<Coord> {
    match center.kind() {
        ElementKind::Cell => vec![center],
        ElementKind::Edge => edge_sides(center),
        ElementKind::Vertex => vec![
            Coord::new(center.row - 1, center.col - 1),
            Coord::new(center.row - 1, center.col + 1),
            Coord::new(center.row + 1, center.col - 1),
            Coord::new(center.row + 1, center.col + 1),
        ],
    }
}

/// The two cells an edge-centered marker separates.
fn edge_sides(center: Coord) -> Vec<Coord> {
    if center.row % 2 == 0 {
        vec![
            Coord::new(center.row - 1, center.col),
            Coord::new(center.row + 1, center.col),
        ]
    } else {
        vec![
            Coord::new(center.row, center.col - 1),
            Coord::new(center.row, center.col + 1),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twin_of_in_bounds() {
        let grid = Grid::new(7, 7, vec![Coord::new(3, 3)]).unwrap();
        assert_eq!(
            twin_of(&grid, Coord::new(1, 1), Coord::new(3, 3)),
            Some(Coord::new(5, 5))
        );
    }

    #[test]
    fn test_twin_of_out_of_bounds() {
        let grid = Grid::new(7, 7, vec![Coord::new(1, 1)]).unwrap();
        // reflecting (3, 1) about (1, 1) leaves the board
        assert_eq!(twin_of(&grid, Coord::new(3, 1), Coord::new(1, 1)), None);
    }

    #[test]
    fn test_seed_cells_by_marker_kind() {
        assert_eq!(seed_cells(Coord::new(3, 3)), vec![Coord::new(3, 3)]);
        assert_eq!(
            seed_cells(Coord::new(2, 3)),
            vec![Coord::new(1, 3), Coord::new(3, 3)]
        );
        assert_eq!(
            seed_cells(Coord::new(3, 2)),
            vec![Coord::new(3, 1), Coord::new(3, 3)]
        );
        assert_eq!(
            seed_cells(Coord::new(2, 2)),
            vec![Coord::new(1, 1), Coord::new(3, 3)]
        );
    }

    #[test]
    fn test_touching_cells_vertex() {
        let cells = touching_cells(Coord::new(2, 2));
        assert_eq!(cells.len(), 4);
        assert!(cells.contains(&Coord::new(1, 1)));
        assert!(cells.contains(&Coord::new(1, 3)));
        assert!(cells.contains(&Coord::new(3, 1)));
        assert!(cells.contains(&Coord::new(3, 3)));
    }

    #[test]
    fn test_group_covers_open_board() {
        let grid = Grid::new(7, 7, vec![Coord::new(3, 3)]).unwrap();
        let group = group_of(&grid, GalaxyId(0));
        assert_eq!(group.cells.len(), 9);
        assert!(!group.open);
    }

    #[test]
    fn test_group_excludes_cells_with_offboard_twin() {
        // marker in the top-left cell: only that cell has an in-bounds twin
        let grid = Grid::new(5, 5, vec![Coord::new(1, 1)]).unwrap();
        let group = group_of(&grid, GalaxyId(0));
        assert_eq!(group.cells.len(), 1);
        assert!(group.cells.contains(&Coord::new(1, 1)));
        assert!(!group.cells.contains(&Coord::new(3, 1)));
        assert!(!group.cells.contains(&Coord::new(1, 3)));
    }

    #[test]
    fn test_group_blocked_by_border() {
        let mut grid = Grid::new(3, 7, vec![Coord::new(1, 3)]).unwrap();
        grid.mark_border(Coord::new(1, 2)).unwrap();
        let group = group_of(&grid, GalaxyId(0));
        // the border cuts off the west cell even though its twin is fine
        assert!(!group.cells.contains(&Coord::new(1, 1)));
        assert!(group.cells.contains(&Coord::new(1, 3)));
        assert!(group.cells.contains(&Coord::new(1, 5)));
    }

    #[test]
    fn test_group_open_when_touching_foreign_cell() {
        let mut grid = Grid::new(3, 7, vec![Coord::new(1, 3), Coord::new(1, 5)]).unwrap();
        grid.assign_parent(Coord::new(1, 3), GalaxyId(0)).unwrap();
        grid.assign_parent(Coord::new(1, 5), GalaxyId(1)).unwrap();
        let group = group_of(&grid, GalaxyId(0));
        assert!(group.open);
        assert!(!group.cells.contains(&Coord::new(1, 5)));
    }

    #[test]
    fn test_group_skips_cell_whose_twin_is_foreign() {
        let mut grid = Grid::new(3, 11, vec![Coord::new(1, 5)]).unwrap();
        // the twin of (1, 3) about the center is (1, 7); claim it for a
        // hypothetical second galaxy
        let mut grid2 = Grid::new(3, 11, vec![Coord::new(1, 5), Coord::new(1, 9)]).unwrap();
        grid2.assign_parent(Coord::new(1, 7), GalaxyId(1)).unwrap();
        let group = group_of(&grid2, GalaxyId(0));
        assert!(!group.cells.contains(&Coord::new(1, 3)));
        // sanity: without the claim the cell joins
        grid.assign_parent(Coord::new(1, 5), GalaxyId(0)).unwrap();
        let free = group_of(&grid, GalaxyId(0));
        assert!(free.cells.contains(&Coord::new(1, 3)));
    }
}
