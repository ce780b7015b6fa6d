//! Board model: cells, edges, vertices and galaxy markers on one grid
//!
//! The grid mutates monotonically during propagation: a border only ever
//! flips from absent to present, and a cell's parent is set once and never
//! changes. Those two invariants are what make the fixpoint loop sound.

mod coords;

pub use coords::{Coord, Direction, ElementKind};

use crate::error::{SolveError, SolveResult};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype wrapper for galaxy identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GalaxyId(pub u32);

impl fmt::Display for GalaxyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// A galaxy: the marker coordinate it is centered on plus solver bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Galaxy {
    pub id: GalaxyId,
    /// Marker coordinate; may be a cell, edge or vertex position.
    pub center: Coord,
    /// True once the region is fully bounded; refreshed every pass.
    pub complete: bool,
}

/// What a cell sees in one direction: either the separating edge when it is
/// a proven border (blocking further reach) or the next cell two steps away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    Border(Coord),
    Cell(Coord),
}

/// Read-only view of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub parent: Option<GalaxyId>,
}

/// Read-only view of a single edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub coord: Coord,
    pub is_border: bool,
}

#[derive(Debug, Clone, Default)]
struct CellState {
    parent: Option<GalaxyId>,
    /// Remaining candidate parents; `None` until first narrowed, frozen to
    /// the parent once one is assigned.
    candidates: Option<Vec<GalaxyId>>,
}

/// The mutable facts of a grid (parents and borders), in row-major order.
///
/// Sufficient to detect any change between passes, and the serializable
/// output handed to display collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub height: i32,
    pub width: i32,
    /// One entry per cell, row-major over cell positions.
    pub parents: Vec<Option<GalaxyId>>,
    /// One entry per combined coordinate; true only at edge positions.
    pub borders: Vec<bool>,
}

/// The puzzle board. Created once from parsed input, then only updated in
/// place by the propagation rules.
#[derive(Debug, Clone)]
pub struct Grid {
    height: i32,
    width: i32,
    borders: Vec<bool>,
    cells: Vec<CellState>,
    galaxies: Vec<Galaxy>,
    markers: FxHashMap<Coord, GalaxyId>,
}

impl Grid {
    /// Build a fresh board. Dimensions must be odd and at least 3x3;
    /// markers must be distinct and lie strictly inside the outer frame.
    pub fn new(height: i32, width: i32, marker_coords: Vec<Coord>) -> SolveResult<Self> {
        if height < 3 || width < 3 || height % 2 == 0 || width % 2 == 0 {
            return Err(SolveError::MalformedInput(format!(
                "board dimensions must be odd and at least 3x3, got {height}x{width}"
            )));
        }
        let len = (height * width) as usize;
        let mut grid = Self {
            height,
            width,
            borders: vec![false; len],
            cells: vec![CellState::default(); len],
            galaxies: Vec::new(),
            markers: FxHashMap::default(),
        };
        for coord in marker_coords {
            if coord.row <= 0 || coord.col <= 0 || coord.row >= height - 1 || coord.col >= width - 1
            {
                return Err(SolveError::MalformedInput(format!(
                    "marker {coord} must lie strictly inside the board"
                )));
            }
            let id = GalaxyId(grid.galaxies.len() as u32);
            if grid.markers.insert(coord, id).is_some() {
                return Err(SolveError::MalformedInput(format!(
                    "duplicate marker at {coord}"
                )));
            }
            grid.galaxies.push(Galaxy {
                id,
                center: coord,
                complete: false,
            });
        }
        // the outer frame is a border from the start
        for col in (1..width).step_by(2) {
            let top = grid.index(Coord::new(0, col));
            let bottom = grid.index(Coord::new(height - 1, col));
            grid.borders[top] = true;
            grid.borders[bottom] = true;
        }
        for row in (1..height).step_by(2) {
            let left = grid.index(Coord::new(row, 0));
            let right = grid.index(Coord::new(row, width - 1));
            grid.borders[left] = true;
            grid.borders[right] = true;
        }
        Ok(grid)
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.row < self.height && coord.col >= 0 && coord.col < self.width
    }

    fn index(&self, coord: Coord) -> usize {
        (coord.row * self.width + coord.col) as usize
    }

    fn check_bounds(&self, coord: Coord) -> SolveResult<()> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            Err(SolveError::OutOfBounds(coord))
        }
    }

    pub fn galaxies(&self) -> &[Galaxy] {
        &self.galaxies
    }

    pub fn galaxy(&self, id: GalaxyId) -> &Galaxy {
        &self.galaxies[id.0 as usize]
    }

    /// The galaxy whose marker sits at `coord`, if any.
    pub fn marker_at(&self, coord: Coord) -> Option<GalaxyId> {
        self.markers.get(&coord).copied()
    }

    /// View of the cell at `coord`; `OutOfBounds` outside the board.
    pub fn cell_at(&self, coord: Coord) -> SolveResult<Cell> {
        self.check_bounds(coord)?;
        debug_assert_eq!(coord.kind(), ElementKind::Cell);
        Ok(Cell {
            coord,
            parent: self.cells[self.index(coord)].parent,
        })
    }

    /// View of the edge at `coord`; `OutOfBounds` outside the board.
    pub fn edge_at(&self, coord: Coord) -> SolveResult<Edge> {
        self.check_bounds(coord)?;
        debug_assert_eq!(coord.kind(), ElementKind::Edge);
        Ok(Edge {
            coord,
            is_border: self.borders[self.index(coord)],
        })
    }

    /// Parent of the cell at `coord`; `None` when unassigned or when the
    /// coordinate is off the board (convenient for candidate probing).
    pub fn parent_of(&self, cell: Coord) -> Option<GalaxyId> {
        if !self.in_bounds(cell) {
            return None;
        }
        self.cells[self.index(cell)].parent
    }

    /// Whether the edge at `coord` is a proven border; off-board reads false.
    pub fn is_border(&self, edge: Coord) -> bool {
        self.in_bounds(edge) && self.borders[self.index(edge)]
    }

    /// For each direction, the nearest element seen from `cell`: the
    /// separating edge when it is a border, otherwise the cell two steps
    /// away. Directions whose coordinates leave the board are omitted.
    pub fn adjacent(&self, cell: Coord) -> [Option<Neighbor>; 4] {
        debug_assert_eq!(cell.kind(), ElementKind::Cell);
        let mut out = [None; 4];
        for dir in Direction::ALL {
            let edge = cell.step(dir);
            if !self.in_bounds(edge) {
                continue;
            }
            if self.borders[self.index(edge)] {
                out[dir.index()] = Some(Neighbor::Border(edge));
            } else {
                let far = cell.jump(dir);
                if self.in_bounds(far) {
                    out[dir.index()] = Some(Neighbor::Cell(far));
                }
            }
        }
        out
    }

    /// Mark an edge as a proven border. Monotonic and idempotent: a border
    /// is never cleared, re-marking is a no-op. Returns whether anything
    /// changed.
    pub fn mark_border(&mut self, edge: Coord) -> SolveResult<bool> {
        self.check_bounds(edge)?;
        debug_assert_eq!(edge.kind(), ElementKind::Edge);
        let index = self.index(edge);
        if self.borders[index] {
            return Ok(false);
        }
        self.borders[index] = true;
        Ok(true)
    }

    /// Assign a cell to a galaxy. Re-assigning the same galaxy is a no-op;
    /// assigning a different one is a `Conflict`, which means the rules
    /// derived contradictory facts from an invalid board.
    pub fn assign_parent(&mut self, cell: Coord, galaxy: GalaxyId) -> SolveResult<bool> {
        self.check_bounds(cell)?;
        debug_assert_eq!(cell.kind(), ElementKind::Cell);
        let index = self.index(cell);
        match self.cells[index].parent {
            Some(existing) if existing == galaxy => Ok(false),
            Some(existing) => Err(SolveError::Conflict(format!(
                "cell {cell} already belongs to {existing}, cannot assign {galaxy}"
            ))),
            None => {
                self.cells[index].parent = Some(galaxy);
                self.cells[index].candidates = Some(vec![galaxy]);
                Ok(true)
            }
        }
    }

    /// The remembered candidate parents of a cell; `None` means the set has
    /// never been narrowed (every galaxy is still possible).
    pub fn candidates_of(&self, cell: Coord) -> Option<&[GalaxyId]> {
        if !self.in_bounds(cell) {
            return None;
        }
        self.cells[self.index(cell)].candidates.as_deref()
    }

    /// Intersect the remembered candidate set with `allowed`. Candidate
    /// sets only shrink; an assigned cell's set is frozen. Returns whether
    /// the set changed.
    pub fn restrict_candidates(&mut self, cell: Coord, allowed: &[GalaxyId]) -> SolveResult<bool> {
        self.check_bounds(cell)?;
        debug_assert_eq!(cell.kind(), ElementKind::Cell);
        let index = self.index(cell);
        if self.cells[index].parent.is_some() {
            return Ok(false);
        }
        let next: Vec<GalaxyId> = match &self.cells[index].candidates {
            None => {
                let mut set = allowed.to_vec();
                set.sort_unstable();
                set.dedup();
                set
            }
            Some(previous) => previous
                .iter()
                .copied()
                .filter(|g| allowed.contains(g))
                .collect(),
        };
        let changed = self.cells[index].candidates.as_deref() != Some(next.as_slice());
        self.cells[index].candidates = Some(next);
        Ok(changed)
    }

    pub(crate) fn set_complete(&mut self, id: GalaxyId, complete: bool) {
        self.galaxies[id.0 as usize].complete = complete;
    }

    /// All cell coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (height, width) = (self.height, self.width);
        (1..height)
            .step_by(2)
            .flat_map(move |row| (1..width).step_by(2).map(move |col| Coord::new(row, col)))
    }

    /// The cells currently assigned to `galaxy`.
    pub fn cells_of(&self, galaxy: GalaxyId) -> FxHashSet<Coord> {
        self.cells()
            .filter(|c| self.parent_of(*c) == Some(galaxy))
            .collect()
    }

    /// Capture the mutable facts for fixpoint comparison or output.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            height: self.height,
            width: self.width,
            parents: self.cells().map(|c| self.parent_of(c)).collect(),
            borders: self.borders.clone(),
        }
    }
}
