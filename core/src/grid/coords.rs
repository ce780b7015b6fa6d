//! Combined coordinate space for the puzzle board
//!
//! Cells, border positions and intersections share one integer grid; the
//! parity of a coordinate decides which kind of element lives there:
//! `(odd, odd)` is a cell, `(even, even)` an intersection vertex, and the
//! mixed parities are the edges separating two cells.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the combined board grid.
///
/// Rows and columns are signed so reflection arithmetic can leave the
/// board before the caller bounds-checks the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Element kind determined by coordinate parity.
    pub fn kind(self) -> ElementKind {
        match (self.row & 1, self.col & 1) {
            (1, 1) => ElementKind::Cell,
            (0, 0) => ElementKind::Vertex,
            _ => ElementKind::Edge,
        }
    }

    /// Point reflection about `center`. Parity is preserved, so cells map
    /// to cells and edges to edges.
    pub fn reflect_about(self, center: Coord) -> Coord {
        Coord::new(2 * center.row - self.row, 2 * center.col - self.col)
    }

    /// The coordinate one step away: from a cell, the separating edge.
    pub fn step(self, dir: Direction) -> Coord {
        let (dr, dc) = dir.delta();
        Coord::new(self.row + dr, self.col + dc)
    }

    /// The coordinate two steps away: from a cell, the neighboring cell.
    pub fn jump(self, dir: Direction) -> Coord {
        let (dr, dc) = dir.delta();
        Coord::new(self.row + 2 * dr, self.col + 2 * dc)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What occupies a coordinate, decided by parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Cell,
    Edge,
    Vertex,
}

/// The four cardinal directions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Unit delta as `(row, col)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Stable index into per-direction arrays.
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::West => 2,
            Direction::East => 3,
        }
    }
}
