//! Board text loader
//!
//! Parses the character matrix a capture collaborator delivers: one
//! character per combined coordinate, `o` marking a galaxy center.
//! Gridline artifacts (`|`, `-`, `+`, `W`) and any prior partial-solution
//! borders are ignored; the engine always starts from a fresh unsolved
//! board with only the outer frame set.

use crate::error::{SolveError, SolveResult};
use crate::grid::{Coord, Grid};

/// Marker symbol in board text.
const MARKER: char = 'o';

/// Parse clipboard-style board text into a fresh grid.
///
/// Lines may be ragged (trailing whitespace stripped by the source); the
/// board width is the longest line. Dimension and marker validation is
/// done by [`Grid::new`].
pub fn parse_board(text: &str) -> SolveResult<Grid> {
    let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(SolveError::MalformedInput("empty board text".to_string()));
    }
    let height = lines.len() as i32;
    let width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as i32;
    let mut markers = Vec::new();
    for (row, line) in lines.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch == MARKER {
                markers.push(Coord::new(row as i32, col as i32));
            }
        }
    }
    if markers.is_empty() {
        return Err(SolveError::MalformedInput(
            "board has no galaxy markers".to_string(),
        ));
    }
    Grid::new(height, width, markers)
}
