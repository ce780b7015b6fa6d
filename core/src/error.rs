//! Engine error types

use crate::grid::Coord;
use thiserror::Error;

/// Errors surfaced by the deduction engine.
///
/// `OutOfBounds` is expected during candidate evaluation and means "this
/// rule does not apply here"; it is never fatal on its own. `Conflict`
/// means two deductions contradict each other, which only happens on an
/// invalid or unsolvable board, so propagation must stop. `MalformedInput`
/// is detected once at construction, before any pass runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("conflicting deduction: {0}")]
    Conflict(String),

    #[error("malformed board: {0}")]
    MalformedInput(String),
}

/// Result type for engine operations
pub type SolveResult<T> = Result<T, SolveError>;
