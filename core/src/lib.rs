//! Galaxies deduction engine
//!
//! Deduces the solution of a "Galaxies" logic puzzle: partition a
//! rectangular grid into regions, each centered on a marked point and
//! symmetric under 180 degree rotation about it, by running a set of
//! monotonic propagation rules to a fixpoint.

pub mod error;
pub mod grid;     // Board model (cells, edges, vertices, markers)
pub mod symmetry; // Twin computation and symmetric group expansion
pub mod rules;    // Propagation rules
pub mod solver;   // Fixpoint driver
pub mod loader;   // Board text loader
pub mod render;   // Plain text board rendering

pub use error::{SolveError, SolveResult};
pub use grid::{
    Cell, Coord, Direction, Edge, ElementKind, Galaxy, GalaxyId, Grid, Neighbor, Snapshot,
};
pub use loader::parse_board;
pub use render::render;
pub use rules::{all_rules, seed_markers, Deduction, Rule};
pub use solver::{SolveReport, Solver, SolverConfig, Verdict};
pub use symmetry::{group_of, twin_of, Group};
