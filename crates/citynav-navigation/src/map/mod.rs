//! Grid model: cell coordinates and per-cell semantic state.

/// Cell states and the grid itself.
pub mod grid;
/// Grid coordinates.
pub mod point;

pub use grid::{CellState, Cells, Grid};
pub use point::GridPoint;

/// Number of rows in the grid.
pub const ROWS: usize = 10;
/// Number of columns in the grid.
pub const COLS: usize = 10;
