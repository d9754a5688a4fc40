#![warn(missing_docs)]

use super::{COLS, GridPoint, ROWS};
use crate::error::NavigationError;

/// Semantic state of a single grid cell.
/// The state decides both traversability and how the cell is drawn.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Free cell, nothing placed on it
    #[default]
    Empty,
    /// Blocked cell, never entered by a path
    Wall,
    /// The cell the search starts from
    Start,
    /// The cell the search is trying to reach
    Goal,
    /// Intermediate cell of the last path found
    Path,
}

impl CellState {
    /// Single-character glyph used by the ASCII rendering.
    pub fn glyph(&self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::Goal => 'E',
            CellState::Path => '*',
        }
    }

    /// Returns true if a path may step onto a cell in this state.
    pub fn is_traversable(&self) -> bool {
        !matches!(self, CellState::Wall)
    }
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellState::Empty => write!(f, "Empty"),
            CellState::Wall => write!(f, "Wall"),
            CellState::Start => write!(f, "Start"),
            CellState::Goal => write!(f, "Goal"),
            CellState::Path => write!(f, "Path"),
        }
    }
}

/// Snapshot of every cell, indexed `[row][col]`.
pub type Cells = [[CellState; COLS]; ROWS];

/// The fixed `ROWS`x`COLS` grid with a semantic state per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Cells,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a grid with every cell `Empty`.
    pub fn new() -> Self {
        Grid {
            cells: [[CellState::Empty; COLS]; ROWS],
        }
    }

    /// Sets every cell back to `Empty`.
    pub fn reset(&mut self) {
        self.cells = [[CellState::Empty; COLS]; ROWS];
    }

    /// Returns true if `p` lies inside the grid.
    pub fn contains(&self, p: GridPoint) -> bool {
        p.in_bounds()
    }

    /// Sets the state of a single cell. The last write wins, so placing
    /// `Start` on a `Wall` removes the wall.
    ///
    /// # Arguments
    /// * `p` - Cell to overwrite
    /// * `state` - New state of the cell
    ///
    /// # Returns
    /// * `Result<(), NavigationError>` - Success or error if `p` is out of bounds
    pub fn place(&mut self, p: GridPoint, state: CellState) -> Result<(), NavigationError> {
        let cell = self.state_mut(p)?;
        *cell = state;
        Ok(())
    }

    /// Gets the state of the cell at `p`.
    ///
    /// # Returns
    /// * `Result<CellState, NavigationError>` - The state or an error if out of bounds
    pub fn state(&self, p: GridPoint) -> Result<CellState, NavigationError> {
        if self.contains(p) {
            Ok(self.cells[p.row][p.col])
        } else {
            Err(NavigationError::OutOfBounds("Grid point outside the 10x10 grid"))
        }
    }

    fn state_mut(&mut self, p: GridPoint) -> Result<&mut CellState, NavigationError> {
        if self.contains(p) {
            Ok(&mut self.cells[p.row][p.col])
        } else {
            Err(NavigationError::OutOfBounds("Grid point outside the 10x10 grid"))
        }
    }

    /// Point query by raw row and column, as used by cell-at-a-time renderers.
    pub fn cell_state_at(&self, row: usize, col: usize) -> Result<CellState, NavigationError> {
        self.state(GridPoint::new(row, col))
    }

    /// Orthogonal neighbors of `p` that a path may step onto.
    ///
    /// Order is always up, down, left, right. Out-of-bounds and `Wall`
    /// neighbors are left out.
    pub fn neighbors(&self, p: GridPoint) -> Vec<GridPoint> {
        let mut neighbors = Vec::with_capacity(4);
        let candidates = [
            p.row.checked_sub(1).map(|row| GridPoint::new(row, p.col)), // Up
            p.row.checked_add(1).map(|row| GridPoint::new(row, p.col)), // Down
            p.col.checked_sub(1).map(|col| GridPoint::new(p.row, col)), // Left
            p.col.checked_add(1).map(|col| GridPoint::new(p.row, col)), // Right
        ];
        for neighbor in candidates.into_iter().flatten() {
            if matches!(self.state(neighbor), Ok(state) if state.is_traversable()) {
                neighbors.push(neighbor);
            }
        }
        neighbors
    }

    /// Copy of all cell states, indexed `[row][col]`.
    pub fn cells(&self) -> Cells {
        self.cells
    }

    /// Iterates over every cell in row-major order together with its position.
    pub fn iter(&self) -> impl Iterator<Item = (GridPoint, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, state)| (GridPoint::new(row, col), *state))
        })
    }

    /// Number of cells currently holding `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.iter().filter(|(_, s)| *s == state).count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.cells {
            for (col, state) in line.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", state.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new();
        assert_eq!(grid.count(CellState::Empty), ROWS * COLS);
        assert_eq!(grid.cells().len(), ROWS);
    }

    #[test]
    fn test_place_and_reset() {
        let mut grid = Grid::new();
        let p = GridPoint::new(3, 4);

        grid.place(p, CellState::Wall).unwrap();
        assert_eq!(grid.state(p).unwrap(), CellState::Wall);
        assert_eq!(grid.cell_state_at(3, 4).unwrap(), CellState::Wall);

        // Last write wins
        grid.place(p, CellState::Start).unwrap();
        assert_eq!(grid.state(p).unwrap(), CellState::Start);
        assert_eq!(grid.count(CellState::Wall), 0);

        grid.place(GridPoint::new(9, 9), CellState::Goal).unwrap();
        grid.reset();
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new();
        assert!(matches!(
            grid.place(GridPoint::new(10, 0), CellState::Wall),
            Err(NavigationError::OutOfBounds(_))
        ));
        assert!(matches!(
            grid.cell_state_at(0, 10),
            Err(NavigationError::OutOfBounds(_))
        ));
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_neighbors_order_and_filtering() {
        let mut grid = Grid::new();
        let center = GridPoint::new(5, 5);
        assert_eq!(
            grid.neighbors(center),
            vec![
                GridPoint::new(4, 5),
                GridPoint::new(6, 5),
                GridPoint::new(5, 4),
                GridPoint::new(5, 6),
            ]
        );

        grid.place(GridPoint::new(6, 5), CellState::Wall).unwrap();
        grid.place(GridPoint::new(5, 4), CellState::Goal).unwrap();
        assert_eq!(
            grid.neighbors(center),
            vec![
                GridPoint::new(4, 5),
                GridPoint::new(5, 4),
                GridPoint::new(5, 6),
            ]
        );
    }

    #[test]
    fn test_neighbors_at_corners() {
        let grid = Grid::new();
        assert_eq!(
            grid.neighbors(GridPoint::new(0, 0)),
            vec![GridPoint::new(1, 0), GridPoint::new(0, 1)]
        );
        assert_eq!(
            grid.neighbors(GridPoint::new(9, 9)),
            vec![GridPoint::new(8, 9), GridPoint::new(9, 8)]
        );
    }

    #[test]
    fn test_neighbors_far_outside_grid() {
        let grid = Grid::new();
        assert!(grid.neighbors(GridPoint::new(usize::MAX, 0)).is_empty());
        assert!(grid.neighbors(GridPoint::new(0, usize::MAX)).is_empty());
        assert!(grid.neighbors(GridPoint::new(usize::MAX, usize::MAX)).is_empty());
        // Just past the last row, only the cell above is inside the grid
        assert_eq!(grid.neighbors(GridPoint::new(ROWS, 3)), vec![GridPoint::new(ROWS - 1, 3)]);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new();
        grid.place(GridPoint::new(0, 0), CellState::Start).unwrap();
        grid.place(GridPoint::new(0, 1), CellState::Path).unwrap();
        grid.place(GridPoint::new(1, 1), CellState::Wall).unwrap();
        grid.place(GridPoint::new(9, 9), CellState::Goal).unwrap();

        let display_str = format!("{}", grid);
        let lines: Vec<&str> = display_str.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "S * . . . . . . . .");
        assert_eq!(lines[1], ". # . . . . . . . .");
        assert_eq!(lines[9], ". . . . . . . . . E");
    }
}
