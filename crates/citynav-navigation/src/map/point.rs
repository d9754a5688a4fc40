use super::{COLS, ROWS};

/// Represents a cell position in grid coordinates (row and column indices).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// The row index, counted from the top of the grid.
    pub row: usize,
    /// The column index, counted from the left of the grid.
    pub col: usize,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell on the main diagonal for a label index, `(index, index)`.
    #[must_use]
    pub const fn diagonal(index: usize) -> Self {
        Self { row: index, col: index }
    }

    /// Returns true if the point lies inside the `ROWS`x`COLS` grid.
    #[must_use]
    pub const fn in_bounds(&self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Flat index of the point in row-major order.
    /// Only meaningful for in-bounds points.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.row * COLS + self.col
    }

    /// Inverse of [`GridPoint::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / COLS,
            col: index % COLS,
        }
    }

    /// Returns true if `other` shares an edge with this point.
    #[must_use]
    pub fn is_adjacent(&self, other: &GridPoint) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip_corners() {
        let last = GridPoint::new(ROWS - 1, COLS - 1);
        assert_eq!(GridPoint::new(0, 0).index(), 0);
        assert_eq!(last.index(), ROWS * COLS - 1);
        assert_eq!(GridPoint::from_index(last.index()), last);
        assert_eq!(GridPoint::from_index(COLS + 3), GridPoint::new(1, 3));
    }

    #[test]
    fn test_bounds_and_adjacency() {
        assert!(GridPoint::new(9, 9).in_bounds());
        assert!(!GridPoint::new(10, 0).in_bounds());
        assert!(!GridPoint::new(0, 10).in_bounds());

        let p = GridPoint::new(4, 4);
        assert!(p.is_adjacent(&GridPoint::new(3, 4)));
        assert!(p.is_adjacent(&GridPoint::new(4, 5)));
        assert!(!p.is_adjacent(&GridPoint::new(5, 5)));
        assert!(!p.is_adjacent(&p));
        assert_eq!(GridPoint::diagonal(7), GridPoint::new(7, 7));
    }
}
