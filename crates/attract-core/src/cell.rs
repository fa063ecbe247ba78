//! The [`Cell`] grid coordinate.

use std::fmt;

/// A grid cell addressed by `(row, col)`.
///
/// Used both as an index into row-major grid storage and as a set key
/// for source membership. Ordering is row-major: cells compare by row
/// first, then by column.
///
/// ```
/// use attract_core::Cell;
///
/// let a = Cell::new(1, 4);
/// let b: Cell = (2, 0).into();
/// assert!(a < b);
/// assert_eq!(a.to_string(), "(1, 4)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, `0 <= row < rows`.
    pub row: u32,
    /// Column index, `0 <= col < cols`.
    pub col: u32,
}

impl Cell {
    /// Create a cell at `(row, col)`.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Whether this cell lies inside a `rows x cols` grid.
    pub fn in_bounds(self, rows: u32, cols: u32) -> bool {
        self.row < rows && self.col < cols
    }

    /// Row-major flat index of this cell in a grid with `cols` columns.
    ///
    /// The caller is responsible for checking bounds first.
    pub fn flat_index(self, cols: u32) -> usize {
        self.row as usize * cols as usize + self.col as usize
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    pub fn from_flat_index(index: usize, cols: u32) -> Self {
        let cols = cols as usize;
        Self {
            row: (index / cols) as u32,
            col: (index % cols) as u32,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (u32, u32) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}
