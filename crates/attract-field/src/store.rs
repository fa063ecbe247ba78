//! Row-major storage of one [`Distance`] per grid cell.

use crate::error::FieldError;
use attract_core::{Cell, Distance};
use std::fmt;

/// A `rows x cols` array of [`Distance`] values.
///
/// Pure storage with no algorithmic behavior. Every cell starts
/// [`Distance::Unknown`].
///
/// Indexing with a cell outside the grid is a programming error:
/// [`get`](Self::get) and [`set`](Self::set) panic rather than clamp.
/// [`try_get`](Self::try_get) is the checked alternative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceStore {
    rows: u32,
    cols: u32,
    cells: Vec<Distance>,
}

impl DistanceStore {
    /// Create an all-`Unknown` store.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Distance::Unknown; rows as usize * cols as usize],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Distance stored at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn get(&self, cell: Cell) -> Distance {
        self.cells[self.index(cell)]
    }

    /// Overwrite the distance stored at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn set(&mut self, cell: Cell, value: Distance) {
        let idx = self.index(cell);
        self.cells[idx] = value;
    }

    /// Checked [`get`](Self::get).
    pub fn try_get(&self, cell: Cell) -> Result<Distance, FieldError> {
        self.check(cell)?;
        Ok(self.cells[cell.flat_index(self.cols)])
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: Distance) {
        self.cells.fill(value);
    }

    /// All values in row-major order.
    pub fn as_slice(&self) -> &[Distance] {
        &self.cells
    }

    /// Iterate over `(cell, distance)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Distance)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &d)| (Cell::from_flat_index(i, cols), d))
    }

    /// Number of cells holding a known distance.
    pub fn known_count(&self) -> usize {
        self.cells.iter().filter(|d| d.is_known()).count()
    }

    pub(crate) fn check(&self, cell: Cell) -> Result<(), FieldError> {
        if cell.in_bounds(self.rows, self.cols) {
            Ok(())
        } else {
            Err(FieldError::CellOutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn index(&self, cell: Cell) -> usize {
        assert!(
            cell.in_bounds(self.rows, self.cols),
            "cell {cell} out of bounds: [0, {}) x [0, {})",
            self.rows,
            self.cols
        );
        cell.flat_index(self.cols)
    }
}

/// Debug dump: one line per row prefixed with `"# "`, each cell
/// right-aligned to width 3, `-1` for `Unknown`, and a trailing blank
/// line.
impl fmt::Display for DistanceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols > 0 {
            for row in self.cells.chunks(self.cols as usize) {
                write!(f, "# ")?;
                for d in row {
                    write!(f, "{:>3}", d.as_signed())?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f)
    }
}
