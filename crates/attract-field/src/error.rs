//! Error types for distance field operations.

use attract_core::Cell;
use std::fmt;

/// Errors from distance field operations.
///
/// Every mutating operation validates its inputs before touching the
/// field, so an `Err` always leaves the field unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A cell lies outside the field's grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Field rows.
        rows: u32,
        /// Field columns.
        cols: u32,
    },
    /// The terrain passed to an operation has different dimensions from
    /// the field.
    DimensionMismatch {
        /// `(rows, cols)` of the field.
        field: (u32, u32),
        /// `(rows, cols)` of the terrain.
        terrain: (u32, u32),
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} out of bounds: [0, {rows}) x [0, {cols})")
            }
            Self::DimensionMismatch { field, terrain } => write!(
                f,
                "terrain is {}x{} but field is {}x{}",
                terrain.0, terrain.1, field.0, field.1
            ),
        }
    }
}

impl std::error::Error for FieldError {}
