//! Error types for terrain construction and updates.

use attract_core::Cell;
use std::fmt;

/// Errors arising from terrain construction, parsing, or cell updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A cell is outside the bounds of the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
    },
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (e.g. "rows", "cols").
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// A map text contains a character that is not a terrain glyph.
    InvalidGlyph {
        /// Row of the offending character.
        row: u32,
        /// Column of the offending character.
        col: u32,
        /// The character itself.
        glyph: char,
    },
    /// A map text row has a different width from the first row.
    RaggedRow {
        /// Index of the offending row.
        row: u32,
        /// Width of the first row.
        expected: u32,
        /// Width of the offending row.
        found: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} out of bounds: [0, {rows}) x [0, {cols})")
            }
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::InvalidGlyph { row, col, glyph } => {
                write!(f, "invalid terrain glyph {glyph:?} at ({row}, {col})")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has width {found}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
