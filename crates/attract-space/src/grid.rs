//! 2D square terrain grid with 4-connected neighbourhood (N/S/W/E).

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::terrain::{Neighbours, Terrain};
use attract_core::{Cell, TerrainClass};
use std::fmt;

/// A two-dimensional square grid of terrain classes.
///
/// Each cell is addressed by [`Cell`] with `0 <= row < rows` and
/// `0 <= col < cols`. Neighbours are the four cardinal directions in the
/// order north, south, west, east.
///
/// Boundary handling is controlled by [`EdgeBehavior`]:
/// - **Absorb**: edge cells have fewer neighbours (corners have 2, edges have 3)
/// - **Clamp**: edge cells self-loop on the boundary axis
/// - **Wrap**: periodic boundary (torus topology)
///
/// Class changes through [`set_class`](Self::set_class) bump the
/// [`revision`](Terrain::revision) counter.
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
    classes: Vec<TerrainClass>,
    revision: u64,
}

impl TerrainGrid {
    /// Maximum dimension size: neighbour arithmetic uses `i64` offsets on
    /// `u32` axes, and the cell count must fit in memory as a `Vec`.
    pub const MAX_DIM: u32 = 1 << 16;

    /// Create a grid in which every cell is [`TerrainClass::Uncharted`],
    /// the state of a map nobody has looked at yet.
    pub fn new(rows: u32, cols: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        Self::filled(rows, cols, edge, TerrainClass::Uncharted)
    }

    /// Create a grid in which every cell is passable.
    ///
    /// # Examples
    ///
    /// ```
    /// use attract_space::{EdgeBehavior, Terrain, TerrainGrid};
    ///
    /// let grid = TerrainGrid::open(16, 16, EdgeBehavior::Absorb).unwrap();
    /// assert_eq!(grid.cell_count(), 256);
    /// ```
    pub fn open(rows: u32, cols: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        Self::filled(rows, cols, edge, TerrainClass::Passable)
    }

    /// Create a grid with every cell set to `class`.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds [`MAX_DIM`](Self::MAX_DIM).
    pub fn filled(
        rows: u32,
        cols: u32,
        edge: EdgeBehavior,
        class: TerrainClass,
    ) -> Result<Self, SpaceError> {
        check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            edge,
            classes: vec![class; rows as usize * cols as usize],
            revision: 0,
        })
    }

    /// Parse an ASCII map: `.` passable, `%` obstacle, `?` uncharted.
    ///
    /// Blank lines are ignored, trailing whitespace on each line is
    /// stripped, and every remaining line must have the same width.
    ///
    /// ```
    /// use attract_core::{Cell, TerrainClass};
    /// use attract_space::{EdgeBehavior, Terrain, TerrainGrid};
    ///
    /// let grid = TerrainGrid::parse(
    ///     "
    ///     ..%
    ///     ?.%
    ///     ",
    ///     EdgeBehavior::Absorb,
    /// )
    /// .unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 3));
    /// assert_eq!(grid.terrain_class(Cell::new(1, 0)), TerrainClass::Uncharted);
    /// ```
    pub fn parse(text: &str, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let rows = u32::try_from(lines.len()).map_err(|_| SpaceError::DimensionTooLarge {
            name: "rows",
            value: u32::MAX,
            max: Self::MAX_DIM,
        })?;
        let cols = lines.first().map_or(0, |line| line.chars().count()) as u32;
        check_dims(rows, cols)?;

        let mut classes = Vec::with_capacity(rows as usize * cols as usize);
        for (r, line) in lines.iter().enumerate() {
            let width = line.chars().count() as u32;
            if width != cols {
                return Err(SpaceError::RaggedRow {
                    row: r as u32,
                    expected: cols,
                    found: width,
                });
            }
            for (c, glyph) in line.chars().enumerate() {
                let class =
                    TerrainClass::from_glyph(glyph).ok_or(SpaceError::InvalidGlyph {
                        row: r as u32,
                        col: c as u32,
                        glyph,
                    })?;
                classes.push(class);
            }
        }

        Ok(Self {
            rows,
            cols,
            edge,
            classes,
            revision: 0,
        })
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Set the class of one cell.
    ///
    /// Bumps the revision only if the class actually changes. Returns
    /// whether it did.
    pub fn set_class(&mut self, cell: Cell, class: TerrainClass) -> Result<bool, SpaceError> {
        let idx = self.index(cell)?;
        if self.classes[idx] == class {
            return Ok(false);
        }
        self.classes[idx] = class;
        self.revision += 1;
        Ok(true)
    }

    /// Apply a batch of observed classes, as seen by the agent in one turn.
    ///
    /// All cells are bounds-checked before any is written. Returns the
    /// number of cells whose class changed.
    pub fn chart<I>(&mut self, observed: I) -> Result<usize, SpaceError>
    where
        I: IntoIterator<Item = (Cell, TerrainClass)>,
    {
        let observed: Vec<(Cell, TerrainClass)> = observed.into_iter().collect();
        for &(cell, _) in &observed {
            self.index(cell)?;
        }
        let mut changed = 0;
        for (cell, class) in observed {
            if self.set_class(cell, class)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Iterate over all cells of a given class in row-major order.
    pub fn cells_of(&self, class: TerrainClass) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        self.classes
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == class)
            .map(move |(i, _)| Cell::from_flat_index(i, cols))
    }

    fn index(&self, cell: Cell) -> Result<usize, SpaceError> {
        if !cell.in_bounds(self.rows, self.cols) {
            return Err(SpaceError::CellOutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(cell.flat_index(self.cols))
    }
}

fn check_dims(rows: u32, cols: u32) -> Result<(), SpaceError> {
    if rows == 0 || cols == 0 {
        return Err(SpaceError::EmptySpace);
    }
    if rows > TerrainGrid::MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            name: "rows",
            value: rows,
            max: TerrainGrid::MAX_DIM,
        });
    }
    if cols > TerrainGrid::MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            name: "cols",
            value: cols,
            max: TerrainGrid::MAX_DIM,
        });
    }
    Ok(())
}

impl Terrain for TerrainGrid {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn neighbours(&self, cell: Cell) -> Neighbours {
        let offsets: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let r = i64::from(cell.row);
        let c = i64::from(cell.col);
        let mut result = Neighbours::new();
        for (dr, dc) in offsets {
            let nr = self.edge.resolve_axis(r + dr, self.rows);
            let nc = self.edge.resolve_axis(c + dc, self.cols);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                result.push(Cell::new(nr, nc));
            }
        }
        result
    }

    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    fn terrain_class(&self, cell: Cell) -> TerrainClass {
        match self.index(cell) {
            Ok(idx) => self.classes[idx],
            Err(e) => panic!("{e}"),
        }
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.classes.chunks(self.cols as usize) {
            for class in row {
                write!(f, "{}", class.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
