//! The core `Terrain` trait.

use attract_core::{Cell, TerrainClass};
use smallvec::SmallVec;

/// Neighbour list returned by [`Terrain::neighbours`].
///
/// Four inline slots cover every 4-connected topology without heap
/// allocation.
pub type Neighbours = SmallVec<[Cell; 4]>;

/// Read-only view of the map consulted by distance propagation.
///
/// The topology (bounded or wrapping edges) is a property of the
/// implementor, not of the fields that read it.
///
/// # Thread Safety
///
/// `Sync` is required so that independent fields may be updated on
/// separate threads against one shared terrain.
pub trait Terrain: Send + Sync {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// Orthogonal neighbours of `cell` in a deterministic,
    /// backend-defined order. At most four entries.
    fn neighbours(&self, cell: Cell) -> Neighbours;

    /// Terrain class of `cell`.
    fn terrain_class(&self, cell: Cell) -> TerrainClass;

    /// Whether distance propagation may travel through `cell`.
    fn is_passable(&self, cell: Cell) -> bool {
        self.terrain_class(cell) == TerrainClass::Passable
    }

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        self.rows() as usize * self.cols() as usize
    }

    /// Change counter for terrain classes.
    ///
    /// Backends whose classes can change bump this whenever one does.
    /// Fields compare it across updates to detect that cached distances
    /// may rely on stale passability. Static terrains keep the default.
    fn revision(&self) -> u64 {
        0
    }
}
