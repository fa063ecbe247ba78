//! The [`DistanceField`]: a distance store plus its active source set.

use crate::error::FieldError;
use crate::propagate;
use crate::store::DistanceStore;
use attract_core::{Cell, Distance};
use attract_space::Terrain;
use indexmap::IndexSet;
use std::fmt;
use tracing::{debug, trace};

/// Counts of sources added and removed by a diffing update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SourceDiff {
    /// Sources that were not active before.
    pub added: usize,
    /// Previously active sources that are no longer requested.
    pub removed: usize,
}

impl SourceDiff {
    /// `true` if the source set did not change.
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// Hop distances from every cell to the nearest active source.
///
/// For every passable cell the stored value is the minimum number of
/// passable-cell hops to any source, or [`Distance::Unknown`] if no source
/// can reach it. Sources hold `0` whatever their terrain class; other
/// non-passable cells are never assigned a distance.
///
/// The field does not hold the terrain. Every mutating operation takes it
/// per call and assumes passability has not changed since the previous
/// call; after terrain edits, call [`recompute`](Self::recompute).
///
/// # Examples
///
/// ```
/// use attract_core::{Cell, Distance};
/// use attract_field::DistanceField;
/// use attract_space::{EdgeBehavior, TerrainGrid};
///
/// let terrain = TerrainGrid::open(5, 5, EdgeBehavior::Absorb).unwrap();
/// let mut field = DistanceField::for_terrain(&terrain);
///
/// field.add_source(&terrain, Cell::new(2, 2)).unwrap();
/// assert_eq!(field.get_distance(Cell::new(0, 0)), Distance::Hops(4));
///
/// field.remove_source(&terrain, Cell::new(2, 2)).unwrap();
/// assert_eq!(field.get_distance(Cell::new(0, 0)), Distance::Unknown);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    store: DistanceStore,
    sources: IndexSet<Cell>,
}

impl DistanceField {
    /// Create an empty field: no sources, every cell `Unknown`.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            store: DistanceStore::new(rows, cols),
            sources: IndexSet::new(),
        }
    }

    /// Create an empty field sized to `terrain`.
    pub fn for_terrain(terrain: &dyn Terrain) -> Self {
        Self::new(terrain.rows(), terrain.cols())
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.store.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.store.cols()
    }

    /// The underlying distance store.
    pub fn store(&self) -> &DistanceStore {
        &self.store
    }

    /// Active sources in insertion order.
    pub fn sources(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.sources.iter().copied()
    }

    /// Whether `cell` is an active source.
    pub fn contains_source(&self, cell: Cell) -> bool {
        self.sources.contains(&cell)
    }

    /// Distance stored at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn get_distance(&self, cell: Cell) -> Distance {
        self.store.get(cell)
    }

    /// Checked [`get_distance`](Self::get_distance).
    pub fn try_distance(&self, cell: Cell) -> Result<Distance, FieldError> {
        self.store.try_get(cell)
    }

    /// `falloff^distance` at `cell`, or `0.0` if the cell is unreachable.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn get_potential(&self, cell: Cell, falloff: f64) -> f64 {
        self.store.get(cell).potential(falloff)
    }

    /// Add one source and propagate from it.
    ///
    /// Adding a cell that is already a source leaves the set unchanged and
    /// the propagation finds nothing to improve.
    pub fn add_source(&mut self, terrain: &dyn Terrain, cell: Cell) -> Result<(), FieldError> {
        self.add_sources(terrain, [cell])
    }

    /// Add a batch of sources with a single spread seeded from all of them.
    pub fn add_sources<I>(&mut self, terrain: &dyn Terrain, cells: I) -> Result<(), FieldError>
    where
        I: IntoIterator<Item = Cell>,
    {
        self.check_terrain(terrain)?;
        let cells: Vec<Cell> = cells.into_iter().collect();
        self.check_cells(&cells)?;
        if cells.is_empty() {
            return Ok(());
        }

        for &cell in &cells {
            self.store.set(cell, Distance::ZERO);
            self.sources.insert(cell);
        }
        let relaxed = propagate::spread(&mut self.store, terrain, cells.iter().copied());
        debug!(
            added = cells.len(),
            sources = self.sources.len(),
            relaxed,
            "added sources"
        );
        Ok(())
    }

    /// Remove one source and repair the distances it supported.
    ///
    /// Removing a cell that is not an active source is a no-op: the field
    /// is left untouched and `Ok(())` is returned.
    pub fn remove_source(&mut self, terrain: &dyn Terrain, cell: Cell) -> Result<(), FieldError> {
        self.remove_sources(terrain, [cell])
    }

    /// Remove a batch of sources.
    ///
    /// Each removed source is retracted in turn; the union of the cleared
    /// regions is then repaired with a single spread. Cells that are not
    /// active sources are skipped.
    pub fn remove_sources<I>(&mut self, terrain: &dyn Terrain, cells: I) -> Result<(), FieldError>
    where
        I: IntoIterator<Item = Cell>,
    {
        self.check_terrain(terrain)?;
        let cells: Vec<Cell> = cells.into_iter().collect();
        self.check_cells(&cells)?;

        let mut removed = 0usize;
        let mut invalidated = Vec::new();
        for cell in cells {
            if !self.sources.shift_remove(&cell) {
                debug!(%cell, "ignoring removal of non-source cell");
                continue;
            }
            let before = invalidated.len();
            propagate::retract(&mut self.store, terrain, cell, &mut invalidated);
            trace!(%cell, cleared = invalidated.len() - before, "retracted source");
            removed += 1;
        }
        if removed == 0 {
            return Ok(());
        }

        let relaxed = propagate::repair(&mut self.store, terrain, &invalidated);
        debug!(
            removed,
            invalidated = invalidated.len(),
            relaxed,
            sources = self.sources.len(),
            "removed sources"
        );
        Ok(())
    }

    /// Make the active source set exactly `cells`, updating incrementally.
    ///
    /// New sources are added in one batch first, then stale ones are
    /// removed in one batch, so the new sources already bound the region
    /// each removal has to repair.
    pub fn set_sources<I>(&mut self, terrain: &dyn Terrain, cells: I) -> Result<SourceDiff, FieldError>
    where
        I: IntoIterator<Item = Cell>,
    {
        self.check_terrain(terrain)?;
        let wanted: IndexSet<Cell> = cells.into_iter().collect();
        let wanted_vec: Vec<Cell> = wanted.iter().copied().collect();
        self.check_cells(&wanted_vec)?;

        let added: Vec<Cell> = wanted
            .iter()
            .copied()
            .filter(|c| !self.sources.contains(c))
            .collect();
        let removed: Vec<Cell> = self
            .sources
            .iter()
            .copied()
            .filter(|c| !wanted.contains(c))
            .collect();
        let diff = SourceDiff {
            added: added.len(),
            removed: removed.len(),
        };

        self.add_sources(terrain, added)?;
        self.remove_sources(terrain, removed)?;
        Ok(diff)
    }

    /// Replace the source set with `cells` and rebuild from scratch.
    pub fn reseed<I>(&mut self, terrain: &dyn Terrain, cells: I) -> Result<SourceDiff, FieldError>
    where
        I: IntoIterator<Item = Cell>,
    {
        self.check_terrain(terrain)?;
        let wanted: IndexSet<Cell> = cells.into_iter().collect();
        let wanted_vec: Vec<Cell> = wanted.iter().copied().collect();
        self.check_cells(&wanted_vec)?;

        let diff = SourceDiff {
            added: wanted.iter().filter(|c| !self.sources.contains(*c)).count(),
            removed: self.sources.iter().filter(|c| !wanted.contains(*c)).count(),
        };
        self.sources = wanted;
        self.recompute(terrain)?;
        Ok(diff)
    }

    /// Clear the store, reseed every source at `0`, and spread over the
    /// whole grid.
    ///
    /// Always correct regardless of history; the incremental operations
    /// must agree with it.
    pub fn recompute(&mut self, terrain: &dyn Terrain) -> Result<(), FieldError> {
        self.check_terrain(terrain)?;
        self.store.fill(Distance::Unknown);
        for &cell in &self.sources {
            self.store.set(cell, Distance::ZERO);
        }
        let relaxed = propagate::spread(&mut self.store, terrain, self.sources.iter().copied());
        debug!(sources = self.sources.len(), relaxed, "recomputed field");
        Ok(())
    }

    /// Drop every source and return every cell to `Unknown`.
    pub fn reset(&mut self) {
        self.sources.clear();
        self.store.fill(Distance::Unknown);
    }

    fn check_terrain(&self, terrain: &dyn Terrain) -> Result<(), FieldError> {
        let field = (self.store.rows(), self.store.cols());
        let other = (terrain.rows(), terrain.cols());
        if field != other {
            return Err(FieldError::DimensionMismatch {
                field,
                terrain: other,
            });
        }
        Ok(())
    }

    fn check_cells(&self, cells: &[Cell]) -> Result<(), FieldError> {
        cells.iter().try_for_each(|&cell| self.store.check(cell))
    }
}

impl fmt::Display for DistanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.store, f)
    }
}
