//! Terrain trait compliance test helpers.
//!
//! These functions verify that a `Terrain` implementation satisfies the
//! invariants distance propagation relies on. Reused across the grid
//! backend test modules.

use crate::grid::TerrainGrid;
use crate::terrain::Terrain;
use attract_core::{Cell, TerrainClass};
use indexmap::IndexSet;

fn all_cells(terrain: &dyn Terrain) -> impl Iterator<Item = Cell> {
    let (rows, cols) = (terrain.rows(), terrain.cols());
    (0..rows).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(terrain: &dyn Terrain) {
    for cell in all_cells(terrain) {
        for nb in terrain.neighbours(cell) {
            assert!(
                terrain.neighbours(nb).contains(&cell),
                "neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert that every neighbour lies inside the grid and no cell has more
/// than four.
pub fn assert_neighbours_in_bounds(terrain: &dyn Terrain) {
    let (rows, cols) = (terrain.rows(), terrain.cols());
    for cell in all_cells(terrain) {
        let n = terrain.neighbours(cell);
        assert!(n.len() <= 4, "{cell} has {} neighbours", n.len());
        for nb in n {
            assert!(
                nb.in_bounds(rows, cols),
                "neighbour {nb} of {cell} outside [0, {rows}) x [0, {cols})"
            );
        }
    }
}

/// Assert that two calls to `neighbours` return the same sequence.
pub fn assert_neighbours_deterministic(terrain: &dyn Terrain) {
    for cell in all_cells(terrain) {
        assert_eq!(
            terrain.neighbours(cell),
            terrain.neighbours(cell),
            "neighbours({cell}) is non-deterministic"
        );
    }
}

/// Assert that `cells_of` partitions the grid: every cell appears under
/// exactly one class.
pub fn assert_cells_of_partition(grid: &TerrainGrid) {
    let mut seen: IndexSet<Cell> = IndexSet::new();
    for class in [
        TerrainClass::Passable,
        TerrainClass::Obstacle,
        TerrainClass::Uncharted,
    ] {
        for cell in grid.cells_of(class) {
            assert_eq!(grid.terrain_class(cell), class);
            assert!(seen.insert(cell), "{cell} listed under two classes");
        }
    }
    assert_eq!(seen.len(), grid.cell_count(), "cells_of misses cells");
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &TerrainGrid) {
    assert_neighbours_symmetric(grid);
    assert_neighbours_in_bounds(grid);
    assert_neighbours_deterministic(grid);
    assert_cells_of_partition(grid);
}
