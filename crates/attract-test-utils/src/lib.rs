//! Test utilities for Attract development.
//!
//! - [`bfs_distances`]: a plain multi-source BFS used as the reference
//!   result every incremental update is compared against.
//! - [`fixtures`]: hand-drawn maps for scenario tests.
//! - [`random_terrain`] / [`random_cells`]: seeded generators for
//!   randomized and property tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use attract_core::{Cell, Distance, TerrainClass};
use attract_space::{EdgeBehavior, Terrain, TerrainGrid};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Multi-source BFS distances in row-major order.
///
/// Sources sit at `0` whatever their terrain class; every other cell is
/// reached only through passable cells. Duplicate sources are harmless.
pub fn bfs_distances<I>(terrain: &dyn Terrain, sources: I) -> Vec<Distance>
where
    I: IntoIterator<Item = Cell>,
{
    let cols = terrain.cols();
    let mut dist = vec![Distance::Unknown; terrain.cell_count()];
    let mut queue = VecDeque::new();

    for src in sources {
        let idx = src.flat_index(cols);
        if dist[idx] != Distance::ZERO {
            dist[idx] = Distance::ZERO;
            queue.push_back((src, 0u32));
        }
    }

    while let Some((cell, d)) = queue.pop_front() {
        for nb in terrain.neighbours(cell) {
            let idx = nb.flat_index(cols);
            if dist[idx].is_known() || !terrain.is_passable(nb) {
                continue;
            }
            dist[idx] = Distance::Hops(d + 1);
            queue.push_back((nb, d + 1));
        }
    }
    dist
}

/// A seeded random map: each cell is an obstacle with probability
/// `obstacle_ratio` and passable otherwise.
pub fn random_terrain(
    seed: u64,
    rows: u32,
    cols: u32,
    obstacle_ratio: f64,
    edge: EdgeBehavior,
) -> TerrainGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = TerrainGrid::open(rows, cols, edge).unwrap();
    let obstacles: Vec<(Cell, TerrainClass)> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| Cell::new(r, c)))
        .filter(|_| rng.random_bool(obstacle_ratio))
        .map(|cell| (cell, TerrainClass::Obstacle))
        .collect();
    grid.chart(obstacles).unwrap();
    grid
}

/// `count` seeded random cells within `rows x cols`, duplicates allowed.
pub fn random_cells(rng: &mut ChaCha8Rng, rows: u32, cols: u32, count: usize) -> Vec<Cell> {
    (0..count)
        .map(|_| Cell::new(rng.random_range(0..rows), rng.random_range(0..cols)))
        .collect()
}

/// Render a distance vector in the same layout as a field's `Display`
/// dump, so oracle and field can be compared as text.
pub fn render(distances: &[Distance], cols: u32) -> String {
    let mut out = String::new();
    for row in distances.chunks(cols as usize) {
        out.push_str("# ");
        for d in row {
            out.push_str(&format!("{:>3}", d.as_signed()));
        }
        out.push('\n');
    }
    out.push('\n');
    out
}
