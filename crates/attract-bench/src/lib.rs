//! Benchmark profiles for Attract potential fields.
//!
//! - [`reference_map`]: 64x64 wrapped map with 20% obstacles
//! - [`stress_map`]: 256x256 wrapped map with 20% obstacles
//! - [`food_turns`]: deterministic per-turn food sightings for a map

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use attract_core::Cell;
use attract_field::Sightings;
use attract_space::{EdgeBehavior, Terrain, TerrainGrid};
use attract_test_utils::{random_cells, random_terrain};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build the reference benchmark map: 64x64 (4K cells).
pub fn reference_map(seed: u64) -> TerrainGrid {
    random_terrain(seed, 64, 64, 0.2, EdgeBehavior::Wrap)
}

/// Build the stress benchmark map: 256x256 (~65K cells).
pub fn stress_map(seed: u64) -> TerrainGrid {
    random_terrain(seed, 256, 256, 0.2, EdgeBehavior::Wrap)
}

/// Generate `turns` food sightings for `terrain`.
///
/// Starts with `initial` food cells; every turn each piece survives with
/// probability 0.9 and `spawn` new pieces appear. Only passable cells
/// hold food.
pub fn food_turns(
    terrain: &dyn Terrain,
    seed: u64,
    turns: usize,
    initial: usize,
    spawn: usize,
) -> Vec<Sightings> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows = terrain.rows();
    let cols = terrain.cols();
    let passable = |cell: &Cell| terrain.is_passable(*cell);

    let mut food: Vec<Cell> = random_cells(&mut rng, rows, cols, initial)
        .into_iter()
        .filter(passable)
        .collect();
    let mut out = Vec::with_capacity(turns);
    for _ in 0..turns {
        food.retain(|_| rng.random_bool(0.9));
        food.extend(
            random_cells(&mut rng, rows, cols, spawn)
                .into_iter()
                .filter(passable),
        );
        out.push(Sightings {
            food: food.clone(),
            enemy_hills: Vec::new(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_map_dimensions() {
        let t = reference_map(42);
        assert_eq!(t.rows(), 64);
        assert_eq!(t.cols(), 64);
    }

    #[test]
    fn food_turns_is_deterministic() {
        let t = reference_map(1);
        let a = food_turns(&t, 7, 10, 30, 3);
        let b = food_turns(&t, 7, 10, 30, 3);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
        for view in &a {
            assert!(view.food.iter().all(|c| t.is_passable(*c)));
        }
    }
}
