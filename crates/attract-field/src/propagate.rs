//! Spread and retraction over a [`DistanceStore`].
//!
//! Both passes read adjacency and passability from the injected
//! [`Terrain`]; neither checks bounds, which the caller guarantees.
//!
//! # Invariant
//!
//! Between operations every known non-source cell holding `d` has a
//! neighbour holding `d - 1`, and every source holds `0`. Retraction
//! relies on this to decide which distances a removed source supported.

use crate::frontier::Frontier;
use crate::store::DistanceStore;
use attract_core::{Cell, Distance};
use attract_space::Terrain;
use indexmap::IndexSet;

/// Unit-weight relaxation outward from `seeds`.
///
/// Seeds that hold no known distance are ignored. A neighbour is relaxed
/// to `d + 1` only if it is passable and currently `Unknown` or larger.
/// Returns the number of relaxations performed.
pub(crate) fn spread<I>(store: &mut DistanceStore, terrain: &dyn Terrain, seeds: I) -> usize
where
    I: IntoIterator<Item = Cell>,
{
    let mut frontier = Frontier::new();
    for cell in seeds {
        if let Distance::Hops(d) = store.get(cell) {
            frontier.push(d, cell);
        }
    }

    let mut relaxed = 0;
    while let Some((d, cell)) = frontier.pop() {
        // Stale entry: a shorter path reached this cell after it was queued.
        if store.get(cell).is_below(d) {
            continue;
        }
        let next = d.saturating_add(1);
        for nb in terrain.neighbours(cell) {
            if terrain.is_passable(nb) && store.get(nb).improves_to(next) {
                store.set(nb, Distance::Hops(next));
                frontier.push(next, nb);
                relaxed += 1;
            }
        }
    }
    relaxed
}

/// Clear every distance that was supported only through `source`.
///
/// Appends each cell cleared to `Unknown` (including `source` itself) to
/// `invalidated`. A candidate keeps its distance while some neighbour
/// holds a strictly smaller one; if that neighbour is cleared later, the
/// candidate is queued again and re-examined.
pub(crate) fn retract(
    store: &mut DistanceStore,
    terrain: &dyn Terrain,
    source: Cell,
    invalidated: &mut Vec<Cell>,
) {
    let Distance::Hops(origin) = store.get(source) else {
        return;
    };
    store.set(source, Distance::Unknown);
    invalidated.push(source);

    let mut worklist: Vec<Cell> = terrain
        .neighbours(source)
        .into_iter()
        .filter(|&nb| store.get(nb).exceeds(origin))
        .collect();

    while let Some(cell) = worklist.pop() {
        let Distance::Hops(d) = store.get(cell) else {
            continue;
        };
        let neighbours = terrain.neighbours(cell);
        if neighbours.iter().any(|&nb| store.get(nb).is_below(d)) {
            continue;
        }
        store.set(cell, Distance::Unknown);
        invalidated.push(cell);
        worklist.extend(
            neighbours
                .into_iter()
                .filter(|&nb| store.get(nb).exceeds(d)),
        );
    }
}

/// Re-derive distances for the cells cleared by [`retract`].
///
/// Seeds a single spread with every still-known neighbour of the
/// invalidated region. Returns the number of relaxations performed.
pub(crate) fn repair(store: &mut DistanceStore, terrain: &dyn Terrain, invalidated: &[Cell]) -> usize {
    let mut seeds: IndexSet<Cell> = IndexSet::new();
    for &cell in invalidated {
        for nb in terrain.neighbours(cell) {
            if store.get(nb).is_known() {
                seeds.insert(nb);
            }
        }
    }
    spread(store, terrain, seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use attract_space::{EdgeBehavior, TerrainGrid};

    fn line(len: u32) -> TerrainGrid {
        TerrainGrid::open(1, len, EdgeBehavior::Absorb).unwrap()
    }

    fn hops(store: &DistanceStore) -> Vec<i64> {
        store.as_slice().iter().map(|d| d.as_signed()).collect()
    }

    #[test]
    fn spread_from_single_seed() {
        let t = line(5);
        let mut s = DistanceStore::new(1, 5);
        s.set(Cell::new(0, 1), Distance::ZERO);
        let relaxed = spread(&mut s, &t, [Cell::new(0, 1)]);
        assert_eq!(relaxed, 4);
        assert_eq!(hops(&s), vec![1, 0, 1, 2, 3]);
    }

    #[test]
    fn spread_ignores_unknown_seeds() {
        let t = line(3);
        let mut s = DistanceStore::new(1, 3);
        assert_eq!(spread(&mut s, &t, [Cell::new(0, 0)]), 0);
        assert_eq!(s.known_count(), 0);
    }

    #[test]
    fn spread_does_not_enter_obstacles() {
        let t = TerrainGrid::parse("..%..", EdgeBehavior::Absorb).unwrap();
        let mut s = DistanceStore::new(1, 5);
        s.set(Cell::new(0, 0), Distance::ZERO);
        spread(&mut s, &t, [Cell::new(0, 0)]);
        assert_eq!(hops(&s), vec![0, 1, -1, -1, -1]);
    }

    #[test]
    fn spread_from_non_passable_source() {
        // A source on uncharted terrain still seeds its passable neighbours.
        let t = TerrainGrid::parse(".?.", EdgeBehavior::Absorb).unwrap();
        let mut s = DistanceStore::new(1, 3);
        s.set(Cell::new(0, 1), Distance::ZERO);
        spread(&mut s, &t, [Cell::new(0, 1)]);
        assert_eq!(hops(&s), vec![1, 0, 1]);
    }

    #[test]
    fn retract_sole_source_clears_everything() {
        let t = line(4);
        let mut s = DistanceStore::new(1, 4);
        s.set(Cell::new(0, 0), Distance::ZERO);
        spread(&mut s, &t, [Cell::new(0, 0)]);

        let mut invalidated = Vec::new();
        retract(&mut s, &t, Cell::new(0, 0), &mut invalidated);
        assert_eq!(invalidated.len(), 4);
        assert_eq!(invalidated[0], Cell::new(0, 0));
        assert_eq!(s.known_count(), 0);
    }

    #[test]
    fn retract_unknown_cell_is_empty() {
        let t = line(4);
        let mut s = DistanceStore::new(1, 4);
        let mut invalidated = Vec::new();
        retract(&mut s, &t, Cell::new(0, 2), &mut invalidated);
        assert!(invalidated.is_empty());
    }

    #[test]
    fn retract_keeps_cells_supported_by_other_source() {
        // Sources at both ends of a 7-cell line: 0 1 2 3 2 1 0
        let t = line(7);
        let mut s = DistanceStore::new(1, 7);
        s.set(Cell::new(0, 0), Distance::ZERO);
        s.set(Cell::new(0, 6), Distance::ZERO);
        spread(&mut s, &t, [Cell::new(0, 0), Cell::new(0, 6)]);
        assert_eq!(hops(&s), vec![0, 1, 2, 3, 2, 1, 0]);

        let mut invalidated = Vec::new();
        retract(&mut s, &t, Cell::new(0, 0), &mut invalidated);
        // Cells 0..=2 were derived only from the left source. Cell 3 is
        // equidistant and keeps its support from the right.
        invalidated.sort();
        assert_eq!(
            invalidated,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
        );
        assert_eq!(hops(&s), vec![-1, -1, -1, 3, 2, 1, 0]);

        let relaxed = repair(&mut s, &t, &invalidated);
        assert_eq!(relaxed, 3);
        assert_eq!(hops(&s), vec![6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn retract_requeues_cells_whose_support_is_cleared_later() {
        // 2x3 open grid, source at (0,0). The worklist is a stack, so some
        // candidates are examined while their lower neighbour is still
        // stale; they must be revisited once that neighbour is cleared.
        let t = TerrainGrid::open(2, 3, EdgeBehavior::Absorb).unwrap();
        let mut s = DistanceStore::new(2, 3);
        s.set(Cell::new(0, 0), Distance::ZERO);
        spread(&mut s, &t, [Cell::new(0, 0)]);

        let mut invalidated = Vec::new();
        retract(&mut s, &t, Cell::new(0, 0), &mut invalidated);
        assert_eq!(invalidated.len(), 6);
        assert_eq!(s.known_count(), 0);
    }
}
