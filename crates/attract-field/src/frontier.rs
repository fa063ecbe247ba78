//! Min-priority queue of `(distance, cell)` entries for spread.
//!
//! Entries pop in non-decreasing distance order. Equal distances pop in
//! insertion order, so the shortest-path tree a spread builds depends only
//! on seed order and neighbour order, never on cell coordinates.

use attract_core::Cell;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<(u32, u64, Cell)>>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, distance: u32, cell: Cell) {
        self.heap.push(Reverse((distance, self.seq, cell)));
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(u32, Cell)> {
        self.heap
            .pop()
            .map(|Reverse((distance, _, cell))| (distance, cell))
    }
}
