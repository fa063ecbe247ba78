//! Hand-drawn maps for scenario tests.
//!
//! Glyphs: `.` passable, `%` obstacle, `?` uncharted.

use attract_space::{EdgeBehavior, TerrainGrid};

/// Two rooms split by a full-height wall in column 3.
pub const SPLIT_ROOMS: &str = "
    ...%...
    ...%...
    ...%...
    ...%...
";

/// A small maze with dead ends; the bottom-right corner is 28 hops from
/// the top-left one.
pub const MAZE: &str = "
    ..%......
    .%%.%%%%.
    .%..%....
    .%.%%.%%%
    ...%.....
    %%.%.%%.%
    ....%....
";

/// An explored pocket bordered by uncharted terrain on the east side.
pub const FRONTIER: &str = "
    ....??
    .%..??
    ....??
";

/// Open `rows x cols` grid with absorbing edges.
pub fn open(rows: u32, cols: u32) -> TerrainGrid {
    TerrainGrid::open(rows, cols, EdgeBehavior::Absorb).unwrap()
}

/// Single-row corridor of length `len` with absorbing ends.
pub fn corridor(len: u32) -> TerrainGrid {
    TerrainGrid::open(1, len, EdgeBehavior::Absorb).unwrap()
}

/// Parse one of the maps above (or any other) with absorbing edges.
pub fn map(text: &str) -> TerrainGrid {
    TerrainGrid::parse(text, EdgeBehavior::Absorb).unwrap()
}
