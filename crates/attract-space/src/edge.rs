//! Edge (boundary) behavior for grid terrain.

/// How a grid handles neighbours at its edges.
///
/// # Examples
///
/// ```
/// use attract_core::Cell;
/// use attract_space::{EdgeBehavior, Terrain, TerrainGrid};
///
/// // Absorb: corner has 2 neighbours, interior has 4.
/// let absorb = TerrainGrid::open(4, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(Cell::new(0, 0)).len(), 2);
/// assert_eq!(absorb.neighbours(Cell::new(1, 1)).len(), 4);
///
/// // Wrap: all cells have exactly 4 neighbours (torus).
/// let wrap = TerrainGrid::open(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(Cell::new(0, 0)).len(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour maps to the boundary cell (self-loop).
    Clamp,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    #[default]
    Wrap,
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    Absorb,
}

impl EdgeBehavior {
    /// Resolve a single axis value under this edge behavior.
    /// Returns `Some(resolved)` or `None` for Absorb out-of-bounds.
    pub(crate) fn resolve_axis(self, val: i64, len: u32) -> Option<u32> {
        let n = i64::from(len);
        if (0..n).contains(&val) {
            return Some(val as u32);
        }
        match self {
            Self::Absorb => None,
            Self::Clamp => Some(val.clamp(0, n - 1) as u32),
            Self::Wrap => Some(val.rem_euclid(n) as u32),
        }
    }
}
