//! Terrain classification of grid cells.

/// How a cell's terrain is classified by the map.
///
/// Distance propagation only travels through [`Passable`](Self::Passable)
/// cells. Sources are the one exception: a source is assigned distance
/// zero whatever its class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TerrainClass {
    /// Traversable land.
    Passable,
    /// Impassable terrain (water, walls).
    Obstacle,
    /// Not yet observed. Treated as impassable until charted.
    #[default]
    Uncharted,
}

impl TerrainClass {
    /// ASCII glyph used by map dumps and the map parser.
    pub fn glyph(self) -> char {
        match self {
            Self::Passable => '.',
            Self::Obstacle => '%',
            Self::Uncharted => '?',
        }
    }

    /// Parse a map glyph. Returns `None` for unrecognised characters.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Passable),
            '%' => Some(Self::Obstacle),
            '?' => Some(Self::Uncharted),
            _ => None,
        }
    }
}
