//! Source providers: which cells act as sources for a field.

use attract_core::{Cell, TerrainClass};
use attract_space::Terrain;

/// What the host sees this turn, as consumed by source providers.
///
/// Implemented by the host's game state. `Sync` so that independent
/// fields can read it from separate threads.
pub trait TurnView: Sync {
    /// Cells currently holding food.
    fn food(&self) -> &[Cell];

    /// Cells currently holding enemy hills.
    fn enemy_hills(&self) -> &[Cell];
}

/// A plain-data [`TurnView`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sightings {
    /// Cells holding food.
    pub food: Vec<Cell>,
    /// Cells holding enemy hills.
    pub enemy_hills: Vec<Cell>,
}

impl TurnView for Sightings {
    fn food(&self) -> &[Cell] {
        &self.food
    }

    fn enemy_hills(&self) -> &[Cell] {
        &self.enemy_hills
    }
}

/// Decides the source set of a potential field each update.
pub trait SourceProvider: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Append this turn's sources to `out`. Order is preserved as the
    /// insertion order of new sources; duplicates are tolerated.
    fn collect(&self, terrain: &dyn Terrain, view: &dyn TurnView, out: &mut Vec<Cell>);
}

/// The built-in source flavors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Cells holding food.
    Food,
    /// Cells holding enemy hills.
    EnemyHill,
    /// Cells whose terrain has not been charted yet.
    Uncharted,
}

impl SourceProvider for SourceKind {
    fn name(&self) -> &str {
        match self {
            Self::Food => "food",
            Self::EnemyHill => "enemy_hill",
            Self::Uncharted => "uncharted",
        }
    }

    fn collect(&self, terrain: &dyn Terrain, view: &dyn TurnView, out: &mut Vec<Cell>) {
        match self {
            Self::Food => out.extend_from_slice(view.food()),
            Self::EnemyHill => out.extend_from_slice(view.enemy_hills()),
            Self::Uncharted => {
                for row in 0..terrain.rows() {
                    for col in 0..terrain.cols() {
                        let cell = Cell::new(row, col);
                        if terrain.terrain_class(cell) == TerrainClass::Uncharted {
                            out.push(cell);
                        }
                    }
                }
            }
        }
    }
}
