//! [`PotentialField`]: a distance field driven by a source provider.

use crate::config::{ConfigError, FieldConfig, UpdateStrategy};
use crate::error::FieldError;
use crate::field::{DistanceField, SourceDiff};
use crate::provider::{SourceProvider, TurnView};
use attract_core::{Cell, Distance};
use attract_space::Terrain;
use std::fmt;
use tracing::debug;

/// One attraction field: sources chosen by a [`SourceProvider`], distances
/// kept by a [`DistanceField`], and values read through the configured
/// falloff.
///
/// # Examples
///
/// ```
/// use attract_core::Cell;
/// use attract_field::{FieldConfig, PotentialField, Sightings, SourceKind};
/// use attract_space::{EdgeBehavior, TerrainGrid};
///
/// let terrain = TerrainGrid::open(8, 8, EdgeBehavior::Wrap).unwrap();
/// let mut food = PotentialField::new(&terrain, SourceKind::Food, FieldConfig::default()).unwrap();
///
/// let view = Sightings { food: vec![Cell::new(3, 3)], ..Sightings::default() };
/// food.update(&terrain, &view).unwrap();
/// assert_eq!(food.potential(Cell::new(3, 3)), 1.0);
/// assert_eq!(food.potential(Cell::new(3, 5)), 0.25);
/// ```
pub struct PotentialField {
    field: DistanceField,
    provider: Box<dyn SourceProvider>,
    config: FieldConfig,
    terrain_revision: Option<u64>,
    scratch: Vec<Cell>,
}

impl PotentialField {
    /// Create an empty field sized to `terrain`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `config` fails [`FieldConfig::validate`].
    pub fn new<P>(terrain: &dyn Terrain, provider: P, config: FieldConfig) -> Result<Self, ConfigError>
    where
        P: SourceProvider + 'static,
    {
        config.validate()?;
        Ok(Self {
            field: DistanceField::for_terrain(terrain),
            provider: Box::new(provider),
            config,
            terrain_revision: None,
            scratch: Vec::new(),
        })
    }

    /// The provider's name.
    pub fn name(&self) -> &str {
        self.provider.name()
    }

    /// The configuration this field was built with.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The underlying distance field.
    pub fn field(&self) -> &DistanceField {
        &self.field
    }

    /// Distance at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn distance(&self, cell: Cell) -> Distance {
        self.field.get_distance(cell)
    }

    /// Potential at `cell` using the configured falloff.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn potential(&self, cell: Cell) -> f64 {
        self.field.get_potential(cell, self.config.falloff)
    }

    /// Pull this turn's sources from the provider and bring the field up
    /// to date.
    ///
    /// With [`UpdateStrategy::Incremental`] only the source changes are
    /// applied, unless the terrain revision changed since the previous
    /// update: cached distances may then rest on stale passability and the
    /// field is rebuilt instead.
    pub fn update(&mut self, terrain: &dyn Terrain, view: &dyn TurnView) -> Result<SourceDiff, FieldError> {
        self.scratch.clear();
        self.provider.collect(terrain, view, &mut self.scratch);

        let revision = terrain.revision();
        let terrain_changed = self.terrain_revision.is_some_and(|r| r != revision);
        let sources = self.scratch.iter().copied();
        let diff = match self.config.strategy {
            UpdateStrategy::Incremental if !terrain_changed => {
                self.field.set_sources(terrain, sources)?
            }
            UpdateStrategy::Incremental => {
                debug!(
                    field = self.provider.name(),
                    from = self.terrain_revision,
                    to = revision,
                    "terrain changed, rebuilding"
                );
                self.field.reseed(terrain, sources)?
            }
            UpdateStrategy::Recompute => self.field.reseed(terrain, sources)?,
        };
        self.terrain_revision = Some(revision);

        debug!(
            field = self.provider.name(),
            added = diff.added,
            removed = diff.removed,
            sources = self.field.sources().len(),
            "updated potential field"
        );
        Ok(diff)
    }

    /// Drop all sources and forget the last seen terrain revision.
    pub fn reset(&mut self) {
        self.field.reset();
        self.terrain_revision = None;
    }
}

impl fmt::Debug for PotentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PotentialField")
            .field("name", &self.provider.name())
            .field("rows", &self.field.rows())
            .field("cols", &self.field.cols())
            .field("sources", &self.field.sources().len())
            .field("config", &self.config)
            .field("terrain_revision", &self.terrain_revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{Sightings, SourceKind};
    use attract_core::TerrainClass;
    use attract_space::{EdgeBehavior, TerrainGrid};

    fn c(r: u32, col: u32) -> Cell {
        Cell::new(r, col)
    }

    fn rebuilt(field: &DistanceField, terrain: &TerrainGrid) -> DistanceField {
        let mut fresh = DistanceField::for_terrain(terrain);
        fresh.reseed(terrain, field.sources()).unwrap();
        fresh
    }

    #[test]
    fn rejects_invalid_config() {
        let t = TerrainGrid::open(3, 3, EdgeBehavior::Wrap).unwrap();
        let cfg = FieldConfig::default().with_falloff(1.0);
        assert!(matches!(
            PotentialField::new(&t, SourceKind::Food, cfg),
            Err(ConfigError::InvalidFalloff { .. })
        ));
    }

    #[test]
    fn food_field_tracks_food_across_turns() {
        let t = TerrainGrid::open(6, 6, EdgeBehavior::Wrap).unwrap();
        let mut food = PotentialField::new(&t, SourceKind::Food, FieldConfig::default()).unwrap();

        let turn1 = Sightings {
            food: vec![c(0, 0), c(3, 3)],
            ..Sightings::default()
        };
        let diff = food.update(&t, &turn1).unwrap();
        assert_eq!(diff, SourceDiff { added: 2, removed: 0 });
        assert_eq!(food.distance(c(1, 1)), Distance::Hops(2));

        // Food at (0, 0) was eaten; new food appeared at (5, 5).
        let turn2 = Sightings {
            food: vec![c(3, 3), c(5, 5)],
            ..Sightings::default()
        };
        let diff = food.update(&t, &turn2).unwrap();
        assert_eq!(diff, SourceDiff { added: 1, removed: 1 });
        // (1, 1) is now reached via the wrap edge from (5, 5).
        assert_eq!(food.distance(c(1, 1)), Distance::Hops(4));
        assert_eq!(food.field(), &rebuilt(food.field(), &t));
    }

    #[test]
    fn potential_uses_configured_falloff() {
        let t = TerrainGrid::open(1, 6, EdgeBehavior::Absorb).unwrap();
        let cfg = FieldConfig::default().with_falloff(0.25);
        let mut hills = PotentialField::new(&t, SourceKind::EnemyHill, cfg).unwrap();
        let view = Sightings {
            enemy_hills: vec![c(0, 0)],
            ..Sightings::default()
        };
        hills.update(&t, &view).unwrap();
        assert_eq!(hills.potential(c(0, 0)), 1.0);
        assert_eq!(hills.potential(c(0, 2)), 0.0625);
        assert_eq!(hills.name(), "enemy_hill");
    }

    #[test]
    fn uncharted_field_follows_charting() {
        let mut t = TerrainGrid::parse(
            "
            ..??
            ..??
            ",
            EdgeBehavior::Absorb,
        )
        .unwrap();
        let mut explore =
            PotentialField::new(&t, SourceKind::Uncharted, FieldConfig::default()).unwrap();
        explore.update(&t, &Sightings::default()).unwrap();
        assert_eq!(explore.distance(c(0, 0)), Distance::Hops(2));

        t.chart([
            (c(0, 2), TerrainClass::Passable),
            (c(1, 2), TerrainClass::Obstacle),
        ])
        .unwrap();
        explore.update(&t, &Sightings::default()).unwrap();
        assert_eq!(explore.distance(c(0, 0)), Distance::Hops(3));
        assert_eq!(explore.distance(c(1, 2)), Distance::Unknown);
        assert_eq!(explore.field(), &rebuilt(explore.field(), &t));
    }

    #[test]
    fn terrain_change_triggers_rebuild_for_food() {
        // Food behind uncharted terrain becomes reachable once charted,
        // although the food itself did not move.
        let mut t = TerrainGrid::parse("..?..", EdgeBehavior::Absorb).unwrap();
        let mut food = PotentialField::new(&t, SourceKind::Food, FieldConfig::default()).unwrap();
        let view = Sightings {
            food: vec![c(0, 4)],
            ..Sightings::default()
        };
        food.update(&t, &view).unwrap();
        assert_eq!(food.distance(c(0, 0)), Distance::Unknown);

        t.set_class(c(0, 2), TerrainClass::Passable).unwrap();
        let diff = food.update(&t, &view).unwrap();
        assert!(diff.is_empty());
        assert_eq!(food.distance(c(0, 0)), Distance::Hops(4));
    }

    #[test]
    fn recompute_strategy_matches_incremental() {
        let t = TerrainGrid::parse(
            "
            ......
            .%%%%.
            ......
            ",
            EdgeBehavior::Wrap,
        )
        .unwrap();
        let mut inc = PotentialField::new(&t, SourceKind::Food, FieldConfig::default()).unwrap();
        let mut full = PotentialField::new(
            &t,
            SourceKind::Food,
            FieldConfig::default().with_strategy(UpdateStrategy::Recompute),
        )
        .unwrap();
        for food in [
            vec![c(0, 0)],
            vec![c(0, 0), c(2, 5)],
            vec![c(2, 5)],
            vec![c(1, 0), c(0, 3)],
            vec![],
        ] {
            let view = Sightings {
                food,
                ..Sightings::default()
            };
            let a = inc.update(&t, &view).unwrap();
            let b = full.update(&t, &view).unwrap();
            assert_eq!(a, b);
            assert_eq!(inc.field().store(), full.field().store());
        }
    }

    #[test]
    fn update_rejects_out_of_bounds_food() {
        let t = TerrainGrid::open(3, 3, EdgeBehavior::Wrap).unwrap();
        let mut food = PotentialField::new(&t, SourceKind::Food, FieldConfig::default()).unwrap();
        let view = Sightings {
            food: vec![c(7, 7)],
            ..Sightings::default()
        };
        assert!(matches!(
            food.update(&t, &view),
            Err(FieldError::CellOutOfBounds { .. })
        ));
        assert_eq!(food.field().sources().len(), 0);
    }

    #[test]
    fn reset_forgets_sources() {
        let t = TerrainGrid::open(3, 3, EdgeBehavior::Wrap).unwrap();
        let mut food = PotentialField::new(&t, SourceKind::Food, FieldConfig::default()).unwrap();
        let view = Sightings {
            food: vec![c(1, 1)],
            ..Sightings::default()
        };
        food.update(&t, &view).unwrap();
        food.reset();
        assert_eq!(food.field(), &DistanceField::new(3, 3));
        assert_eq!(food.update(&t, &view).unwrap().added, 1);
    }
}
