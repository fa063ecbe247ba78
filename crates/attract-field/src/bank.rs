//! [`FieldBank`]: the three attraction fields an agent keeps per map.

use crate::config::{ConfigError, FieldConfig};
use crate::error::FieldError;
use crate::field::SourceDiff;
use crate::potential::PotentialField;
use crate::provider::{SourceKind, TurnView};
use attract_space::Terrain;
use std::thread;
use tracing::debug;

/// Food, enemy-hill and uncharted fields over the same terrain.
///
/// The fields share nothing but the terrain they read, so
/// [`update_parallel`](Self::update_parallel) refreshes them on separate
/// threads.
#[derive(Debug)]
pub struct FieldBank {
    /// Distance to the nearest visible food.
    pub food: PotentialField,
    /// Distance to the nearest known enemy hill.
    pub enemy_hills: PotentialField,
    /// Distance to the nearest uncharted cell.
    pub uncharted: PotentialField,
}

impl FieldBank {
    /// Build the three fields with a shared configuration.
    pub fn new(terrain: &dyn Terrain, config: FieldConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            food: PotentialField::new(terrain, SourceKind::Food, config.clone())?,
            enemy_hills: PotentialField::new(terrain, SourceKind::EnemyHill, config.clone())?,
            uncharted: PotentialField::new(terrain, SourceKind::Uncharted, config)?,
        })
    }

    /// Update the fields one after another.
    ///
    /// Returns the source changes in `[food, enemy_hills, uncharted]`
    /// order. Stops at the first field that fails.
    pub fn update(&mut self, terrain: &dyn Terrain, view: &dyn TurnView) -> Result<[SourceDiff; 3], FieldError> {
        let diffs = [
            self.food.update(terrain, view)?,
            self.enemy_hills.update(terrain, view)?,
            self.uncharted.update(terrain, view)?,
        ];
        debug!(?diffs, "updated field bank");
        Ok(diffs)
    }

    /// Update the three fields on scoped threads.
    ///
    /// Produces the same fields and diffs as [`update`](Self::update).
    /// On error every field has still been given the chance to update and
    /// the first error in `[food, enemy_hills, uncharted]` order is
    /// returned.
    pub fn update_parallel(
        &mut self,
        terrain: &dyn Terrain,
        view: &dyn TurnView,
    ) -> Result<[SourceDiff; 3], FieldError> {
        let Self {
            food,
            enemy_hills,
            uncharted,
        } = self;

        let (food, enemy_hills, uncharted) = thread::scope(|s| {
            let food = s.spawn(move || food.update(terrain, view));
            let hills = s.spawn(move || enemy_hills.update(terrain, view));
            let uncharted = uncharted.update(terrain, view);
            (join(food), join(hills), uncharted)
        });

        let diffs = [food?, enemy_hills?, uncharted?];
        debug!(?diffs, "updated field bank in parallel");
        Ok(diffs)
    }
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}
