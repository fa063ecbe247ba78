//! Incremental attraction fields over grid terrain.
//!
//! A [`DistanceField`] keeps, for every passable cell, the hop distance to
//! the nearest of a dynamic set of source cells. Sources can be added and
//! removed turn by turn; the field repairs only the region a change
//! affects, and [`DistanceField::recompute`] rebuilds everything from
//! scratch as the reference result.
//!
//! A [`PotentialField`] pairs a distance field with a [`SourceProvider`]
//! that decides which cells are sources (food, enemy hills, uncharted
//! terrain) and turns distances into potentials `falloff^distance`.
//!
//! # Update cycle (each turn)
//!
//! 1. The host updates its [`TerrainGrid`](attract_space::TerrainGrid) and
//!    builds a [`TurnView`] of what it sees.
//! 2. [`FieldBank::update`] (or [`PotentialField::update`] per field)
//!    diffs each provider's sources against the current ones.
//! 3. Consumers read [`PotentialField::potential`] to rank moves.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bank;
pub mod config;
pub mod error;
pub mod field;
mod frontier;
pub mod potential;
pub(crate) mod propagate;
pub mod provider;
pub mod store;

pub use bank::FieldBank;
pub use config::{ConfigError, FieldConfig, UpdateStrategy, DEFAULT_FALLOFF};
pub use error::FieldError;
pub use field::{DistanceField, SourceDiff};
pub use potential::PotentialField;
pub use provider::{Sightings, SourceKind, SourceProvider, TurnView};
pub use store::DistanceStore;
