//! Terrain queries for Attract potential fields.
//!
//! This crate defines the [`Terrain`] trait, the read-only view of the map
//! that distance propagation consults for grid dimensions, adjacency and
//! passability, along with the [`TerrainGrid`] backend.
//!
//! # Backends
//!
//! - [`TerrainGrid`]: 2D square grid, 4-connected, with configurable
//!   [`EdgeBehavior`] (absorb, clamp, wrap)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid;
pub mod terrain;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use grid::TerrainGrid;
pub use terrain::{Neighbours, Terrain};
