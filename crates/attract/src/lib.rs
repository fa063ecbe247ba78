//! Attract: incremental attraction fields for turn-based grid agents.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Attract sub-crates. For most users, adding `attract` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use attract::prelude::*;
//!
//! let mut terrain = TerrainGrid::parse(
//!     "
//!     ....??
//!     .%%.??
//!     ......
//!     ",
//!     EdgeBehavior::Absorb,
//! )
//! .unwrap();
//! let mut bank = FieldBank::new(&terrain, FieldConfig::default()).unwrap();
//!
//! let view = Sightings {
//!     food: vec![Cell::new(2, 0)],
//!     enemy_hills: vec![],
//! };
//! bank.update(&terrain, &view).unwrap();
//! assert_eq!(bank.food.distance(Cell::new(0, 0)), Distance::Hops(2));
//! assert_eq!(bank.uncharted.distance(Cell::new(0, 3)), Distance::Hops(1));
//!
//! // Next turn: more of the map is charted.
//! terrain.set_class(Cell::new(0, 4), TerrainClass::Passable).unwrap();
//! bank.update(&terrain, &view).unwrap();
//! assert_eq!(bank.uncharted.distance(Cell::new(0, 4)), Distance::Hops(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `attract-core` | Cells, distances, terrain classes |
//! | [`space`] | `attract-space` | Terrain trait, grid backend, map parsing |
//! | [`field`] | `attract-field` | Distance fields, potential fields, providers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`attract-core`).
///
/// [`types::Cell`] coordinates, [`types::Distance`] values and the
/// [`types::TerrainClass`] of a cell.
pub use attract_core as types;

/// Terrain queries (`attract-space`).
///
/// Provides the [`space::Terrain`] trait and the [`space::TerrainGrid`]
/// backend with configurable [`space::EdgeBehavior`].
pub use attract_space as space;

/// Distance and potential fields (`attract-field`).
///
/// [`field::DistanceField`] maintains hop distances to a dynamic source
/// set; [`field::PotentialField`] and [`field::FieldBank`] drive it from
/// per-turn sightings.
pub use attract_field as field;

/// Common imports for typical Attract usage.
///
/// ```rust
/// use attract::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use attract_core::{Cell, Distance, TerrainClass};

    // Space
    pub use attract_space::{EdgeBehavior, Terrain, TerrainGrid};

    // Fields
    pub use attract_field::{
        DistanceField, FieldBank, FieldConfig, PotentialField, Sightings, SourceKind,
        SourceProvider, TurnView, UpdateStrategy,
    };

    // Errors
    pub use attract_field::{ConfigError, FieldError};
    pub use attract_space::SpaceError;
}
