//! Core types for the Attract potential-field engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by every other crate in the workspace: grid
//! cell coordinates, hop distances, and terrain classification.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod distance;
pub mod terrain;

pub use cell::Cell;
pub use distance::Distance;
pub use terrain::TerrainClass;
