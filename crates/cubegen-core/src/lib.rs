//! Core types for the cubegen sphere lattice generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! grid configuration, the lattice index and coordinate types, the emitted
//! [`SpherePlacement`] record, and the index-to-position mapping shared by
//! every other crate in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod index;

pub use config::GridConfig;
pub use error::ConfigError;
pub use geometry::{index_to_position, Float3, SpherePlacement};
pub use index::{Coord, LatticeIndex};
