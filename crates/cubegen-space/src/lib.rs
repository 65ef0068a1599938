//! Integer lattice topologies for cubegen.
//!
//! This crate defines the [`Lattice`] trait, the index-space abstraction the
//! emitter walks, along with the [`Cube3`] backend: the cube of integer
//! offsets `[-h, h]^3` around a grid center.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cube3;
pub mod error;
pub mod lattice;

#[cfg(test)]
pub(crate) mod compliance;

pub use cube3::{Cube3, Indices};
pub use error::SpaceError;
pub use lattice::Lattice;
