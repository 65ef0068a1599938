//! Sphere lattice emission for cubegen.
//!
//! Walks the cubic index lattice of a [`GridConfig`], maps every index to a
//! [`SpherePlacement`], and renders each placement as one line of
//! initializer text ready to paste into an array literal.
//!
//! # Architecture
//!
//! - [`LatticeEmitter`] validates a configuration and yields placements lazily
//! - [`SphereLiteral`] renders one placement as `{XMFLOAT3(x, y, z), r },`
//! - [`LiteralWriter`] streams rendered lines to any `Write` sink
//! - [`emit`] ties the three together for the common case
//!
//! # Format
//!
//! ```text
//! {XMFLOAT3(-1.20f, -1.20f, -1.20f), 0.45f },
//! {XMFLOAT3(-1.20f, -0.60f, -1.20f), 0.45f },
//! ...
//! ```
//!
//! [`GridConfig`]: cubegen_core::GridConfig
//! [`SpherePlacement`]: cubegen_core::SpherePlacement

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod emitter;
pub mod error;
pub mod literal;
pub mod writer;

pub use emitter::{LatticeEmitter, Placements};
pub use error::EmitError;
pub use literal::{FloatLiteral, SphereLiteral, DECIMALS};
pub use writer::{emit, LiteralWriter};
