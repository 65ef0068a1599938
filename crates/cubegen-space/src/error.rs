//! Error types for lattice construction.

use std::fmt;

/// Errors arising from lattice construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// The half extent is below zero.
    NegativeExtent {
        /// The offending value.
        value: i32,
    },
    /// A dimension yields more cells than `usize` can count.
    DimensionTooLarge {
        /// Which parameter.
        name: &'static str,
        /// The offending value.
        value: i32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeExtent { value } => {
                write!(f, "half extent must be non-negative, got {value}")
            }
            Self::DimensionTooLarge { name, value } => {
                write!(f, "{name} = {value} overflows the cell count")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
