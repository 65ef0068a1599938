//! Configuration error types.

use std::error::Error;
use std::fmt;

/// Errors detected by [`GridConfig::validate`](crate::GridConfig::validate).
///
/// Validation runs before any record is produced, so a rejected
/// configuration never yields partial output.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `half_extent` is below zero.
    NegativeHalfExtent {
        /// The configured value.
        value: i32,
    },
    /// `half_extent` is so large the record count overflows `usize`.
    HalfExtentTooLarge {
        /// The configured value.
        value: i32,
    },
    /// A floating-point parameter is NaN or infinite.
    NonFinite {
        /// Which parameter (`"stride"`, `"radius"`, `"center.x"`, ...).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeHalfExtent { value } => {
                write!(f, "half_extent must be non-negative, got {value}")
            }
            Self::HalfExtentTooLarge { value } => {
                write!(f, "half_extent {value} yields more records than usize can count")
            }
            Self::NonFinite { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
