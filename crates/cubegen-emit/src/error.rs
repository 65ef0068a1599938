//! Error types for lattice emission.

use cubegen_core::ConfigError;
use std::fmt;
use std::io;

/// Errors that can occur while emitting a lattice.
#[derive(Debug)]
pub enum EmitError {
    /// The grid configuration was rejected before any output was written.
    Config(ConfigError),
    /// Writing to the output sink failed.
    Io(io::Error),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid config: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for EmitError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for EmitError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
