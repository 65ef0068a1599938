//! The lattice emitter and its lazy placement iterator.

use std::iter::FusedIterator;

use cubegen_core::{
    index_to_position, ConfigError, Float3, GridConfig, LatticeIndex, SpherePlacement,
};
use cubegen_space::{Cube3, Indices, Lattice};

/// Produces the sphere placements of a validated [`GridConfig`].
///
/// Construction validates the configuration, so an existing emitter always
/// yields exactly [`record_count`](Self::record_count) placements.
///
/// # Examples
///
/// ```
/// use cubegen_core::GridConfig;
/// use cubegen_emit::LatticeEmitter;
///
/// let emitter = LatticeEmitter::new(GridConfig::default()).unwrap();
/// assert_eq!(emitter.record_count(), 125);
///
/// let first = emitter.placements().next().unwrap();
/// assert!((first.position.x + 1.2).abs() < 1e-12);
/// assert_eq!(first.radius, 0.45);
/// ```
#[derive(Debug, Clone)]
pub struct LatticeEmitter {
    config: GridConfig,
    cube: Cube3,
}

impl LatticeEmitter {
    /// Validate `config` and build an emitter for it.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let cube = Cube3::from_config(&config)?;
        Ok(Self { config, cube })
    }

    /// The configuration this emitter was built from.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The index lattice being walked.
    pub fn lattice(&self) -> &Cube3 {
        &self.cube
    }

    /// Number of placements, `(2 * half_extent + 1)^3`.
    pub fn record_count(&self) -> usize {
        self.cube.cell_count()
    }

    /// Lazy iterator over every placement in canonical order.
    pub fn placements(&self) -> Placements {
        Placements {
            indices: self.cube.indices(),
            center: self.config.center,
            stride: self.config.stride,
            radius: self.config.radius,
        }
    }
}

impl IntoIterator for &LatticeEmitter {
    type Item = SpherePlacement;
    type IntoIter = Placements;

    fn into_iter(self) -> Placements {
        self.placements()
    }
}

/// Iterator over the placements of a [`LatticeEmitter`].
///
/// The outermost index axis varies slowest. Every item carries the same
/// radius.
#[derive(Debug, Clone)]
pub struct Placements {
    indices: Indices,
    center: Float3,
    stride: f64,
    radius: f64,
}

impl Placements {
    fn place(&self, index: LatticeIndex) -> SpherePlacement {
        SpherePlacement {
            position: index_to_position(self.center, self.stride, index),
            radius: self.radius,
        }
    }
}

impl Iterator for Placements {
    type Item = SpherePlacement;

    fn next(&mut self) -> Option<SpherePlacement> {
        let index = self.indices.next()?;
        Some(self.place(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<SpherePlacement> {
        let index = self.indices.nth(n)?;
        Some(self.place(index))
    }
}

impl ExactSizeIterator for Placements {}

impl FusedIterator for Placements {}
