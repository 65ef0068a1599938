//! World-space positions and the emitted sphere record.

use crate::index::LatticeIndex;
use std::fmt;

/// A three-component world-space vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Float3 {
    /// First coordinate.
    pub x: f64,
    /// Second coordinate.
    pub y: f64,
    /// Third coordinate.
    pub z: f64,
}

impl Float3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Build a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as an array in `x, y, z` order.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// `true` if every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Float3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Float3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One generated sphere: a lattice position and the shared radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePlacement {
    /// World-space center of the sphere.
    pub position: Float3,
    /// Sphere radius. Identical for every record of a grid.
    pub radius: f64,
}

/// Map a lattice index to its world-space position.
///
/// The axis assignment is permuted: `i` offsets the first coordinate,
/// `j` the second and the outermost axis `k` the third. Downstream scenes
/// depend on this layout, so it must not be "straightened".
///
/// # Examples
///
/// ```
/// use cubegen_core::{index_to_position, Float3, LatticeIndex};
///
/// let p = index_to_position(Float3::ZERO, 1.0, LatticeIndex::new(3, 1, 2));
/// assert_eq!(p, Float3::new(1.0, 2.0, 3.0));
/// ```
pub fn index_to_position(center: Float3, stride: f64, index: LatticeIndex) -> Float3 {
    Float3 {
        x: center.x + f64::from(index.i) * stride,
        y: center.y + f64::from(index.j) * stride,
        z: center.z + f64::from(index.k) * stride,
    }
}
