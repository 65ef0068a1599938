//! Lattice index types and the [`Coord`] alias.

use smallvec::{smallvec, SmallVec};
use std::fmt;

/// A lattice coordinate in `[k, i, j]` order.
///
/// Inline storage avoids heap allocation for the three-axis case.
pub type Coord = SmallVec<[i32; 4]>;

/// Integer offset of one lattice point from the grid center.
///
/// `k` is the outermost (slowest-varying) axis of the iteration, `i` the
/// middle and `j` the innermost. Each component lies in
/// `[-half_extent, half_extent]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeIndex {
    /// Outermost axis. Maps to the third position coordinate.
    pub k: i32,
    /// Middle axis. Maps to the first position coordinate.
    pub i: i32,
    /// Innermost axis. Maps to the second position coordinate.
    pub j: i32,
}

impl LatticeIndex {
    /// Build an index from its three components.
    pub const fn new(k: i32, i: i32, j: i32) -> Self {
        Self { k, i, j }
    }

    /// Interpret a `[k, i, j]` coordinate slice.
    ///
    /// Returns `None` unless the slice has exactly three components.
    pub fn from_slice(coord: &[i32]) -> Option<Self> {
        match *coord {
            [k, i, j] => Some(Self { k, i, j }),
            _ => None,
        }
    }

    /// The `[k, i, j]` coordinate of this index.
    pub fn to_coord(self) -> Coord {
        smallvec![self.k, self.i, self.j]
    }
}

impl From<LatticeIndex> for Coord {
    fn from(index: LatticeIndex) -> Self {
        index.to_coord()
    }
}

impl fmt::Display for LatticeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.k, self.i, self.j)
    }
}
