//! The core `Lattice` trait.

use cubegen_core::Coord;
use smallvec::SmallVec;

/// An enumerable set of integer lattice points.
///
/// Backends define which points exist and the deterministic order in which
/// they are visited. The emitter turns that order into output order, so two
/// calls on the same lattice must always agree.
pub trait Lattice {
    /// Number of axes.
    fn ndim(&self) -> usize;

    /// Total number of points.
    fn cell_count(&self) -> usize;

    /// All points in deterministic canonical order.
    fn canonical_ordering(&self) -> Vec<Coord>;

    /// Position of a coordinate in the canonical ordering.
    ///
    /// Returns the index such that `canonical_ordering()[index] == coord`,
    /// or `None` if the coordinate is not a point of this lattice.
    /// Default implementation performs a linear search; backends should
    /// override with O(1) arithmetic.
    fn canonical_rank(&self, coord: &Coord) -> Option<usize> {
        self.canonical_ordering().iter().position(|c| c == coord)
    }

    /// Position of a coordinate slice in the canonical ordering.
    ///
    /// Avoids building a temporary `Coord` when the backend overrides it.
    fn canonical_rank_slice(&self, coord: &[i32]) -> Option<usize> {
        let coord: Coord = SmallVec::from_slice(coord);
        self.canonical_rank(&coord)
    }
}
