//! Lattice trait compliance test helpers.
//!
//! These functions verify that a Lattice implementation satisfies the
//! invariants required by the trait contract.

use crate::lattice::Lattice;
use indexmap::IndexSet;

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(lattice: &dyn Lattice) {
    let a = lattice.canonical_ordering();
    let b = lattice.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique coords.
pub fn assert_canonical_ordering_complete(lattice: &dyn Lattice) {
    let ordering = lattice.canonical_ordering();
    assert_eq!(
        ordering.len(),
        lattice.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        lattice.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        lattice.cell_count(),
        "canonical_ordering has duplicates"
    );
}

/// Assert that every coordinate has rank `ndim` components.
pub fn assert_coords_match_ndim(lattice: &dyn Lattice) {
    for coord in lattice.canonical_ordering() {
        assert_eq!(
            coord.len(),
            lattice.ndim(),
            "coord {coord:?} has {} components, expected {}",
            coord.len(),
            lattice.ndim()
        );
    }
}

/// Assert that `canonical_rank(ordering[i]) == Some(i)` for every point.
pub fn assert_rank_matches_ordering(lattice: &dyn Lattice) {
    for (i, coord) in lattice.canonical_ordering().iter().enumerate() {
        assert_eq!(
            lattice.canonical_rank(coord),
            Some(i),
            "rank({coord:?}) should be {i}"
        );
        assert_eq!(lattice.canonical_rank_slice(coord), Some(i));
    }
}

/// Assert that the canonical ordering is strictly increasing lexicographically.
pub fn assert_ordering_lexicographic(lattice: &dyn Lattice) {
    let ordering = lattice.canonical_ordering();
    for pair in ordering.windows(2) {
        assert!(
            pair[0] < pair[1],
            "ordering not lexicographic: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Run all 5 compliance checks on a lattice.
pub fn run_full_compliance(lattice: &dyn Lattice) {
    assert_canonical_ordering_deterministic(lattice);
    assert_canonical_ordering_complete(lattice);
    assert_coords_match_ndim(lattice);
    assert_rank_matches_ordering(lattice);
    assert_ordering_lexicographic(lattice);
}
