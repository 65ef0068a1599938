//! 3D cube of integer offsets around a grid center.
//!
//! # Coordinate System
//!
//! Integer triples `[k, i, j]` with every component in `[-h, h]`, where `h`
//! is the half extent. The cube has `(2h + 1)^3` points.
//!
//! # Ordering
//!
//! Canonical ordering is lexicographic over `(k, i, j)`: `k` varies slowest,
//! `j` fastest. Rank arithmetic is O(1) in both directions, so the emitter
//! can walk the cube lazily without materializing it.

use crate::error::SpaceError;
use crate::lattice::Lattice;
use cubegen_core::{ConfigError, Coord, GridConfig, LatticeIndex};
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// A cubic block of integer offsets `[-h, h]^3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube3 {
    /// Steps from the center to the boundary on each axis.
    half_extent: i32,
    /// Points per axis, `2h + 1`.
    side: usize,
    /// Precomputed `side^3`.
    cell_count: usize,
}

impl Cube3 {
    /// Create the cube `[-half_extent, half_extent]^3`.
    ///
    /// Returns `Err(SpaceError::NegativeExtent)` if `half_extent < 0`, or
    /// `Err(SpaceError::DimensionTooLarge)` if the point count overflows
    /// `usize`.
    pub fn new(half_extent: i32) -> Result<Self, SpaceError> {
        let h = u64::try_from(half_extent)
            .map_err(|_| SpaceError::NegativeExtent { value: half_extent })?;
        let too_large = SpaceError::DimensionTooLarge {
            name: "half_extent",
            value: half_extent,
        };
        let side = usize::try_from(2 * h + 1).map_err(|_| too_large.clone())?;
        let cell_count = side
            .checked_mul(side)
            .and_then(|sq| sq.checked_mul(side))
            .ok_or(too_large)?;
        Ok(Self {
            half_extent,
            side,
            cell_count,
        })
    }

    /// The cube spanned by a grid configuration.
    pub fn from_config(config: &GridConfig) -> Result<Self, SpaceError> {
        Self::new(config.half_extent)
    }

    /// Half extent `h`.
    pub fn half_extent(&self) -> i32 {
        self.half_extent
    }

    /// Points per axis, `2h + 1`.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Always returns `false`: even `h = 0` holds the center point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Valid offsets along one axis, `-h..=h`.
    pub fn axis(&self) -> RangeInclusive<i32> {
        -self.half_extent..=self.half_extent
    }

    /// `true` if every component of `index` lies within `[-h, h]`.
    pub fn contains(&self, index: LatticeIndex) -> bool {
        let axis = self.axis();
        axis.contains(&index.k) && axis.contains(&index.i) && axis.contains(&index.j)
    }

    /// Inverse of [`rank_of`](Self::rank_of): the index at a canonical rank.
    ///
    /// Returns `None` if `rank >= cell_count()`.
    pub fn index_at(&self, rank: usize) -> Option<LatticeIndex> {
        if rank >= self.cell_count {
            return None;
        }
        let plane = self.side * self.side;
        let k = rank / plane;
        let rem = rank % plane;
        let i = rem / self.side;
        let j = rem % self.side;
        Some(LatticeIndex::new(
            self.offset(k),
            self.offset(i),
            self.offset(j),
        ))
    }

    /// Canonical rank of an index, or `None` if it lies outside the cube.
    pub fn rank_of(&self, index: LatticeIndex) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let k = self.position(index.k);
        let i = self.position(index.i);
        let j = self.position(index.j);
        Some((k * self.side + i) * self.side + j)
    }

    /// Lazy iterator over every index in canonical order.
    pub fn indices(&self) -> Indices {
        Indices {
            cube: self.clone(),
            front: 0,
        }
    }

    /// Axis position `0..side` to signed offset `-h..=h`.
    fn offset(&self, pos: usize) -> i32 {
        // pos < side = 2h + 1, so the result lies in [-h, h] and fits i32.
        (pos as i64 - i64::from(self.half_extent)) as i32
    }

    /// Signed offset `-h..=h` to axis position `0..side`. Caller checks bounds.
    fn position(&self, offset: i32) -> usize {
        (i64::from(offset) + i64::from(self.half_extent)) as usize
    }
}

impl Lattice for Cube3 {
    fn ndim(&self) -> usize {
        3
    }

    fn cell_count(&self) -> usize {
        self.cell_count
    }

    fn canonical_ordering(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.cell_count);
        for k in self.axis() {
            for i in self.axis() {
                for j in self.axis() {
                    out.push(LatticeIndex::new(k, i, j).to_coord());
                }
            }
        }
        debug_assert_eq!(
            out.len(),
            self.cell_count,
            "canonical_ordering produced {} cells but cell_count is {}",
            out.len(),
            self.cell_count
        );
        out
    }

    fn canonical_rank(&self, coord: &Coord) -> Option<usize> {
        self.canonical_rank_slice(coord)
    }

    fn canonical_rank_slice(&self, coord: &[i32]) -> Option<usize> {
        self.rank_of(LatticeIndex::from_slice(coord)?)
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::NegativeExtent { value } => Self::NegativeHalfExtent { value },
            SpaceError::DimensionTooLarge { value, .. } => Self::HalfExtentTooLarge { value },
        }
    }
}

/// Iterator over the indices of a [`Cube3`] in canonical order.
///
/// Produced by [`Cube3::indices`]. Yields exactly `cell_count()` items.
#[derive(Debug, Clone)]
pub struct Indices {
    cube: Cube3,
    front: usize,
}

impl Iterator for Indices {
    type Item = LatticeIndex;

    fn next(&mut self) -> Option<LatticeIndex> {
        let index = self.cube.index_at(self.front)?;
        self.front += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cube.cell_count.saturating_sub(self.front);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<LatticeIndex> {
        self.front = self.front.saturating_add(n).min(self.cube.cell_count);
        self.next()
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}
