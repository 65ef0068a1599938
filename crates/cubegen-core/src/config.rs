//! Grid configuration and validation.
//!
//! [`GridConfig`] holds the four parameters of a sphere lattice.
//! [`validate()`](GridConfig::validate) checks them before anything is
//! emitted.

use crate::error::ConfigError;
use crate::geometry::Float3;

/// Parameters of a cubic sphere lattice.
///
/// The lattice spans `[-half_extent, half_extent]` on every axis around
/// `center`, giving `(2 * half_extent + 1)^3` spheres spaced `stride` apart,
/// all of radius `radius`.
///
/// `stride` and `radius` may be any finite value; they are typically
/// positive, but neither sign nor spheres overlapping is checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Origin of the lattice. Default: `(0, 0, 0)`.
    pub center: Float3,
    /// Spacing between adjacent lattice points. Default: 0.6.
    pub stride: f64,
    /// Radius of every sphere. Default: 0.45.
    pub radius: f64,
    /// Lattice steps from the center to the boundary. Default: 2.
    pub half_extent: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            center: Float3::ZERO,
            stride: 0.6,
            radius: 0.45,
            half_extent: 2,
        }
    }
}

impl GridConfig {
    /// Replace the center.
    pub fn with_center(mut self, center: Float3) -> Self {
        self.center = center;
        self
    }

    /// Replace the stride.
    pub fn with_stride(mut self, stride: f64) -> Self {
        self.stride = stride;
        self
    }

    /// Replace the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Replace the half extent.
    pub fn with_half_extent(mut self, half_extent: i32) -> Self {
        self.half_extent = half_extent;
        self
    }

    /// Number of points along one axis: `2 * half_extent + 1`.
    ///
    /// Returns `None` for a negative half extent.
    pub fn side_len(&self) -> Option<u64> {
        let h = u64::try_from(self.half_extent).ok()?;
        Some(2 * h + 1)
    }

    /// Total number of records, `side_len()^3`.
    ///
    /// Returns `None` for a negative half extent or if the count
    /// overflows `usize`.
    pub fn record_count(&self) -> Option<usize> {
        let side = usize::try_from(self.side_len()?).ok()?;
        side.checked_mul(side)?.checked_mul(side)
    }

    /// Check every parameter.
    ///
    /// Rejects a negative or overflowing `half_extent` and any non-finite
    /// float parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.half_extent < 0 {
            return Err(ConfigError::NegativeHalfExtent {
                value: self.half_extent,
            });
        }
        if self.record_count().is_none() {
            return Err(ConfigError::HalfExtentTooLarge {
                value: self.half_extent,
            });
        }
        for (name, value) in [
            ("stride", self.stride),
            ("radius", self.radius),
            ("center.x", self.center.x),
            ("center.y", self.center.y),
            ("center.z", self.center.z),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_match_reference_scene() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.center, Float3::ZERO);
        assert_eq!(cfg.stride, 0.6);
        assert_eq!(cfg.radius, 0.45);
        assert_eq!(cfg.half_extent, 2);
        assert_eq!(cfg.record_count(), Some(125));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_extent_is_single_point() {
        let cfg = GridConfig::default().with_half_extent(0);
        assert_eq!(cfg.side_len(), Some(1));
        assert_eq!(cfg.record_count(), Some(1));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn negative_extent_rejected() {
        let cfg = GridConfig::default().with_half_extent(-1);
        assert_eq!(cfg.side_len(), None);
        assert_eq!(cfg.record_count(), None);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NegativeHalfExtent { value: -1 })
        );
    }

    #[test]
    fn overflowing_extent_rejected() {
        let cfg = GridConfig::default().with_half_extent(i32::MAX);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::HalfExtentTooLarge { value: i32::MAX })
        );
    }

    #[test]
    fn non_finite_stride_rejected() {
        let cfg = GridConfig::default().with_stride(f64::INFINITY);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonFinite { name: "stride", .. })
        ));
    }

    #[test]
    fn nan_radius_rejected() {
        let cfg = GridConfig::default().with_radius(f64::NAN);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonFinite { name: "radius", .. })
        ));
    }

    #[test]
    fn non_finite_center_names_component() {
        let cfg = GridConfig::default().with_center(Float3::new(0.0, f64::NAN, 0.0));
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonFinite { name: "center.y", .. })
        ));
    }

    #[test]
    fn negative_stride_and_radius_allowed() {
        let cfg = GridConfig::default().with_stride(-0.6).with_radius(-1.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::NegativeHalfExtent { value: -3 }.to_string(),
            "half_extent must be non-negative, got -3"
        );
        assert_eq!(
            ConfigError::NonFinite {
                name: "stride",
                value: f64::INFINITY
            }
            .to_string(),
            "stride must be finite, got inf"
        );
    }

    proptest! {
        #[test]
        fn record_count_is_cube_of_side(h in 0i32..200) {
            let cfg = GridConfig::default().with_half_extent(h);
            let side = (2 * h + 1) as usize;
            prop_assert_eq!(cfg.record_count(), Some(side * side * side));
            prop_assert!(cfg.validate().is_ok());
        }
    }
}
