//! Benchmark profiles for the cubegen sphere lattice generator.
//!
//! - [`reference_profile`]: the 5x5x5 reference scene (125 spheres)
//! - [`stress_profile`]: a 101x101x101 lattice (~1M spheres)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cubegen_core::{Float3, GridConfig};

/// The reference scene: default config, 125 spheres.
pub fn reference_profile() -> GridConfig {
    GridConfig::default()
}

/// Stress profile: half extent 50, 1,030,301 spheres around an offset center.
pub fn stress_profile() -> GridConfig {
    GridConfig::default()
        .with_center(Float3::new(12.5, -3.0, 40.0))
        .with_half_extent(50)
}
