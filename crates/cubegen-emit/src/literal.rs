//! Initializer-literal formatting.
//!
//! Every number renders in fixed-point notation with [`DECIMALS`] fractional
//! digits and a trailing `f`, the single-precision suffix of the consuming
//! language. Rounding applies to the exact binary value, so a tiny negative
//! such as `-0.001` renders as `-0.00f`.

use cubegen_core::SpherePlacement;
use std::fmt;

/// Fractional digits printed for every number.
pub const DECIMALS: usize = 2;

/// `Display` adapter for one `f`-suffixed float literal, e.g. `-1.20f`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatLiteral(pub f64);

impl fmt::Display for FloatLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}f", DECIMALS, self.0)
    }
}

/// `Display` adapter for one placement record.
///
/// Renders `{XMFLOAT3(X.XXf, Y.YYf, Z.ZZf), R.RRf },` with no trailing
/// newline.
///
/// # Examples
///
/// ```
/// use cubegen_core::{Float3, SpherePlacement};
/// use cubegen_emit::SphereLiteral;
///
/// let p = SpherePlacement { position: Float3::new(-1.2, 0.0, 0.6), radius: 0.45 };
/// assert_eq!(
///     SphereLiteral(&p).to_string(),
///     "{XMFLOAT3(-1.20f, 0.00f, 0.60f), 0.45f },"
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SphereLiteral<'a>(pub &'a SpherePlacement);

impl fmt::Display for SphereLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        write!(
            f,
            "{{XMFLOAT3({}, {}, {}), {} }},",
            FloatLiteral(p.position.x),
            FloatLiteral(p.position.y),
            FloatLiteral(p.position.z),
            FloatLiteral(p.radius),
        )
    }
}
