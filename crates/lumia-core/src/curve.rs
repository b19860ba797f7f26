//! Response curves for unit ↔ normalized control-space conversion.
//!
//! Modulation contributions are combined in a canonical \[0,1\] control space
//! regardless of a parameter's raw unit range. [`ResponseCurve`] owns the
//! mapping in both directions. For [`Exponential`](ResponseCurve::Exponential)
//! parameters the *inverse* shaping (square root) is applied on the way into
//! control space, so that linear movement through control space corresponds
//! to perceptually even movement of the parameter. The two directions are
//! exact inverses: `from_normalized(to_normalized(v))` recovers `v` for any
//! in-range `v`.

use libm::sqrtf;

/// Mapping between a parameter's raw value range and normalized \[0,1\]
/// control space.
///
/// # Example
///
/// ```rust
/// use lumia_core::ResponseCurve;
///
/// // Exponential spreads out the low end of the range.
/// let n = ResponseCurve::Exponential.to_normalized(25.0, 0.0, 100.0);
/// assert!((n - 0.5).abs() < 1e-6); // sqrt(0.25)
///
/// let v = ResponseCurve::Exponential.from_normalized(0.5, 0.0, 100.0);
/// assert!((v - 25.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResponseCurve {
    /// Linear mapping. Equal resolution across the range.
    #[default]
    Linear,
    /// Exponential response. Control space stores the square root of the
    /// linear fraction; denormalization squares it back.
    Exponential,
}

impl ResponseCurve {
    /// Maps a raw value into \[0,1\] control space.
    ///
    /// A reversed `min > max` pair behaves as the swapped pair. A degenerate
    /// range (`max == min`) is treated as span 1 to avoid division by zero,
    /// and non-finite inputs collapse to 0 rather than propagating NaN.
    #[inline]
    pub fn to_normalized(self, value: f32, min: f32, max: f32) -> f32 {
        let (lo, hi) = ordered(min, max);
        let span = if hi - lo == 0.0 { 1.0 } else { hi - lo };
        let frac = clamp01((value - lo) / span);
        match self {
            ResponseCurve::Linear => frac,
            ResponseCurve::Exponential => sqrtf(frac),
        }
    }

    /// Maps a \[0,1\] control-space value back into the raw range.
    ///
    /// The input is clamped to \[0,1\] first; the result always lies inside
    /// the ordered `[min, max]` range.
    #[inline]
    pub fn from_normalized(self, normalized: f32, min: f32, max: f32) -> f32 {
        let (lo, hi) = ordered(min, max);
        let n = clamp01(normalized);
        let curved = match self {
            ResponseCurve::Linear => n,
            ResponseCurve::Exponential => n * n,
        };
        lo + (hi - lo) * curved
    }
}

/// Orders a range pair so `lo <= hi`.
#[inline]
fn ordered(min: f32, max: f32) -> (f32, f32) {
    if min <= max { (min, max) } else { (max, min) }
}

/// Clamps to \[0,1\], collapsing non-finite values to 0.
#[inline]
pub(crate) fn clamp01(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
