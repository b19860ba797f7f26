//! Signal-space shaping and quantization.
//!
//! Raw source samples arrive in whatever range the generator produces.
//! [`Polarity`] converts them into a well-defined signal space: `[-1,1]` for
//! bipolar routing, `[0,1]` for unipolar. The conversion is dual-domain:
//! a value already inside the *opposite* domain is reinterpreted (remapped),
//! anything else is clamped into the requested domain. Presets depend on
//! this exact interpretation, boundary cases included — `shape(0.0)` under
//! unipolar maps to `0.5` because `0` lies inside `[-1,1]`.

use libm::roundf;

/// How an assignment interprets its raw source samples.
///
/// # Example
///
/// ```rust
/// use lumia_core::Polarity;
///
/// // A [0,1] envelope reinterpreted as bipolar swings around zero.
/// assert!((Polarity::Bipolar.shape(0.5)).abs() < 1e-6);
/// // An already-bipolar sample under unipolar routing is remapped.
/// assert!((Polarity::Unipolar.shape(-0.2) - 0.4).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarity {
    /// Signal space `[-1,1]`, centered at zero.
    #[default]
    Bipolar,
    /// Signal space `[0,1]`, one-directional.
    Unipolar,
}

impl Polarity {
    /// Shapes a raw sample into this polarity's signal space.
    ///
    /// Non-finite samples shape to `0.0`.
    #[inline]
    pub fn shape(self, raw: f32) -> f32 {
        if !raw.is_finite() {
            return 0.0;
        }
        match self {
            Polarity::Unipolar => {
                if (-1.0..=1.0).contains(&raw) {
                    (raw + 1.0) * 0.5
                } else {
                    raw.clamp(0.0, 1.0)
                }
            }
            Polarity::Bipolar => {
                if (0.0..=1.0).contains(&raw) {
                    raw * 2.0 - 1.0
                } else {
                    raw.clamp(-1.0, 1.0)
                }
            }
        }
    }

    /// The `(lo, hi)` bounds of this polarity's signal space.
    #[inline]
    pub const fn domain(self) -> (f32, f32) {
        match self {
            Polarity::Bipolar => (-1.0, 1.0),
            Polarity::Unipolar => (0.0, 1.0),
        }
    }
}

/// Snaps a shaped signal onto `steps` evenly spaced levels spanning the
/// polarity's signal domain.
///
/// Both domain endpoints are reachable, so exactly `steps` distinct output
/// levels exist. `steps <= 1` is a passthrough (no quantization).
///
/// # Example
///
/// ```rust
/// use lumia_core::{Polarity, quantize};
///
/// // Three levels over [0,1]: 0.0, 0.5, 1.0.
/// assert_eq!(quantize(0.3, 3, Polarity::Unipolar), 0.5);
/// assert_eq!(quantize(0.9, 3, Polarity::Unipolar), 1.0);
/// ```
#[inline]
pub fn quantize(value: f32, steps: u32, polarity: Polarity) -> f32 {
    if steps <= 1 {
        return value;
    }
    let (lo, hi) = polarity.domain();
    let span = hi - lo;
    let frac = ((value - lo) / span).clamp(0.0, 1.0);
    let levels = (steps - 1) as f32;
    lo + roundf(frac * levels) / levels * span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bipolar_reinterprets_unipolar_domain() {
        assert!((Polarity::Bipolar.shape(0.5)).abs() < 1e-6);
        assert!((Polarity::Bipolar.shape(0.0) - (-1.0)).abs() < 1e-6);
        assert!((Polarity::Bipolar.shape(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn bipolar_passes_and_clamps_outside_unipolar_domain() {
        // -0.5 is outside [0,1], so it passes through unchanged.
        assert!((Polarity::Bipolar.shape(-0.5) - (-0.5)).abs() < 1e-6);
        assert_eq!(Polarity::Bipolar.shape(-3.0), -1.0);
        assert_eq!(Polarity::Bipolar.shape(2.5), 1.0);
    }

    #[test]
    fn unipolar_reinterprets_bipolar_domain() {
        assert!((Polarity::Unipolar.shape(-0.2) - 0.4).abs() < 1e-6);
        assert!((Polarity::Unipolar.shape(-1.0)).abs() < 1e-6);
        assert!((Polarity::Unipolar.shape(1.0) - 1.0).abs() < 1e-6);
        // Boundary case presets depend on: 0 lies in [-1,1].
        assert!((Polarity::Unipolar.shape(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn unipolar_clamps_outside_bipolar_domain() {
        assert_eq!(Polarity::Unipolar.shape(1.5), 1.0);
        assert_eq!(Polarity::Unipolar.shape(-2.0), 0.0);
    }

    #[test]
    fn non_finite_shapes_to_zero() {
        assert_eq!(Polarity::Bipolar.shape(f32::NAN), 0.0);
        assert_eq!(Polarity::Unipolar.shape(f32::INFINITY), 0.0);
        assert_eq!(Polarity::Bipolar.shape(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn quantize_passthrough_below_two_steps() {
        assert_eq!(quantize(0.37, 0, Polarity::Unipolar), 0.37);
        assert_eq!(quantize(0.37, 1, Polarity::Unipolar), 0.37);
    }

    #[test]
    fn quantize_unipolar_levels() {
        // 5 levels over [0,1]: 0.0, 0.25, 0.5, 0.75, 1.0.
        assert_eq!(quantize(0.1, 5, Polarity::Unipolar), 0.0);
        assert_eq!(quantize(0.2, 5, Polarity::Unipolar), 0.25);
        assert_eq!(quantize(0.6, 5, Polarity::Unipolar), 0.5);
        assert_eq!(quantize(1.0, 5, Polarity::Unipolar), 1.0);
    }

    #[test]
    fn quantize_bipolar_levels_include_endpoints() {
        // 3 levels over [-1,1]: -1.0, 0.0, 1.0.
        assert_eq!(quantize(-0.9, 3, Polarity::Bipolar), -1.0);
        assert_eq!(quantize(0.2, 3, Polarity::Bipolar), 0.0);
        assert_eq!(quantize(0.8, 3, Polarity::Bipolar), 1.0);
    }

    #[test]
    fn quantize_two_steps_is_a_gate() {
        assert_eq!(quantize(0.49, 2, Polarity::Unipolar), 0.0);
        assert_eq!(quantize(0.51, 2, Polarity::Unipolar), 1.0);
        assert_eq!(quantize(-0.1, 2, Polarity::Bipolar), -1.0);
        assert_eq!(quantize(0.1, 2, Polarity::Bipolar), 1.0);
    }
}
