//! Lumia Core - modulation primitives for generative synthesis
//!
//! This crate provides the numeric building blocks for lumia's parameter
//! modulation system: signal-space shaping, quantization, response curves,
//! and time-based smoothing. All of it is pure arithmetic with no allocation,
//! suitable for a per-tick hot path.
//!
//! # Core Abstractions
//!
//! ## Response Curves
//!
//! - [`ResponseCurve`] - Curve-aware mapping between a parameter's raw unit
//!   range and the normalized \[0,1\] control space used to combine base
//!   values with modulation contributions
//!
//! ## Signal Shaping
//!
//! - [`Polarity`] - Bipolar/unipolar interpretation of raw signal samples
//! - [`quantize`] - Snap a shaped signal onto a fixed number of levels
//!
//! ## Smoothing
//!
//! - [`FrameSmoother`] - Frame-rate-independent one-pole smoothing driven by
//!   elapsed wall-clock time rather than a fixed sample rate
//!
//! # Example
//!
//! ```rust
//! use lumia_core::{FrameSmoother, Polarity, ResponseCurve};
//!
//! // An LFO sample in [0,1] reinterpreted as bipolar signal space.
//! let shaped = Polarity::Bipolar.shape(0.75);
//! assert!((shaped - 0.5).abs() < 1e-6);
//!
//! // Smooth toward it over a 16ms frame.
//! let mut smoother = FrameSmoother::new(0.0);
//! let value = smoother.advance(shaped, 0.3, 0.016);
//! assert!(value > 0.0 && value < shaped);
//!
//! // Map a normalized control value into a parameter's raw range.
//! let raw = ResponseCurve::Linear.from_normalized(0.5, 0.0, 200.0);
//! assert!((raw - 100.0).abs() < 1e-3);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! lumia-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod curve;
pub mod shape;
pub mod smoother;

pub use curve::ResponseCurve;
pub use shape::{Polarity, quantize};
pub use smoother::FrameSmoother;
