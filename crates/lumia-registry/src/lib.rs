//! Lumia Registry - the modulatable parameter space.
//!
//! This crate is the source of truth for what can be modulated. Each
//! [`TargetDefinition`] declares a parameter's valid range, default value,
//! response curve, and owning module; the [`TargetRegistry`] stores those
//! definitions in registration order, tracks each target's current *base*
//! (unmodulated) value, and is the sole authority for converting between raw
//! parameter units and the normalized \[0,1\] control space that modulation
//! contributions are combined in.
//!
//! # Example
//!
//! ```rust
//! use lumia_core::ResponseCurve;
//! use lumia_registry::{TargetDefinition, TargetRegistry};
//!
//! let mut registry = TargetRegistry::new();
//! registry.register(
//!     TargetDefinition::new("bloom.intensity")
//!         .with_range(0.0, 2.0)
//!         .with_default(1.0)
//!         .with_curve(ResponseCurve::Exponential)
//!         .with_module("bloom")
//!         .with_unit("x"),
//! )?;
//!
//! assert!(registry.has("bloom.intensity"));
//! assert_eq!(registry.get_base_value("bloom.intensity"), Some(1.0));
//!
//! // Raw units round-trip through control space.
//! let n = registry.to_normalized("bloom.intensity", 0.5);
//! let raw = registry.from_normalized("bloom.intensity", n);
//! assert!((raw - 0.5).abs() < 1e-4);
//! # Ok::<(), lumia_registry::RegistryError>(())
//! ```
//!
//! Definitions and base values typically arrive from a preset subsystem as
//! JSON-shaped records; [`TargetDefinition`] derives serde with the matching
//! camelCase field names, so the registry is agnostic to where they came
//! from or how they are persisted.

mod error;
mod registry;
mod target;

pub use error::RegistryError;
pub use registry::TargetRegistry;
pub use target::TargetDefinition;
