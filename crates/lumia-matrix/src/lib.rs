//! Lumia Matrix - modulation routing and per-tick resolution.
//!
//! The [`ModulationMatrix`] owns an ordered collection of modulation
//! assignments (source signal → target parameter, with shaping options) and
//! computes, once per animation tick, the final value of every registered
//! target: each enabled assignment's live sample is shaped into signal
//! space, optionally quantized, low-pass smoothed against the assignment's
//! persistent state, scaled by its amount, and summed into its target's
//! aggregate; the aggregate is then combined with the target's base value in
//! normalized control space and mapped back into raw units.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use lumia_matrix::{AssignmentSpec, ModulationMatrix, TargetDefinition, TargetRegistry};
//!
//! let mut registry = TargetRegistry::new();
//! registry.register(
//!     TargetDefinition::new("brightness")
//!         .with_range(0.0, 2.0)
//!         .with_default(1.0),
//! )?;
//!
//! let mut matrix = ModulationMatrix::new();
//! matrix.add_assignment(AssignmentSpec::route("lfo", "brightness").with_amount(0.5));
//!
//! // One tick: the caller supplies live samples and the elapsed time.
//! let samples = HashMap::from([("lfo".to_string(), 1.0)]);
//! let resolved = matrix.resolve(&registry, &samples, 1.0 / 60.0);
//! assert_eq!(resolved["brightness"], 2.0);
//! # Ok::<(), lumia_matrix::RegistryError>(())
//! ```
//!
//! # Failure policy
//!
//! `resolve` never raises. Assignments that are disabled, reference an
//! unregistered target, or have no finite sample this tick simply contribute
//! nothing — modulation routing can reference sources and targets that come
//! and go across preset loads without halting rendering. Configuration
//! errors (malformed preset records) surface earlier, at the serde boundary
//! or at registration.

mod assignment;
mod matrix;

pub use assignment::{AssignmentSpec, ModAssignment};
pub use matrix::ModulationMatrix;

// Re-export the collaborating types so a frame loop can depend on this
// crate alone.
pub use lumia_core::{FrameSmoother, Polarity, ResponseCurve};
pub use lumia_registry::{RegistryError, TargetDefinition, TargetRegistry};
