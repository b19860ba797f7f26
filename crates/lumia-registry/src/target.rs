//! Target definition records.

use lumia_core::ResponseCurve;
use serde::{Deserialize, Serialize};

/// Declares one modulatable parameter.
///
/// A definition describes the parameter's raw unit range, its default value,
/// and the response curve governing the mapping into normalized control
/// space. `label`, `module_id`, and `unit` are descriptive only.
///
/// Definitions deserialize from the JSON shape preset subsystems produce
/// (camelCase keys, every field but `id` optional). Registration normalizes
/// whatever arrives: a blank `label` falls back to the id, non-finite range
/// bounds fall back to `[0,1]`, and an unset or non-finite `default_value`
/// falls back to the low end of the ordered range.
///
/// # Example
///
/// ```rust
/// use lumia_core::ResponseCurve;
/// use lumia_registry::TargetDefinition;
///
/// let def = TargetDefinition::new("warp.speed")
///     .with_label("Warp Speed")
///     .with_range(0.1, 8.0)
///     .with_default(1.0)
///     .with_curve(ResponseCurve::Exponential)
///     .with_module("warp")
///     .with_unit("Hz");
///
/// assert_eq!(def.id, "warp.speed");
/// assert_eq!(def.max, 8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDefinition {
    /// Unique key for this target.
    pub id: String,

    /// Human-readable name. Blank falls back to the id at registration.
    #[serde(default)]
    pub label: String,

    /// Id of the module that owns this parameter (e.g. "bloom", "warp").
    #[serde(default)]
    pub module_id: String,

    /// Low end of the valid raw range.
    #[serde(default = "default_min")]
    pub min: f32,

    /// High end of the valid raw range.
    #[serde(default = "default_max")]
    pub max: f32,

    /// Value the parameter takes before anything is set or modulated.
    /// Unset (non-finite) resolves to the low end of the range.
    #[serde(default = "unset_value")]
    pub default_value: f32,

    /// Mapping between raw units and normalized control space.
    #[serde(default)]
    pub curve: ResponseCurve,

    /// Display-only unit suffix (e.g. "Hz", "px", "%").
    #[serde(default)]
    pub unit: String,
}

fn default_min() -> f32 {
    0.0
}

fn default_max() -> f32 {
    1.0
}

fn unset_value() -> f32 {
    f32::NAN
}

impl TargetDefinition {
    /// Creates a definition with the `[0,1]` linear defaults.
    ///
    /// The default value is left unset; registration resolves it to the low
    /// end of the range unless [`with_default`](Self::with_default) is
    /// called.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            module_id: String::new(),
            min: default_min(),
            max: default_max(),
            default_value: unset_value(),
            curve: ResponseCurve::default(),
            unit: String::new(),
        }
    }

    /// Sets the raw value range.
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default_value: f32) -> Self {
        self.default_value = default_value;
        self
    }

    /// Sets the response curve.
    pub fn with_curve(mut self, curve: ResponseCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the owning module id.
    pub fn with_module(mut self, module_id: impl Into<String>) -> Self {
        self.module_id = module_id.into();
        self
    }

    /// Sets the display unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// The range pair ordered so `lo <= hi`.
    #[inline]
    pub(crate) fn ordered_range(&self) -> (f32, f32) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    /// Clamps a raw value into this target's declared range.
    ///
    /// Non-finite values pass through unchanged.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if !value.is_finite() {
            return value;
        }
        let (lo, hi) = self.ordered_range();
        value.clamp(lo, hi)
    }
}
