//! Modulation assignment records.

use lumia_core::Polarity;
use serde::{Deserialize, Serialize};

/// A normalized modulation routing rule: one source signal feeding one
/// target parameter.
///
/// Assignments are created from an [`AssignmentSpec`] by
/// [`ModulationMatrix::add_assignment`](crate::ModulationMatrix::add_assignment),
/// which applies the normalization defaults; the stored record is always
/// well-formed. `amount` is a gain applied after shaping and is
/// deliberately unrestricted in sign and magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModAssignment {
    /// Unique key for this assignment.
    pub id: String,
    /// Id of the source signal sampled each tick.
    pub source_id: String,
    /// Id of the target parameter; validated lazily at resolution time.
    pub target_id: String,
    /// Gain applied to the smoothed signal before aggregation.
    pub amount: f32,
    /// How raw source samples are interpreted.
    pub polarity: Polarity,
    /// Smoothing strength in \[0,1\]; 0 tracks instantly.
    pub smoothing: f32,
    /// Number of discrete signal levels; 0 or 1 disables quantization.
    pub quantize_steps: u32,
    /// Disabled assignments are skipped entirely during resolution.
    pub enabled: bool,
}

impl ModAssignment {
    pub(crate) fn from_spec(id: String, spec: AssignmentSpec) -> Self {
        let mut assignment = Self {
            id,
            source_id: spec.source_id.unwrap_or_default(),
            target_id: spec.target_id.unwrap_or_default(),
            amount: spec.amount.unwrap_or(0.0),
            polarity: spec.polarity.unwrap_or_default(),
            smoothing: spec.smoothing.unwrap_or(0.0),
            quantize_steps: floor_steps(spec.quantize_steps.unwrap_or(0.0)),
            enabled: spec.enabled.unwrap_or(true),
        };
        assignment.sanitize();
        assignment
    }

    /// Merges a patch over this assignment, keeping the id and any field the
    /// patch leaves unset.
    pub(crate) fn merge(&mut self, patch: AssignmentSpec) {
        if let Some(source_id) = patch.source_id {
            self.source_id = source_id;
        }
        if let Some(target_id) = patch.target_id {
            self.target_id = target_id;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(polarity) = patch.polarity {
            self.polarity = polarity;
        }
        if let Some(smoothing) = patch.smoothing {
            self.smoothing = smoothing;
        }
        if let Some(steps) = patch.quantize_steps {
            self.quantize_steps = floor_steps(steps);
        }
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        self.sanitize();
    }

    fn sanitize(&mut self) {
        if !self.amount.is_finite() {
            self.amount = 0.0;
        }
        self.smoothing = if self.smoothing.is_finite() {
            self.smoothing.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
}

fn floor_steps(raw: f32) -> u32 {
    if raw.is_finite() && raw > 0.0 {
        raw.floor() as u32
    } else {
        0
    }
}

/// Draft of a modulation assignment, as preset subsystems produce it.
///
/// Every field is optional. Passed to
/// [`add_assignment`](crate::ModulationMatrix::add_assignment), unset fields
/// take their normalization defaults (`amount` 0, `polarity` bipolar,
/// `smoothing` 0, `quantize_steps` 0, `enabled` true, fresh auto-generated
/// id). Passed to
/// [`update_assignment`](crate::ModulationMatrix::update_assignment), unset
/// fields keep the existing assignment's values.
///
/// Deserializes from partial camelCase JSON objects; malformed records fail
/// at the serde boundary, before they ever reach the matrix.
///
/// # Example
///
/// ```rust
/// use lumia_matrix::{AssignmentSpec, Polarity};
///
/// let spec = AssignmentSpec::route("audio.bass", "bloom.intensity")
///     .with_amount(0.8)
///     .with_polarity(Polarity::Unipolar)
///     .with_smoothing(0.3);
/// assert_eq!(spec.source_id.as_deref(), Some("audio.bass"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentSpec {
    /// Assignment id; unset means auto-generate.
    pub id: Option<String>,
    /// Source signal id.
    pub source_id: Option<String>,
    /// Target parameter id.
    pub target_id: Option<String>,
    /// Post-shaping gain.
    pub amount: Option<f32>,
    /// Signal-space interpretation.
    pub polarity: Option<Polarity>,
    /// Smoothing strength in \[0,1\].
    pub smoothing: Option<f32>,
    /// Discrete level count; fractional values are floored.
    pub quantize_steps: Option<f32>,
    /// Whether the assignment participates in resolution.
    pub enabled: Option<bool>,
}

impl AssignmentSpec {
    /// Creates a spec routing `source_id` to `target_id`.
    pub fn route(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            source_id: Some(source_id.into()),
            target_id: Some(target_id.into()),
            ..Self::default()
        }
    }

    /// Sets an explicit assignment id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the post-shaping gain.
    pub fn with_amount(mut self, amount: f32) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the signal-space interpretation.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }

    /// Sets the smoothing strength.
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    /// Sets the discrete level count.
    pub fn with_quantize_steps(mut self, steps: u32) -> Self {
        self.quantize_steps = Some(steps as f32);
        self
    }

    /// Sets the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}
