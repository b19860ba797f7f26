//! The modulation matrix and its per-tick resolution loop.

use std::collections::HashMap;

use lumia_core::{FrameSmoother, quantize};
use lumia_registry::TargetRegistry;

use crate::assignment::{AssignmentSpec, ModAssignment};

/// Ordered collection of modulation assignments plus their smoothing state.
///
/// The matrix is mutated between ticks (add/update/remove assignments) and
/// resolved once per tick. Resolution is stateful: each assignment owns one
/// persistent smoothing scalar, seeded from the assignment's first shaped
/// sample and carried from tick to tick, so smoothing continuity survives
/// assignment edits and is lost only when the assignment is removed.
///
/// The matrix holds no reference to the registry; the caller passes it to
/// [`resolve`](Self::resolve), which is the only point where target
/// references are validated. See the crate docs for an end-to-end example.
pub struct ModulationMatrix {
    assignments: Vec<ModAssignment>,
    smoothing: HashMap<String, FrameSmoother>,
    next_auto_id: u64,
}

impl Default for ModulationMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl ModulationMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self {
            assignments: Vec::new(),
            smoothing: HashMap::new(),
            next_auto_id: 0,
        }
    }

    /// Normalizes and stores an assignment.
    ///
    /// A blank or missing id gets a fresh auto-generated one. A new id
    /// appends to the ordering; an existing id is replaced in place without
    /// changing position (and without touching its smoothing state).
    /// Returns the normalized assignment as stored.
    pub fn add_assignment(&mut self, spec: AssignmentSpec) -> &ModAssignment {
        let id = match spec.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.generate_id(),
        };
        let normalized = ModAssignment::from_spec(id, spec);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "matrix_add: {} ({} -> {})",
            normalized.id,
            normalized.source_id,
            normalized.target_id
        );

        let index = match self.assignments.iter().position(|a| a.id == normalized.id) {
            Some(existing) => {
                self.assignments[existing] = normalized;
                existing
            }
            None => {
                self.assignments.push(normalized);
                self.assignments.len() - 1
            }
        };
        &self.assignments[index]
    }

    /// Merges a patch over an existing assignment and re-normalizes it.
    ///
    /// The id is preserved regardless of what the patch carries. Returns the
    /// updated assignment, or `None` if the id is unknown.
    pub fn update_assignment(&mut self, id: &str, patch: AssignmentSpec) -> Option<&ModAssignment> {
        let index = self.assignments.iter().position(|a| a.id == id)?;
        self.assignments[index].merge(patch);

        #[cfg(feature = "tracing")]
        tracing::debug!("matrix_update: {id}");

        Some(&self.assignments[index])
    }

    /// Removes an assignment and its smoothing state.
    ///
    /// Returns whether anything was removed. A later assignment re-added
    /// under the same id starts smoothing from a fresh seed.
    pub fn remove_assignment(&mut self, id: &str) -> bool {
        let Some(index) = self.assignments.iter().position(|a| a.id == id) else {
            return false;
        };
        self.assignments.remove(index);
        self.smoothing.remove(id);

        #[cfg(feature = "tracing")]
        tracing::debug!("matrix_remove: {id}");

        true
    }

    /// Replaces the whole collection: clears everything, then adds each spec
    /// in order.
    pub fn set_assignments(&mut self, specs: impl IntoIterator<Item = AssignmentSpec>) {
        self.clear();
        for spec in specs {
            self.add_assignment(spec);
        }
    }

    /// Removes all assignments and all smoothing state.
    pub fn clear(&mut self) {
        self.assignments.clear();
        self.smoothing.clear();
    }

    /// Current assignments in insertion order.
    pub fn list_assignments(&self) -> &[ModAssignment] {
        &self.assignments
    }

    /// Assignments routed to the given target, in insertion order.
    pub fn assignments_for_target(&self, target_id: &str) -> Vec<&ModAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.target_id == target_id)
            .collect()
    }

    /// Number of stored assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True if no assignments are stored.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Computes the resolved value of every registered target for one tick.
    ///
    /// `signal_samples` maps source ids to this tick's raw samples;
    /// `dt_seconds` is the elapsed time since the previous tick. For each
    /// enabled assignment with a registered target and a finite sample, the
    /// sample is shaped into signal space, quantized, smoothed against the
    /// assignment's persistent state, scaled by the amount, and summed into
    /// the target's aggregate. Each target's base value then travels into
    /// normalized control space, takes the aggregate on top, and comes back
    /// clamped into its declared range.
    ///
    /// Never fails: assignments that cannot contribute this tick are
    /// skipped, and every registered target appears in the result (with its
    /// clamped base value if nothing modulates it).
    pub fn resolve(
        &mut self,
        registry: &TargetRegistry,
        signal_samples: &HashMap<String, f32>,
        dt_seconds: f32,
    ) -> HashMap<String, f32> {
        let mut aggregates: HashMap<&str, f32> = registry
            .get_all()
            .iter()
            .map(|t| (t.id.as_str(), 0.0))
            .collect();

        for assignment in &self.assignments {
            if !assignment.enabled {
                continue;
            }
            let Some(aggregate) = aggregates.get_mut(assignment.target_id.as_str()) else {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    "resolve skip {}: target {} not registered",
                    assignment.id,
                    assignment.target_id
                );
                continue;
            };
            let Some(&raw) = signal_samples.get(&assignment.source_id) else {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    "resolve skip {}: no sample for source {}",
                    assignment.id,
                    assignment.source_id
                );
                continue;
            };
            if !raw.is_finite() {
                continue;
            }

            let mut shaped = assignment.polarity.shape(raw);
            if assignment.quantize_steps > 1 {
                shaped = quantize(shaped, assignment.quantize_steps, assignment.polarity);
            }

            // Seeded with the first shaped value, so a new assignment tracks
            // immediately instead of ramping in from zero.
            let smoother = self
                .smoothing
                .entry(assignment.id.clone())
                .or_insert_with(|| FrameSmoother::new(shaped));
            let smoothed = smoother.advance(shaped, assignment.smoothing, dt_seconds);

            *aggregate += smoothed * assignment.amount;
        }

        let mut resolved = HashMap::with_capacity(registry.len());
        for target in registry.get_all() {
            let aggregate = aggregates.get(target.id.as_str()).copied().unwrap_or(0.0);
            let base = registry
                .get_base_value(&target.id)
                .unwrap_or(target.default_value);
            let normalized = registry.to_normalized(&target.id, base);
            let sum = normalized + aggregate;
            // Extreme amounts can push the sum out of float range; hold the
            // base rather than letting NaN reach the render pipeline.
            let combined = if sum.is_finite() {
                sum.clamp(0.0, 1.0)
            } else {
                normalized
            };
            let raw = registry.from_normalized(&target.id, combined);
            resolved.insert(target.id.clone(), registry.clamp_value(&target.id, raw));
        }
        resolved
    }

    fn generate_id(&mut self) -> String {
        loop {
            self.next_auto_id += 1;
            let id = format!("mod-{}", self.next_auto_id);
            if !self.assignments.iter().any(|a| a.id == id) {
                return id;
            }
        }
    }
}
