//! The target registry.

use std::collections::HashMap;

use lumia_core::ResponseCurve;

use crate::error::RegistryError;
use crate::target::TargetDefinition;

/// Registry of modulatable parameters and their base values.
///
/// Definitions are kept in first-registration order, which is the order
/// every enumeration ([`get_all`](Self::get_all),
/// [`get_by_module`](Self::get_by_module)) and the matrix's resolved output
/// follow. Base values live in a separate keyed store so that re-registering
/// a definition (a preset reload, say) never loses what the user has dialed
/// in.
pub struct TargetRegistry {
    targets: Vec<TargetDefinition>,
    base_values: HashMap<String, f32>,
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            base_values: HashMap::new(),
        }
    }

    /// Normalizes and stores a target definition.
    ///
    /// Fails if the id is missing or blank. Re-registering an existing id
    /// overwrites the definition in place — first-registration order and any
    /// previously set base value are preserved. Returns the normalized
    /// definition as stored.
    pub fn register(
        &mut self,
        definition: TargetDefinition,
    ) -> Result<&TargetDefinition, RegistryError> {
        let mut def = definition;
        if def.id.trim().is_empty() {
            return Err(RegistryError::MissingId);
        }
        if def.label.is_empty() {
            def.label = def.id.clone();
        }
        if !def.min.is_finite() {
            def.min = 0.0;
        }
        if !def.max.is_finite() {
            def.max = 1.0;
        }
        let (lo, hi) = def.ordered_range();
        def.default_value = if def.default_value.is_finite() {
            def.default_value.clamp(lo, hi)
        } else {
            lo
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("registry_register: {}", def.id);

        let index = match self.targets.iter().position(|t| t.id == def.id) {
            Some(existing) => {
                self.targets[existing] = def;
                existing
            }
            None => {
                self.targets.push(def);
                self.targets.len() - 1
            }
        };
        Ok(&self.targets[index])
    }

    /// Registers each definition in order, stopping at the first error.
    pub fn register_many(
        &mut self,
        definitions: impl IntoIterator<Item = TargetDefinition>,
    ) -> Result<(), RegistryError> {
        for definition in definitions {
            self.register(definition)?;
        }
        Ok(())
    }

    /// Returns true if a target with this id is registered.
    pub fn has(&self, id: &str) -> bool {
        self.targets.iter().any(|t| t.id == id)
    }

    /// Looks up a target definition by id.
    pub fn get(&self, id: &str) -> Option<&TargetDefinition> {
        self.targets.iter().find(|t| t.id == id)
    }

    /// All definitions in first-registration order.
    pub fn get_all(&self) -> &[TargetDefinition] {
        &self.targets
    }

    /// Definitions owned by the given module, in registration order.
    pub fn get_by_module(&self, module_id: &str) -> Vec<&TargetDefinition> {
        self.targets
            .iter()
            .filter(|t| t.module_id == module_id)
            .collect()
    }

    /// Sets a target's base (unmodulated) value, clamped into its range.
    ///
    /// Returns the stored value, or `None` if the target is unknown or the
    /// value is non-finite (in which case nothing is stored).
    pub fn set_base_value(&mut self, id: &str, value: f32) -> Option<f32> {
        if !value.is_finite() {
            return None;
        }
        let def = self.targets.iter().find(|t| t.id == id)?;
        let clamped = def.clamp(value);
        self.base_values.insert(def.id.clone(), clamped);
        Some(clamped)
    }

    /// Applies [`set_base_value`](Self::set_base_value) for each entry.
    ///
    /// Unknown ids and non-finite values are skipped.
    pub fn set_base_values(&mut self, values: &HashMap<String, f32>) {
        for (id, value) in values {
            self.set_base_value(id, *value);
        }
    }

    /// A target's current base value.
    ///
    /// Falls back to the target's default if no base value was ever set;
    /// `None` if the target is unknown.
    pub fn get_base_value(&self, id: &str) -> Option<f32> {
        if let Some(value) = self.base_values.get(id) {
            return Some(*value);
        }
        self.get(id).map(|def| def.default_value)
    }

    /// Restores every target's base value to its default.
    pub fn reset_base_values(&mut self) {
        self.base_values.clear();
    }

    /// Clamps a raw value into the target's declared range.
    ///
    /// Unknown targets return the input unchanged — caller-provided values
    /// are not discarded silently.
    pub fn clamp_value(&self, id: &str, value: f32) -> f32 {
        match self.get(id) {
            Some(def) => def.clamp(value),
            None => value,
        }
    }

    /// Maps a raw value into \[0,1\] control space via the target's curve.
    ///
    /// Unknown targets are treated as already normalized and clamped.
    pub fn to_normalized(&self, id: &str, value: f32) -> f32 {
        match self.get(id) {
            Some(def) => def.curve.to_normalized(value, def.min, def.max),
            None => ResponseCurve::Linear.to_normalized(value, 0.0, 1.0),
        }
    }

    /// Maps a \[0,1\] control-space value back into raw units.
    ///
    /// Unknown targets pass through, clamped to \[0,1\].
    pub fn from_normalized(&self, id: &str, normalized: f32) -> f32 {
        match self.get(id) {
            Some(def) => def.curve.from_normalized(normalized, def.min, def.max),
            None => ResponseCurve::Linear.from_normalized(normalized, 0.0, 1.0),
        }
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if no targets are registered.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(ids: &[&str]) -> TargetRegistry {
        let mut registry = TargetRegistry::new();
        for id in ids {
            registry.register(TargetDefinition::new(*id)).unwrap();
        }
        registry
    }

    #[test]
    fn register_rejects_blank_id() {
        let mut registry = TargetRegistry::new();
        assert_eq!(
            registry.register(TargetDefinition::new("")),
            Err(RegistryError::MissingId)
        );
        assert_eq!(
            registry.register(TargetDefinition::new("   ")),
            Err(RegistryError::MissingId)
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn register_normalizes_definition() {
        let mut registry = TargetRegistry::new();
        let def = registry
            .register(
                TargetDefinition::new("warp.amount")
                    .with_range(f32::NAN, 4.0)
                    .with_default(99.0),
            )
            .unwrap();
        assert_eq!(def.label, "warp.amount");
        assert_eq!(def.min, 0.0);
        assert_eq!(def.max, 4.0);
        // Default clamped into the normalized range.
        assert_eq!(def.default_value, 4.0);
    }

    #[test]
    fn unset_default_falls_back_to_low_end() {
        let mut registry = TargetRegistry::new();
        let def = registry
            .register(TargetDefinition::new("t").with_range(2.0, 8.0))
            .unwrap();
        assert_eq!(def.default_value, 2.0);
    }

    #[test]
    fn registration_order_is_stable_across_reregistration() {
        let mut registry = registry_with(&["a", "b", "c"]);
        registry
            .register(TargetDefinition::new("a").with_range(0.0, 10.0))
            .unwrap();
        let ids: Vec<&str> = registry.get_all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(registry.get("a").unwrap().max, 10.0);
    }

    #[test]
    fn reregistration_preserves_explicit_base_value() {
        let mut registry = TargetRegistry::new();
        registry
            .register(TargetDefinition::new("t").with_range(0.0, 10.0).with_default(5.0))
            .unwrap();
        registry.set_base_value("t", 7.0);
        registry
            .register(TargetDefinition::new("t").with_range(0.0, 10.0).with_default(1.0))
            .unwrap();
        assert_eq!(registry.get_base_value("t"), Some(7.0));
    }

    #[test]
    fn base_value_is_clamped_and_unknown_is_noop() {
        let mut registry = TargetRegistry::new();
        registry
            .register(TargetDefinition::new("t").with_range(0.0, 1.0))
            .unwrap();
        assert_eq!(registry.set_base_value("t", 3.0), Some(1.0));
        assert_eq!(registry.set_base_value("missing", 0.5), None);
        assert_eq!(registry.set_base_value("t", f32::NAN), None);
        assert_eq!(registry.get_base_value("t"), Some(1.0));
    }

    #[test]
    fn get_base_value_falls_back_to_default() {
        let mut registry = TargetRegistry::new();
        registry
            .register(TargetDefinition::new("t").with_range(0.0, 2.0).with_default(0.5))
            .unwrap();
        assert_eq!(registry.get_base_value("t"), Some(0.5));
        assert_eq!(registry.get_base_value("missing"), None);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut registry = TargetRegistry::new();
        registry
            .register(TargetDefinition::new("t").with_default(0.25))
            .unwrap();
        registry.set_base_value("t", 0.9);
        registry.reset_base_values();
        assert_eq!(registry.get_base_value("t"), Some(0.25));
    }

    #[test]
    fn set_base_values_applies_each_entry() {
        let mut registry = registry_with(&["a", "b"]);
        let mut values = HashMap::new();
        values.insert("a".to_string(), 0.3);
        values.insert("b".to_string(), 5.0);
        values.insert("missing".to_string(), 0.1);
        registry.set_base_values(&values);
        assert_eq!(registry.get_base_value("a"), Some(0.3));
        assert_eq!(registry.get_base_value("b"), Some(1.0)); // clamped
    }

    #[test]
    fn clamp_value_passes_unknown_through() {
        let registry = registry_with(&["t"]);
        assert_eq!(registry.clamp_value("t", 4.0), 1.0);
        assert_eq!(registry.clamp_value("missing", 4.0), 4.0);
    }

    #[test]
    fn conversions_use_the_declared_curve() {
        let mut registry = TargetRegistry::new();
        registry
            .register(
                TargetDefinition::new("t")
                    .with_range(0.0, 100.0)
                    .with_curve(ResponseCurve::Exponential),
            )
            .unwrap();
        let n = registry.to_normalized("t", 25.0);
        assert!((n - 0.5).abs() < 1e-6);
        let raw = registry.from_normalized("t", 0.5);
        assert!((raw - 25.0).abs() < 1e-4);
    }

    #[test]
    fn conversions_treat_unknown_as_normalized() {
        let registry = TargetRegistry::new();
        assert_eq!(registry.to_normalized("missing", 1.7), 1.0);
        assert_eq!(registry.to_normalized("missing", 0.3), 0.3);
        assert_eq!(registry.from_normalized("missing", -0.4), 0.0);
        assert_eq!(registry.from_normalized("missing", 0.6), 0.6);
    }

    #[test]
    fn get_by_module_filters_in_order() {
        let mut registry = TargetRegistry::new();
        registry
            .register_many([
                TargetDefinition::new("bloom.intensity").with_module("bloom"),
                TargetDefinition::new("warp.speed").with_module("warp"),
                TargetDefinition::new("bloom.radius").with_module("bloom"),
            ])
            .unwrap();
        let ids: Vec<&str> = registry
            .get_by_module("bloom")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["bloom.intensity", "bloom.radius"]);
    }

    #[test]
    fn register_many_stops_at_first_error() {
        let mut registry = TargetRegistry::new();
        let result = registry.register_many([
            TargetDefinition::new("ok"),
            TargetDefinition::new(""),
            TargetDefinition::new("never"),
        ]);
        assert_eq!(result, Err(RegistryError::MissingId));
        assert!(registry.has("ok"));
        assert!(!registry.has("never"));
    }
}
