// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Component discovery registry.
//!
//! The `ComponentRegistry` stores validated descriptors keyed by component
//! name, in registration order. Registering an existing name replaces its
//! descriptor but keeps its original position.

use serde_json::Value;
use switchyard_core::types::{KEY_INTERFACES, KEY_TYPE, KEY_VERSION};
use switchyard_core::{ComponentDescriptor, ComponentTable, SwitchyardError};
use tracing::{debug, error, info};

/// Fields every descriptor must carry to be registered.
pub const REQUIRED_FIELDS: [&str; 3] = [KEY_TYPE, KEY_VERSION, KEY_INTERFACES];

/// Registry of discovered components.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: ComponentTable,
    extra_required: Vec<String>,
}

impl ComponentRegistry {
    /// Create a new empty registry enforcing only [`REQUIRED_FIELDS`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `fields` in addition to [`REQUIRED_FIELDS`].
    pub fn with_required_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for field in fields {
            let field = field.into();
            if !REQUIRED_FIELDS.contains(&field.as_str()) && !self.extra_required.contains(&field)
            {
                self.extra_required.push(field);
            }
        }
        self
    }

    /// Register a component.
    ///
    /// Returns `false` and leaves the registry untouched when the descriptor
    /// fails validation; the failure is logged, not raised.
    pub fn register(&mut self, name: impl Into<String>, descriptor: ComponentDescriptor) -> bool {
        let name = name.into();
        if let Err(e) = self.validate(&name, &descriptor) {
            error!(component = name.as_str(), error = %e, "invalid component description");
            return false;
        }

        let replaced = self.components.upsert(name.clone(), descriptor).is_some();
        info!(component = name.as_str(), replaced, "component registered");
        true
    }

    /// Check that `descriptor` has the shape the registry requires.
    ///
    /// `type` and `version` must be strings and `interfaces` a list of
    /// strings; configured extra fields only need to be present.
    pub fn validate(
        &self,
        name: &str,
        descriptor: &ComponentDescriptor,
    ) -> Result<(), SwitchyardError> {
        let invalid = |reason: String| SwitchyardError::Validation {
            name: name.to_string(),
            reason,
        };

        let required = REQUIRED_FIELDS
            .iter()
            .copied()
            .chain(self.extra_required.iter().map(String::as_str));
        for field in required {
            if !descriptor.contains_key(field) {
                return Err(invalid(format!("missing required field: {field}")));
            }
        }

        for field in [KEY_TYPE, KEY_VERSION] {
            if !matches!(descriptor.get(field), Some(Value::String(_))) {
                return Err(invalid(format!("field `{field}` must be a string")));
            }
        }

        match descriptor.get(KEY_INTERFACES) {
            Some(Value::Array(items)) if items.iter().all(Value::is_string) => Ok(()),
            _ => Err(invalid(format!(
                "field `{KEY_INTERFACES}` must be a list of strings"
            ))),
        }
    }

    /// Copy of every registered component, in registration order.
    ///
    /// Mutating the returned descriptors does not affect the registry.
    pub fn list_all(&self) -> Vec<(String, ComponentDescriptor)> {
        debug!(count = self.components.len(), "discovering available components");
        self.components.to_vec()
    }

    /// Get a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.get(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.names()
    }

    /// Returns the number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if no components are registered.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use switchyard_test_utils::descriptor;
    use tracing_test::traced_test;

    #[test]
    fn register_and_get_roundtrip() {
        let mut registry = ComponentRegistry::new();
        assert!(registry.register("ocr", descriptor("vision", "1.0.0")));

        let desc = registry.get("ocr").unwrap();
        assert_eq!(desc.component_type(), Some("vision"));
        assert_eq!(registry.len(), 1);
    }

    #[traced_test]
    #[test]
    fn missing_version_is_rejected_and_not_listed() {
        let mut registry = ComponentRegistry::new();
        let mut desc = ComponentDescriptor::new();
        desc.insert("type", "vision");
        desc.insert("interfaces", json!(["ocr"]));

        assert!(!registry.register("ocr", desc));
        assert!(registry.list_all().is_empty());
        assert!(registry.get("ocr").is_none());
        assert!(logs_contain("missing required field: version"));
    }

    #[test]
    fn wrongly_typed_fields_are_rejected() {
        let mut registry = ComponentRegistry::new();

        let mut desc = descriptor("vision", "1.0.0");
        desc.insert("version", 1);
        assert!(!registry.register("a", desc));

        let mut desc = descriptor("vision", "1.0.0");
        desc.insert("interfaces", "ocr");
        assert!(!registry.register("b", desc));

        let mut desc = descriptor("vision", "1.0.0");
        desc.insert("interfaces", json!(["ocr", 7]));
        assert!(!registry.register("c", desc));

        assert!(registry.is_empty());
    }

    #[test]
    fn reregistration_overwrites_in_place() {
        let mut registry = ComponentRegistry::new();
        registry.register("first", descriptor("vision", "1.0.0"));
        registry.register("second", descriptor("audio", "1.0.0"));
        registry.register("first", descriptor("vision", "2.0.0"));

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(registry.get("first").unwrap().version(), Some("2.0.0"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn failed_reregistration_keeps_previous_descriptor() {
        let mut registry = ComponentRegistry::new();
        registry.register("ocr", descriptor("vision", "1.0.0"));
        assert!(!registry.register("ocr", ComponentDescriptor::new()));
        assert_eq!(registry.get("ocr").unwrap().version(), Some("1.0.0"));
    }

    #[test]
    fn list_all_is_a_defensive_copy() {
        let mut registry = ComponentRegistry::new();
        registry.register("ocr", descriptor("vision", "1.0.0"));

        let mut listed = registry.list_all();
        listed[0].1.insert("version", "9.9.9");
        listed.clear();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("ocr").unwrap().version(), Some("1.0.0"));
    }

    #[test]
    fn extra_required_fields_are_enforced() {
        let mut registry = ComponentRegistry::new().with_required_fields(["vendor", "type"]);
        assert!(!registry.register("ocr", descriptor("vision", "1.0.0")));

        let mut desc = descriptor("vision", "1.0.0");
        desc.insert("vendor", "acme");
        assert!(registry.register("ocr", desc));
    }

    #[test]
    fn validate_reports_component_name() {
        let registry = ComponentRegistry::new();
        let err = registry
            .validate("ocr", &ComponentDescriptor::new())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid component `ocr`: missing required field: type"
        );
    }

    #[traced_test]
    #[test]
    fn successful_registration_is_logged() {
        let mut registry = ComponentRegistry::new();
        registry.register("ocr", descriptor("vision", "1.0.0"));
        assert!(logs_contain("component registered"));
    }
}
