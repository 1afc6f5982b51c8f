// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptor, criteria, and score types shared across the workspace.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Value of the `status` field once a component has been integrated.
pub const STATUS_INTEGRATED: &str = "integrated";

/// Key holding the component type.
pub const KEY_TYPE: &str = "type";
/// Key holding the component version.
pub const KEY_VERSION: &str = "version";
/// Key holding the list of supported interfaces.
pub const KEY_INTERFACES: &str = "interfaces";
/// Key holding the integration status.
pub const KEY_STATUS: &str = "status";

/// Self-description of a component: type, version, interfaces, and any
/// other metadata the component wants to publish.
///
/// The descriptor is an open key/value map. Shape checks (required keys)
/// belong to the registry, so a descriptor can hold anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentDescriptor(Map<String, Value>);

impl ComponentDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Start a descriptor with the given type and version.
    pub fn builder(
        component_type: impl Into<String>,
        version: impl Into<String>,
    ) -> DescriptorBuilder {
        DescriptorBuilder::new(component_type, version)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn component_type(&self) -> Option<&str> {
        self.get(KEY_TYPE).and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.get(KEY_VERSION).and_then(Value::as_str)
    }

    /// Interfaces the component supports. Non-string entries are ignored.
    pub fn interfaces(&self) -> Vec<&str> {
        string_list(self.get(KEY_INTERFACES))
    }

    pub fn status(&self) -> Option<&str> {
        self.get(KEY_STATUS).and_then(Value::as_str)
    }

    pub fn is_integrated(&self) -> bool {
        self.status() == Some(STATUS_INTEGRATED)
    }

    /// Set `status` to `"integrated"`. Returns false if it already was.
    pub fn mark_integrated(&mut self) -> bool {
        if self.is_integrated() {
            return false;
        }
        self.insert(KEY_STATUS, STATUS_INTEGRATED);
        true
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Builder for descriptors with the conventional fields.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    map: Map<String, Value>,
    interfaces: Vec<Value>,
}

impl DescriptorBuilder {
    fn new(component_type: impl Into<String>, version: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert(KEY_TYPE.to_string(), Value::String(component_type.into()));
        map.insert(KEY_VERSION.to_string(), Value::String(version.into()));
        Self {
            map,
            interfaces: Vec::new(),
        }
    }

    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.push(Value::String(name.into()));
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    pub fn build(mut self) -> ComponentDescriptor {
        self.map
            .insert(KEY_INTERFACES.to_string(), Value::Array(self.interfaces));
        ComponentDescriptor(self.map)
    }
}

/// Requirements a caller wants matched against registered descriptors.
///
/// Same shape as a descriptor subset: `type`, `version`, and optional extra
/// constraints such as `interfaces`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria(Map<String, Value>);

impl Criteria {
    pub fn new(component_type: impl Into<String>, version: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert(KEY_TYPE.to_string(), Value::String(component_type.into()));
        map.insert(KEY_VERSION.to_string(), Value::String(version.into()));
        Self(map)
    }

    /// Empty criteria with no constraints at all.
    pub fn empty() -> Self {
        Self(Map::new())
    }

    /// Add or replace a constraint.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn component_type(&self) -> Option<&str> {
        self.get(KEY_TYPE).and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.get(KEY_VERSION).and_then(Value::as_str)
    }

    pub fn interfaces(&self) -> Vec<&str> {
        string_list(self.get(KEY_INTERFACES))
    }
}

fn string_list(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// A loadable component bundle: the name to register under, the type and
/// version to match on, and the descriptor itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentConfig {
    /// Name the component is registered under.
    pub name: String,
    /// Component type used to build matching criteria.
    #[serde(rename = "type")]
    pub component_type: String,
    /// Version (or version requirement) used to build matching criteria.
    pub version: String,
    /// Descriptor handed to the registry.
    #[serde(default)]
    pub description: ComponentDescriptor,
}

impl ComponentConfig {
    /// Criteria built from the bundle's type and version.
    pub fn criteria(&self) -> Criteria {
        Criteria::new(self.component_type.clone(), self.version.clone())
    }
}

/// A compatibility score in the closed interval `[0, 1]`.
///
/// Out-of-range values (and NaN) are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct EvaluationScore(f64);

impl EvaluationScore {
    /// Lowest valid score, also used when no evaluator produces one.
    pub const MIN: Self = Self(0.0);
    /// Highest valid score.
    pub const MAX: Self = Self(1.0);

    /// Accept `raw` only if it lies within `[0, 1]`.
    pub fn new(raw: f64) -> Option<Self> {
        (0.0..=1.0).contains(&raw).then_some(Self(raw))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for EvaluationScore {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for EvaluationScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_sets_conventional_fields() {
        let desc = ComponentDescriptor::builder("processing", "1.0.0")
            .interface("image")
            .interface("batch")
            .field("vendor", "acme")
            .build();

        assert_eq!(desc.component_type(), Some("processing"));
        assert_eq!(desc.version(), Some("1.0.0"));
        assert_eq!(desc.interfaces(), vec!["image", "batch"]);
        assert_eq!(desc.get("vendor"), Some(&json!("acme")));
        assert_eq!(desc.status(), None);
    }

    #[test]
    fn mark_integrated_is_idempotent() {
        let mut desc = ComponentDescriptor::builder("processing", "1.0.0").build();
        assert!(!desc.is_integrated());

        assert!(desc.mark_integrated());
        assert!(desc.is_integrated());
        assert!(!desc.mark_integrated());
        assert_eq!(desc.status(), Some(STATUS_INTEGRATED));
    }

    #[test]
    fn descriptor_keeps_insertion_order() {
        let mut desc = ComponentDescriptor::new();
        desc.insert("zeta", 1);
        desc.insert("alpha", 2);
        desc.insert("mid", 3);
        let keys: Vec<&str> = desc.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);

        let json = serde_json::to_string(&desc).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2,"mid":3}"#);
    }

    #[test]
    fn interfaces_ignore_non_strings() {
        let mut desc = ComponentDescriptor::new();
        desc.insert(KEY_INTERFACES, json!(["image", 3, null, "audio"]));
        assert_eq!(desc.interfaces(), vec!["image", "audio"]);

        desc.insert(KEY_INTERFACES, "image");
        assert!(desc.interfaces().is_empty());
    }

    #[test]
    fn descriptor_deserializes_from_json_object() {
        let desc: ComponentDescriptor = serde_json::from_value(json!({
            "type": "nlp",
            "version": "2.1.0",
            "interfaces": ["tokenize"],
            "max_batch": 32
        }))
        .unwrap();
        assert_eq!(desc.component_type(), Some("nlp"));
        assert_eq!(desc.get("max_batch"), Some(&json!(32)));
    }

    #[test]
    fn criteria_with_extra_constraints() {
        let criteria = Criteria::new("nlp", "^2")
            .with(KEY_INTERFACES, json!(["tokenize", "embed"]));
        assert_eq!(criteria.component_type(), Some("nlp"));
        assert_eq!(criteria.version(), Some("^2"));
        assert_eq!(criteria.interfaces(), vec!["tokenize", "embed"]);
        assert!(Criteria::empty().component_type().is_none());
    }

    #[test]
    fn component_config_builds_criteria_from_type_and_version() {
        let bundle: ComponentConfig = serde_json::from_value(json!({
            "name": "tokenizer",
            "type": "nlp",
            "version": "2.1.0",
            "description": { "type": "nlp", "version": "2.1.0", "interfaces": [] }
        }))
        .unwrap();
        assert_eq!(bundle.criteria(), Criteria::new("nlp", "2.1.0"));
        assert_eq!(bundle.description.version(), Some("2.1.0"));
    }

    #[test]
    fn component_config_rejects_unknown_fields() {
        let result = serde_json::from_value::<ComponentConfig>(json!({
            "name": "tokenizer",
            "type": "nlp",
            "version": "2.1.0",
            "descripton": {}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn score_accepts_closed_interval() {
        assert_eq!(EvaluationScore::new(0.0), Some(EvaluationScore::MIN));
        assert_eq!(EvaluationScore::new(1.0), Some(EvaluationScore::MAX));
        assert_eq!(EvaluationScore::new(0.7).map(EvaluationScore::value), Some(0.7));
    }

    #[test]
    fn score_rejects_out_of_range_without_clamping() {
        assert!(EvaluationScore::new(1.5).is_none());
        assert!(EvaluationScore::new(-0.01).is_none());
        assert!(EvaluationScore::new(f64::NAN).is_none());
        assert!(EvaluationScore::new(f64::INFINITY).is_none());
    }

    #[test]
    fn score_display_uses_three_decimals() {
        let score = EvaluationScore::new(0.25).unwrap();
        assert_eq!(score.to_string(), "0.250");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn score_is_some_iff_in_unit_interval(raw in -10.0f64..10.0) {
                let score = EvaluationScore::new(raw);
                prop_assert_eq!(score.is_some(), (0.0..=1.0).contains(&raw));
                if let Some(score) = score {
                    prop_assert_eq!(score.value(), raw);
                }
            }
        }
    }
}
