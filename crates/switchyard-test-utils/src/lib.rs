// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Switchyard integration tests.
//!
//! Provides scripted evaluators and descriptor helpers for fast,
//! deterministic tests of the scoring chain and selection algorithm.
//!
//! # Components
//!
//! - [`ScriptedEvaluator`] - returns a fixed result and counts invocations
//! - [`FieldScoreEvaluator`] - scores a candidate from one of its own fields
//! - [`descriptor`] / [`bundle`] - minimal valid descriptors and load bundles

pub mod evaluators;

pub use evaluators::{CallCounter, FieldScoreEvaluator, ScriptedEvaluator};

use serde_json::json;
use switchyard_core::{ComponentConfig, ComponentDescriptor};

/// A descriptor that passes registry validation, with no interfaces.
pub fn descriptor(component_type: &str, version: &str) -> ComponentDescriptor {
    ComponentDescriptor::builder(component_type, version).build()
}

/// A valid descriptor carrying a numeric `score` field for [`FieldScoreEvaluator`].
pub fn scored_descriptor(score: f64) -> ComponentDescriptor {
    let mut desc = descriptor("test", "1.0.0");
    desc.insert(evaluators::SCORE_FIELD, json!(score));
    desc
}

/// A load bundle whose criteria match its own descriptor.
pub fn bundle(name: &str, component_type: &str, version: &str) -> ComponentConfig {
    ComponentConfig {
        name: name.to_string(),
        component_type: component_type.to_string(),
        version: version.to_string(),
        description: descriptor(component_type, version),
    }
}
