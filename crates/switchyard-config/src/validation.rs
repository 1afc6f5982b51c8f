// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as log level names, evaluator weights, and component name uniqueness.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::{EvaluatorKind, SwitchyardConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every validation error instead of stopping at the first.
pub fn validate_config(config: &SwitchyardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.runtime.log_level.trim().to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "runtime.log_level `{}` is not one of: {}",
                config.runtime.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    for (i, field) in config.registry.required_fields.iter().enumerate() {
        if field.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("registry.required_fields[{i}] must not be empty"),
            });
        }
    }

    let weights = &config.evaluators.weights;
    let mut weights_ok = true;
    for (key, value) in [
        ("type", weights.type_weight),
        ("version", weights.version),
        ("interfaces", weights.interfaces),
    ] {
        if !value.is_finite() || value < 0.0 {
            weights_ok = false;
            errors.push(ConfigError::Validation {
                message: format!(
                    "evaluators.weights.{key} must be a non-negative number, got {value}"
                ),
            });
        }
    }

    let total = weights.type_weight + weights.version + weights.interfaces;
    if weights_ok && !total.is_finite() {
        errors.push(ConfigError::Validation {
            message: format!("evaluators.weights must sum to a finite number, got {total}"),
        });
    }

    if weights_ok && config.evaluators.chain.contains(&EvaluatorKind::Weighted) && total <= 0.0 {
        errors.push(ConfigError::Validation {
            message: "evaluators.weights must not all be zero when `weighted` is in the chain"
                .to_string(),
        });
    }

    let mut seen_names = HashSet::new();
    for (i, component) in config.components.iter().enumerate() {
        if component.name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("components[{i}].name must not be empty"),
            });
        } else if !seen_names.insert(component.name.as_str()) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "duplicate component name `{}` in [[components]] array",
                    component.name
                ),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
