// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Switchyard.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use switchyard_core::ComponentConfig;

/// Top-level Switchyard configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchyardConfig {
    /// Process identity and logging.
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Discovery registry settings.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Evaluator chain used by the integration manager.
    #[serde(default)]
    pub evaluators: EvaluatorsConfig,

    /// Component bundles loaded at startup.
    #[serde(default)]
    pub components: Vec<ComponentConfig>,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Display name used in log output.
    #[serde(default = "default_runtime_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            name: default_runtime_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_runtime_name() -> String {
    "switchyard".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Discovery registry configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Descriptor fields required on top of `type`, `version`, and `interfaces`.
    #[serde(default)]
    pub required_fields: Vec<String>,
}

/// Built-in evaluator kinds that can be named in `evaluators.chain`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EvaluatorKind {
    /// Exact component type match.
    Type,
    /// Semantic version compatibility.
    Version,
    /// Weighted blend of type, version, and interface coverage.
    Weighted,
}

/// Evaluator chain configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluatorsConfig {
    /// Evaluators in the order they are consulted.
    #[serde(default = "default_chain")]
    pub chain: Vec<EvaluatorKind>,

    /// Field weights for the `weighted` evaluator.
    #[serde(default)]
    pub weights: WeightsConfig,
}

impl Default for EvaluatorsConfig {
    fn default() -> Self {
        Self {
            chain: default_chain(),
            weights: WeightsConfig::default(),
        }
    }
}

fn default_chain() -> Vec<EvaluatorKind> {
    vec![EvaluatorKind::Weighted, EvaluatorKind::Type]
}

/// Field weights for the weighted evaluator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WeightsConfig {
    /// Weight of the component type match.
    #[serde(rename = "type", default = "default_type_weight")]
    pub type_weight: f64,

    /// Weight of the version compatibility score.
    #[serde(default = "default_version_weight")]
    pub version: f64,

    /// Weight of the interface coverage fraction.
    #[serde(default = "default_interfaces_weight")]
    pub interfaces: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            type_weight: default_type_weight(),
            version: default_version_weight(),
            interfaces: default_interfaces_weight(),
        }
    }
}

fn default_type_weight() -> f64 {
    0.5
}

fn default_version_weight() -> f64 {
    0.3
}

fn default_interfaces_weight() -> f64 {
    0.2
}
