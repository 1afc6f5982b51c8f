// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in compatibility evaluators.
//!
//! The evaluator set is open; these are the scorers that can be named in
//! `evaluators.chain`. Any other [`CompatibilityEvaluator`] can be added to a
//! manager directly.

use std::collections::HashSet;

use semver::{Version, VersionReq};
use switchyard_config::{EvaluatorKind, EvaluatorsConfig, WeightsConfig};
use switchyard_core::{CompatibilityEvaluator, ComponentDescriptor, Criteria, SwitchyardError};

/// Score for an exact version match.
const EXACT_VERSION: f64 = 1.0;
/// Score for a version satisfying the requested requirement.
const COMPATIBLE_VERSION: f64 = 0.8;
/// Score for a different version with the same major number.
const SAME_MAJOR: f64 = 0.4;

/// Build the evaluator chain named in configuration, in order.
pub fn build_chain(config: &EvaluatorsConfig) -> Vec<Box<dyn CompatibilityEvaluator>> {
    config
        .chain
        .iter()
        .map(|kind| -> Box<dyn CompatibilityEvaluator> {
            match kind {
                EvaluatorKind::Type => Box::new(TypeMatchEvaluator),
                EvaluatorKind::Version => Box::new(VersionEvaluator),
                EvaluatorKind::Weighted => {
                    Box::new(WeightedEvaluator::from_weights(&config.weights))
                }
            }
        })
        .collect()
}

/// Compare a candidate version against a requested version or requirement.
///
/// `wanted` may be a concrete version (`1.2.0`) or a requirement
/// (`^1.2`, `>=1.0, <2`). A bare version is read as a caret requirement.
pub fn version_score(candidate: &str, wanted: &str) -> Result<f64, String> {
    let have = Version::parse(candidate.trim())
        .map_err(|e| format!("candidate version `{candidate}` is not semver: {e}"))?;

    if let Ok(exact) = Version::parse(wanted.trim()) {
        if have == exact {
            return Ok(EXACT_VERSION);
        }
        let req = VersionReq::parse(wanted.trim())
            .map_err(|e| format!("requested version `{wanted}` is not valid: {e}"))?;
        if req.matches(&have) {
            return Ok(COMPATIBLE_VERSION);
        }
        return Ok(if have.major == exact.major { SAME_MAJOR } else { 0.0 });
    }

    let req = VersionReq::parse(wanted.trim())
        .map_err(|e| format!("requested version `{wanted}` is not valid: {e}"))?;
    Ok(if req.matches(&have) { COMPATIBLE_VERSION } else { 0.0 })
}

/// Scores 1.0 when the candidate's `type` equals the requested type, else 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeMatchEvaluator;

impl CompatibilityEvaluator for TypeMatchEvaluator {
    fn name(&self) -> &str {
        "type"
    }

    fn evaluate(
        &self,
        candidate: &ComponentDescriptor,
        criteria: &Criteria,
    ) -> Result<f64, SwitchyardError> {
        let wanted = criteria
            .component_type()
            .ok_or_else(|| SwitchyardError::evaluation(self.name(), "criteria has no type"))?;
        let actual = candidate
            .component_type()
            .ok_or_else(|| SwitchyardError::evaluation(self.name(), "candidate has no type"))?;
        Ok(if wanted == actual { 1.0 } else { 0.0 })
    }
}

/// Scores semantic version compatibility; see [`version_score`].
///
/// Fails when either side has no version or it does not parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionEvaluator;

impl CompatibilityEvaluator for VersionEvaluator {
    fn name(&self) -> &str {
        "version"
    }

    fn evaluate(
        &self,
        candidate: &ComponentDescriptor,
        criteria: &Criteria,
    ) -> Result<f64, SwitchyardError> {
        let wanted = criteria
            .version()
            .ok_or_else(|| SwitchyardError::evaluation(self.name(), "criteria has no version"))?;
        let actual = candidate
            .version()
            .ok_or_else(|| SwitchyardError::evaluation(self.name(), "candidate has no version"))?;
        version_score(actual, wanted)
            .map_err(|message| SwitchyardError::evaluation(self.name(), message))
    }
}

/// Weighted mean of type equality, version compatibility, and interface coverage.
///
/// Missing or unparsable fields count as 0.0 for their term. Interface
/// coverage is the fraction of requested interfaces the candidate provides,
/// or 1.0 when none are requested.
#[derive(Debug, Clone, Copy)]
pub struct WeightedEvaluator {
    type_weight: f64,
    version_weight: f64,
    interfaces_weight: f64,
}

impl WeightedEvaluator {
    pub fn new(type_weight: f64, version_weight: f64, interfaces_weight: f64) -> Self {
        Self {
            type_weight,
            version_weight,
            interfaces_weight,
        }
    }

    pub fn from_weights(weights: &WeightsConfig) -> Self {
        Self::new(weights.type_weight, weights.version, weights.interfaces)
    }

    fn interface_coverage(candidate: &ComponentDescriptor, criteria: &Criteria) -> f64 {
        let wanted: HashSet<&str> = criteria.interfaces().into_iter().collect();
        if wanted.is_empty() {
            return 1.0;
        }
        let provided: HashSet<&str> = candidate.interfaces().into_iter().collect();
        wanted.intersection(&provided).count() as f64 / wanted.len() as f64
    }
}

impl Default for WeightedEvaluator {
    fn default() -> Self {
        Self::from_weights(&WeightsConfig::default())
    }
}

impl CompatibilityEvaluator for WeightedEvaluator {
    fn name(&self) -> &str {
        "weighted"
    }

    fn evaluate(
        &self,
        candidate: &ComponentDescriptor,
        criteria: &Criteria,
    ) -> Result<f64, SwitchyardError> {
        let weights = [self.type_weight, self.version_weight, self.interfaces_weight];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(SwitchyardError::evaluation(
                self.name(),
                "weights must be non-negative",
            ));
        }
        let total: f64 = weights.iter().sum();
        if !total.is_finite() {
            return Err(SwitchyardError::evaluation(self.name(), "weights overflow"));
        }
        if total <= 0.0 {
            return Err(SwitchyardError::evaluation(self.name(), "weights are all zero"));
        }

        let type_term = match (candidate.component_type(), criteria.component_type()) {
            (Some(have), Some(want)) if have == want => 1.0,
            _ => 0.0,
        };
        let version_term = match (candidate.version(), criteria.version()) {
            (Some(have), Some(want)) => version_score(have, want).unwrap_or(0.0),
            _ => 0.0,
        };
        let interface_term = Self::interface_coverage(candidate, criteria);

        Ok((self.type_weight * type_term
            + self.version_weight * version_term
            + self.interfaces_weight * interface_term)
            / total)
    }
}
