// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration manager: best-match selection and integration bookkeeping.
//!
//! Selection order: registration order of components, insertion order of
//! evaluators. Ties go to the component registered first.

use switchyard_config::EvaluatorsConfig;
use switchyard_core::{
    CompatibilityEvaluator, ComponentDescriptor, ComponentTable, Criteria, EvaluationScore,
    SwitchyardError,
};
use tracing::{error, info, warn};

use crate::evaluators::build_chain;

/// Holds the scoring pool and the evaluator chain.
///
/// Components registered here are not validated; shape checks belong to the
/// discovery registry in front of the manager.
#[derive(Default)]
pub struct IntegrationManager {
    components: ComponentTable,
    evaluators: Vec<Box<dyn CompatibilityEvaluator>>,
}

impl IntegrationManager {
    /// Create a manager with no components and an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager whose chain is built from configuration.
    pub fn from_config(config: &EvaluatorsConfig) -> Self {
        let mut manager = Self::new();
        for evaluator in build_chain(config) {
            manager.add_evaluator(evaluator);
        }
        manager
    }

    /// Add or replace a component in the scoring pool.
    pub fn register_component(
        &mut self,
        name: impl Into<String>,
        descriptor: ComponentDescriptor,
    ) {
        let name = name.into();
        info!(component = name.as_str(), "registering component");
        self.components.upsert(name, descriptor);
    }

    /// Append an evaluator to the end of the chain.
    pub fn add_evaluator(&mut self, evaluator: Box<dyn CompatibilityEvaluator>) {
        info!(
            evaluator = evaluator.name(),
            position = self.evaluators.len(),
            "added evaluator"
        );
        self.evaluators.push(evaluator);
    }

    /// Name of the registered component that best satisfies `criteria`.
    ///
    /// Returns `None` only when no component is registered. A later
    /// component must score strictly higher to displace the current winner.
    pub fn find_best_component(&self, criteria: &Criteria) -> Option<String> {
        let mut best: Option<(&str, EvaluationScore)> = None;

        for (name, descriptor) in self.components.iter() {
            let score = self.score_component(descriptor, criteria);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((name, score));
            }
        }

        match best {
            Some((name, score)) => {
                info!(component = name, score = score.value(), "best component found");
                Some(name.to_string())
            }
            None => {
                info!("no components registered; no match");
                None
            }
        }
    }

    /// Resolve one component's score through the evaluator chain.
    ///
    /// The first evaluator returning a value in `[0, 1]` decides; failing
    /// evaluators and out-of-range values are skipped. With no usable
    /// score the result is [`EvaluationScore::MIN`].
    pub fn score_component(
        &self,
        descriptor: &ComponentDescriptor,
        criteria: &Criteria,
    ) -> EvaluationScore {
        for evaluator in &self.evaluators {
            match evaluator.evaluate(descriptor, criteria) {
                Ok(raw) => match EvaluationScore::new(raw) {
                    Some(score) => return score,
                    None => warn!(
                        evaluator = evaluator.name(),
                        score = raw,
                        "evaluator returned a score outside [0, 1]; skipping"
                    ),
                },
                Err(e) => warn!(
                    evaluator = evaluator.name(),
                    error = %e,
                    "compatibility evaluation failed; skipping"
                ),
            }
        }
        EvaluationScore::MIN
    }

    /// Mark a registered component as integrated.
    ///
    /// Unknown names fail with [`SwitchyardError::Integration`] and change
    /// nothing. Integrating twice is a successful no-op.
    pub fn integrate_component(&mut self, name: &str) -> Result<(), SwitchyardError> {
        let Some(descriptor) = self.components.get_mut(name) else {
            error!(component = name, "integration failed: component not registered");
            return Err(SwitchyardError::Integration {
                name: name.to_string(),
            });
        };

        if descriptor.mark_integrated() {
            info!(component = name, "component integrated");
        } else {
            info!(component = name, "component already integrated");
        }
        Ok(())
    }

    pub fn get_component(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.get(name)
    }

    /// Registered components, in registration order.
    pub fn components(&self) -> impl Iterator<Item = (&str, &ComponentDescriptor)> {
        self.components.iter()
    }

    pub fn is_integrated(&self, name: &str) -> bool {
        self.components
            .get(name)
            .is_some_and(ComponentDescriptor::is_integrated)
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn evaluator_count(&self) -> usize {
        self.evaluators.len()
    }

    /// Evaluator names, in chain order.
    pub fn evaluator_names(&self) -> Vec<&str> {
        self.evaluators.iter().map(|e| e.name()).collect()
    }
}

impl std::fmt::Debug for IntegrationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntegrationManager")
            .field("components", &self.components)
            .field("evaluators", &self.evaluator_names())
            .finish()
    }
}
