// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compatibility evaluator trait.

use crate::error::SwitchyardError;
use crate::types::{ComponentDescriptor, Criteria};

/// Scores how well a candidate component satisfies a set of criteria.
///
/// The set of evaluators is open: any scorer implementing this trait can be
/// appended to an integration manager's chain. Evaluators only see shared
/// references and may be called any number of times.
///
/// A returned score is only accepted when it lies in `[0, 1]`. Values
/// outside that interval, and any `Err`, make the evaluator abstain for
/// that candidate.
pub trait CompatibilityEvaluator: Send + Sync {
    /// Name used in log lines.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Score `candidate` against `criteria`.
    fn evaluate(
        &self,
        candidate: &ComponentDescriptor,
        criteria: &Criteria,
    ) -> Result<f64, SwitchyardError>;
}

impl<F> CompatibilityEvaluator for F
where
    F: Fn(&ComponentDescriptor, &Criteria) -> Result<f64, SwitchyardError> + Send + Sync,
{
    fn evaluate(
        &self,
        candidate: &ComponentDescriptor,
        criteria: &Criteria,
    ) -> Result<f64, SwitchyardError> {
        self(candidate, criteria)
    }
}
