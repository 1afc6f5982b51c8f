// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Evaluators with scripted behavior for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use switchyard_core::{CompatibilityEvaluator, ComponentDescriptor, Criteria, SwitchyardError};

/// Descriptor field read by [`FieldScoreEvaluator`].
pub const SCORE_FIELD: &str = "score";

/// Shared invocation counter that stays readable after the evaluator is boxed.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Evaluator that returns the same result for every candidate.
pub struct ScriptedEvaluator {
    name: String,
    result: Result<f64, String>,
    calls: CallCounter,
}

impl ScriptedEvaluator {
    /// Always scores `value` (which may be out of range on purpose).
    pub fn returning(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            result: Ok(value),
            calls: CallCounter::default(),
        }
    }

    /// Always fails with an evaluation error.
    pub fn failing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            result: Err(format!("{name} cannot score this candidate")),
            calls: CallCounter::default(),
        }
    }

    /// Handle to the invocation counter.
    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl CompatibilityEvaluator for ScriptedEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(
        &self,
        _candidate: &ComponentDescriptor,
        _criteria: &Criteria,
    ) -> Result<f64, SwitchyardError> {
        self.calls.bump();
        self.result
            .clone()
            .map_err(|message| SwitchyardError::evaluation(&self.name, message))
    }
}

/// Evaluator that reads the candidate's own numeric `score` field.
///
/// Fails when the field is absent or not a number.
#[derive(Debug, Default)]
pub struct FieldScoreEvaluator;

impl CompatibilityEvaluator for FieldScoreEvaluator {
    fn name(&self) -> &str {
        "field-score"
    }

    fn evaluate(
        &self,
        candidate: &ComponentDescriptor,
        _criteria: &Criteria,
    ) -> Result<f64, SwitchyardError> {
        candidate
            .get(SCORE_FIELD)
            .and_then(|v| v.as_f64())
            .ok_or_else(|| SwitchyardError::evaluation(self.name(), "candidate has no score field"))
    }
}
