// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Switchyard component registry.

use thiserror::Error;

/// The primary error type used across registry, integration, and loader operations.
#[derive(Debug, Error)]
pub enum SwitchyardError {
    /// A component descriptor does not have the required shape.
    #[error("invalid component `{name}`: {reason}")]
    Validation { name: String, reason: String },

    /// A compatibility evaluator could not score a candidate.
    #[error("evaluator `{evaluator}` failed: {message}")]
    Evaluation { evaluator: String, message: String },

    /// The named component is not known to the integration manager.
    #[error("cannot integrate unknown component `{name}`")]
    Integration { name: String },

    /// Loading a component bundle failed at some step of the sequence.
    #[error("failed to load and integrate component `{name}`")]
    ComponentLoading {
        name: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A component manifest could not be parsed.
    #[error("component manifest error: {0}")]
    Manifest(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SwitchyardError {
    /// Shorthand for an [`SwitchyardError::Evaluation`] raised by `evaluator`.
    pub fn evaluation(evaluator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Evaluation {
            evaluator: evaluator.into(),
            message: message.into(),
        }
    }
}
