// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Switchyard component registry.
//!
//! This crate provides the foundational types shared by every other crate
//! in the workspace: the component descriptor and criteria maps, the
//! bounded evaluation score, the ordered component table, the compatibility
//! evaluator trait, and the crate-wide error type.

pub mod error;
pub mod table;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SwitchyardError;
pub use table::ComponentTable;
pub use traits::CompatibilityEvaluator;
pub use types::{
    ComponentConfig, ComponentDescriptor, Criteria, DescriptorBuilder, EvaluationScore,
    STATUS_INTEGRATED,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switchyard_error_has_all_variants() {
        let _validation = SwitchyardError::Validation {
            name: "test".into(),
            reason: "missing required field: version".into(),
        };
        let _evaluation = SwitchyardError::Evaluation {
            evaluator: "type".into(),
            message: "no type".into(),
        };
        let _integration = SwitchyardError::Integration {
            name: "test".into(),
        };
        let _loading = SwitchyardError::ComponentLoading {
            name: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _manifest = SwitchyardError::Manifest("test".into());
        let _internal = SwitchyardError::Internal("test".into());
    }

    #[test]
    fn component_loading_exposes_source() {
        use std::error::Error;

        let err = SwitchyardError::ComponentLoading {
            name: "ocr".into(),
            source: Some(Box::new(SwitchyardError::Integration {
                name: "ocr".into(),
            })),
        };
        assert_eq!(err.to_string(), "failed to load and integrate component `ocr`");
        let source = err.source().expect("source should be kept");
        assert!(source.to_string().contains("ocr"));
    }

    #[test]
    fn evaluator_trait_is_object_safe() {
        fn _assert_boxable(_: Box<dyn CompatibilityEvaluator>) {}
    }
}
