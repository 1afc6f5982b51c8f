// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Component selection and integration for Switchyard.
//!
//! This crate provides:
//! - [`IntegrationManager`]: scores every registered component against
//!   criteria through an ordered evaluator chain, picks the best match, and
//!   marks components integrated
//! - Built-in evaluators: [`TypeMatchEvaluator`], [`VersionEvaluator`],
//!   [`WeightedEvaluator`], and [`build_chain`] to assemble them from config
//!
//! The chain resolves a component's score from the first evaluator that
//! returns a usable value; scores are never blended across evaluators.

pub mod evaluators;
pub mod manager;

pub use evaluators::{
    build_chain, version_score, TypeMatchEvaluator, VersionEvaluator, WeightedEvaluator,
};
pub use manager::IntegrationManager;
