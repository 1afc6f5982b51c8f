// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for pluggable compatibility scoring.

pub mod evaluator;

pub use evaluator::CompatibilityEvaluator;
