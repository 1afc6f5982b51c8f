// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Component discovery registry, manifest parser, and built-in catalog.
//!
//! The registry is the validating front door: descriptors must carry a
//! `type`, a `version`, and a list of `interfaces` before they are stored.
//! Component bundles can be described in `component.toml` manifests or taken
//! from the compiled-in catalog.

pub mod catalog;
pub mod manifest;
pub mod registry;

pub use catalog::{builtin_catalog, search_catalog};
pub use manifest::{load_component_manifest, parse_component_manifest};
pub use registry::{ComponentRegistry, REQUIRED_FIELDS};
