// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Component manifest parsing from `component.toml` files.
//!
//! A manifest describes one loadable component bundle: the name it is
//! registered under, the type and version callers match on, and the
//! descriptor published to the registry.

use std::path::Path;

use serde::Deserialize;
use switchyard_core::{ComponentConfig, SwitchyardError};

/// Intermediate TOML deserialization struct for `component.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentManifestFile {
    component: ComponentConfig,
}

/// Parse a component manifest from TOML content.
///
/// The `name`, `type`, and `version` keys of the `[component]` table must be
/// non-empty. The descriptor itself is not validated here; that is the
/// registry's job.
pub fn parse_component_manifest(toml_content: &str) -> Result<ComponentConfig, SwitchyardError> {
    let file: ComponentManifestFile = toml::from_str(toml_content)
        .map_err(|e| SwitchyardError::Manifest(format!("invalid component manifest: {e}")))?;

    let bundle = file.component;
    for (key, value) in [
        ("name", &bundle.name),
        ("type", &bundle.component_type),
        ("version", &bundle.version),
    ] {
        if value.trim().is_empty() {
            return Err(SwitchyardError::Manifest(format!(
                "component manifest: {key} must not be empty"
            )));
        }
    }

    Ok(bundle)
}

/// Read and parse a manifest file.
pub fn load_component_manifest(path: &Path) -> Result<ComponentConfig, SwitchyardError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SwitchyardError::Manifest(format!("cannot read {}: {e}", path.display()))
    })?;
    parse_component_manifest(&content)
}
