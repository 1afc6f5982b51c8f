// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./switchyard.toml` > `~/.config/switchyard/switchyard.toml`
//! > `/etc/switchyard/switchyard.toml`, with environment variable overrides
//! via the `SWITCHYARD_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SwitchyardConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/switchyard/switchyard.toml";

/// Local configuration file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "switchyard.toml";

/// Path of the per-user configuration file, if a config dir is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("switchyard/switchyard.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/switchyard/switchyard.toml` (system-wide)
/// 3. `~/.config/switchyard/switchyard.toml` (user XDG config)
/// 4. `./switchyard.toml` (local directory)
/// 5. `SWITCHYARD_*` environment variables
pub fn load_config() -> Result<SwitchyardConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
pub fn load_config_from_str(toml_content: &str) -> Result<SwitchyardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SwitchyardConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SwitchyardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SwitchyardConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for XDG config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SwitchyardConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment provider mapping `SWITCHYARD_SECTION_KEY` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `SWITCHYARD_RUNTIME_LOG_LEVEL` must become `runtime.log_level`.
fn env_provider() -> Env {
    Env::prefixed("SWITCHYARD_").map(|key| {
        let key_str = key.as_str();
        let mapped = if let Some(rest) = key_str.strip_prefix("evaluators_weights_") {
            format!("evaluators.weights.{rest}")
        } else {
            key_str
                .replacen("runtime_", "runtime.", 1)
                .replacen("registry_", "registry.", 1)
                .replacen("evaluators_", "evaluators.", 1)
        };
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SWITCHYARD_RUNTIME_LOG_LEVEL", "debug");
            jail.set_env("SWITCHYARD_EVALUATORS_WEIGHTS_INTERFACES", "0.9");
            jail.create_file(
                "custom.toml",
                r#"
[runtime]
name = "from-file"
"#,
            )?;

            let config = load_config_from_path(Path::new("custom.toml"))?;
            assert_eq!(config.runtime.name, "from-file");
            assert_eq!(config.runtime.log_level, "debug");
            assert_eq!(config.evaluators.weights.interfaces, 0.9);
            Ok(())
        });
    }

    #[test]
    fn local_file_is_picked_up() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                LOCAL_CONFIG_FILE,
                r#"
[evaluators]
chain = ["weighted"]
"#,
            )?;
            let config = load_config()?;
            assert_eq!(
                config.evaluators.chain,
                vec![crate::model::EvaluatorKind::Weighted]
            );
            Ok(())
        });
    }
}
