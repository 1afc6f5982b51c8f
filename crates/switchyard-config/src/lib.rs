// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for Switchyard.
//!
//! Provides TOML configuration parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, environment variable overrides, and diagnostic
//! error rendering with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use switchyard_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("evaluator chain: {:?}", config.evaluators.chain);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{
    EvaluatorKind, EvaluatorsConfig, RegistryConfig, RuntimeConfig, SwitchyardConfig,
    WeightsConfig,
};

/// Load configuration from the XDG hierarchy and validate it.
///
/// On a Figment error the failure is converted into diagnostics with typo
/// suggestions; on success the post-deserialization validation runs.
pub fn load_and_validate() -> Result<SwitchyardConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => validated(config),
        Err(err) => {
            let toml_sources = collect_toml_sources();
            Err(diagnostic::figment_to_config_errors(err, &toml_sources))
        }
    }
}

/// Load configuration from an explicit file path and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<SwitchyardConfig, Vec<ConfigError>> {
    match loader::load_config_from_path(path) {
        Ok(config) => validated(config),
        Err(err) => {
            let sources = std::fs::read_to_string(path)
                .map(|content| vec![(path.display().to_string(), content)])
                .unwrap_or_default();
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<SwitchyardConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => validated(config),
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Run post-deserialization validation on a freshly extracted config.
fn validated(config: SwitchyardConfig) -> Result<SwitchyardConfig, Vec<ConfigError>> {
    validation::validate_config(&config)?;
    tracing::debug!(
        chain = ?config.evaluators.chain,
        components = config.components.len(),
        "configuration validated"
    );
    Ok(config)
}

/// Collect TOML source file contents for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut sources = Vec::new();

    if let Ok(content) = std::fs::read_to_string(loader::LOCAL_CONFIG_FILE) {
        let path = std::env::current_dir()
            .map(|d| d.join(loader::LOCAL_CONFIG_FILE).display().to_string())
            .unwrap_or_else(|_| loader::LOCAL_CONFIG_FILE.to_string());
        sources.push((path, content));
    }

    if let Some(path) = loader::user_config_path() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            sources.push((path.display().to_string(), content));
        }
    }

    let system_path = Path::new(loader::SYSTEM_CONFIG_PATH);
    if let Ok(content) = std::fs::read_to_string(system_path) {
        sources.push((system_path.display().to_string(), content));
    }

    sources
}
