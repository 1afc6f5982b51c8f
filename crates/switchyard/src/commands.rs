// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.
//!
//! Every command except `catalog` first loads the configured
//! `[[components]]` through a [`DynamicLoader`]. Failures there are logged
//! by the loader and do not abort the command.

use std::path::{Path, PathBuf};

use serde_json::Value;
use switchyard_config::SwitchyardConfig;
use switchyard_core::types::KEY_INTERFACES;
use switchyard_core::{ComponentConfig, ComponentDescriptor, Criteria, SwitchyardError};
use switchyard_loader::DynamicLoader;
use switchyard_registry::{load_component_manifest, search_catalog};

/// Build a loader from `config` and load its configured components.
pub fn preload(config: &SwitchyardConfig) -> DynamicLoader {
    let mut loader = DynamicLoader::from_config(config);
    let failed = loader
        .load_all(&config.components)
        .iter()
        .filter(|r| r.is_err())
        .count();
    if failed > 0 {
        tracing::warn!(
            failed,
            total = config.components.len(),
            "some configured components failed to load"
        );
    }
    loader
}

/// Run `switchyard list`.
pub fn run_list(config: &SwitchyardConfig, use_color: bool) -> Result<(), SwitchyardError> {
    let loader = preload(config);

    print_header("switchyard components");
    let components = loader.registry().list_all();
    if components.is_empty() {
        println!("    (none registered)");
    }
    for (name, descriptor) in &components {
        let integrated = loader.manager().is_integrated(name);
        println!("{}", component_line(name, descriptor, integrated, use_color));
    }
    println!();
    Ok(())
}

/// Run `switchyard catalog`.
pub fn run_catalog(query: &str, use_color: bool) -> Result<(), SwitchyardError> {
    let entries = search_catalog(query);

    print_header("switchyard catalog");
    if entries.is_empty() {
        println!("    no catalog entries match `{query}`");
    }
    for entry in &entries {
        println!("{}", catalog_line(entry, use_color));
    }
    println!();
    Ok(())
}

/// Run `switchyard match`.
pub fn run_match(
    config: &SwitchyardConfig,
    component_type: &str,
    version: &str,
    interfaces: &[String],
    use_color: bool,
) -> Result<(), SwitchyardError> {
    let loader = preload(config);
    let criteria = build_criteria(component_type, version, interfaces);
    let manager = loader.manager();

    let Some(name) = manager.find_best_component(&criteria) else {
        println!("no match");
        return Ok(());
    };
    let descriptor = manager.get_component(&name).ok_or_else(|| {
        SwitchyardError::Internal(format!("selected component `{name}` is not registered"))
    })?;
    let score = manager.score_component(descriptor, &criteria);

    if use_color {
        use colored::Colorize;
        println!("{} (score {})", name.green().bold(), score);
    } else {
        println!("{name} (score {score})");
    }
    Ok(())
}

/// Run `switchyard load`.
///
/// Each manifest is loaded independently. Fails if any manifest did.
pub fn run_load(
    config: &SwitchyardConfig,
    manifests: &[PathBuf],
    use_color: bool,
) -> Result<(), SwitchyardError> {
    let mut loader = preload(config);

    let mut failed = 0;
    for path in manifests {
        match load_manifest(&mut loader, path) {
            Ok(integrated) => {
                println!("{}", load_line(path, Ok(&integrated), use_color));
            }
            Err(e) => {
                failed += 1;
                println!("{}", load_line(path, Err(&error_chain(&e)), use_color));
            }
        }
    }

    if failed > 0 {
        return Err(SwitchyardError::Internal(format!(
            "{failed} of {} manifests failed to load",
            manifests.len()
        )));
    }
    Ok(())
}

fn load_manifest(loader: &mut DynamicLoader, path: &Path) -> Result<String, SwitchyardError> {
    let bundle = load_component_manifest(path)?;
    loader.load_component(&bundle)
}

/// Criteria for a CLI match request. Interfaces are only added when given.
pub fn build_criteria(component_type: &str, version: &str, interfaces: &[String]) -> Criteria {
    let criteria = Criteria::new(component_type, version);
    if interfaces.is_empty() {
        return criteria;
    }
    let list = interfaces.iter().cloned().map(Value::String).collect::<Vec<_>>();
    criteria.with(KEY_INTERFACES, Value::Array(list))
}

/// Render an error and its sources as `outer: inner: ...`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

fn print_header(title: &str) {
    println!();
    println!("  {title}");
    println!("  {}", "-".repeat(50));
}

fn component_line(
    name: &str,
    descriptor: &ComponentDescriptor,
    integrated: bool,
    use_color: bool,
) -> String {
    let kind = descriptor.component_type().unwrap_or("?");
    let version = descriptor.version().unwrap_or("?");
    let interfaces = descriptor.interfaces().join(", ");

    if use_color {
        use colored::Colorize;
        let marker = if integrated {
            "✓".green().to_string()
        } else {
            "·".dimmed().to_string()
        };
        format!("    {marker} {name:<20} {kind:<12} {version:<10} [{interfaces}]")
    } else {
        let marker = if integrated { "[INT]" } else { "[REG]" };
        format!("    {marker} {name:<20} {kind:<12} {version:<10} [{interfaces}]")
    }
}

fn catalog_line(entry: &ComponentConfig, use_color: bool) -> String {
    let summary = entry
        .description
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let line = format!(
        "    {:<20} {:<12} {:<10} {summary}",
        entry.name, entry.component_type, entry.version
    );
    if use_color {
        use colored::Colorize;
        line.cyan().to_string()
    } else {
        line
    }
}

fn load_line(path: &Path, outcome: Result<&str, &str>, use_color: bool) -> String {
    let path = path.display();
    match (outcome, use_color) {
        (Ok(name), true) => {
            use colored::Colorize;
            format!("    {} {path} -> {name}", "✓".green())
        }
        (Ok(name), false) => format!("    [OK]   {path} -> {name}"),
        (Err(message), true) => {
            use colored::Colorize;
            format!("    {} {path}: {}", "✗".red(), message.red())
        }
        (Err(message), false) => format!("    [FAIL] {path}: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchyard_config::load_and_validate_str;
    use switchyard_test_utils::descriptor;

    const CONFIG: &str = r#"
[[components]]
name = "ocr"
type = "vision"
version = "1.0.0"
description = { type = "vision", version = "1.0.0", interfaces = ["ocr"] }

[[components]]
name = "broken"
type = "vision"
version = "1.0.0"
description = { type = "vision" }
"#;

    #[test]
    fn preload_keeps_valid_components_only() {
        let config = load_and_validate_str(CONFIG).unwrap();
        let loader = preload(&config);

        let names: Vec<&str> = loader.registry().names().collect();
        assert_eq!(names, vec!["ocr"]);
        assert!(loader.manager().is_integrated("ocr"));
    }

    #[test]
    fn criteria_only_carry_interfaces_when_requested() {
        let plain = build_criteria("vision", "1.0.0", &[]);
        assert!(plain.get(KEY_INTERFACES).is_none());

        let with = build_criteria("vision", "1.0.0", &["ocr".to_string()]);
        assert_eq!(with.interfaces(), vec!["ocr"]);
    }

    #[test]
    fn error_chain_includes_sources() {
        let err = SwitchyardError::ComponentLoading {
            name: "ocr".to_string(),
            source: Some(Box::new(SwitchyardError::Integration {
                name: "ocr".to_string(),
            })),
        };
        assert_eq!(
            error_chain(&err),
            "failed to load and integrate component `ocr`: \
             cannot integrate unknown component `ocr`"
        );
    }

    #[test]
    fn plain_component_line_marks_integration() {
        let desc = ComponentDescriptor::builder("vision", "1.0.0")
            .interface("ocr")
            .interface("layout")
            .build();
        let line = component_line("ocr", &desc, true, false);
        assert!(line.starts_with("    [INT] ocr"));
        assert!(line.ends_with("[ocr, layout]"));

        let line = component_line("ocr", &descriptor("vision", "1.0.0"), false, false);
        assert!(line.contains("[REG]"));
    }

    #[test]
    fn plain_load_lines() {
        let path = Path::new("ocr.toml");
        assert_eq!(load_line(path, Ok("ocr"), false), "    [OK]   ocr.toml -> ocr");
        assert_eq!(
            load_line(path, Err("bad manifest"), false),
            "    [FAIL] ocr.toml: bad manifest"
        );
    }

    #[test]
    fn run_load_fails_when_any_manifest_fails() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.toml");
        std::fs::write(
            &good,
            "[component]\nname = \"asr\"\ntype = \"audio\"\nversion = \"0.9.2\"\n\n\
             [component.description]\ntype = \"audio\"\nversion = \"0.9.2\"\ninterfaces = []\n",
        )
        .unwrap();
        let missing = dir.path().join("missing.toml");

        let config = SwitchyardConfig::default();
        assert!(run_load(&config, std::slice::from_ref(&good), false).is_ok());

        let err = run_load(&config, &[good, missing], false).unwrap_err();
        assert_eq!(err.to_string(), "internal error: 1 of 2 manifests failed to load");
    }
}
