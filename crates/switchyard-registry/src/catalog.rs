// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in component catalog.
//!
//! Hardcoded sample component bundles used by the CLI and in tests.

use switchyard_core::{ComponentConfig, ComponentDescriptor};

fn bundle(name: &str, descriptor: ComponentDescriptor) -> ComponentConfig {
    ComponentConfig {
        name: name.to_string(),
        component_type: descriptor.component_type().unwrap_or_default().to_string(),
        version: descriptor.version().unwrap_or_default().to_string(),
        description: descriptor,
    }
}

/// Returns the bundles for all built-in components:
/// - image-processor (processing)
/// - text-tokenizer (nlp)
/// - speech-transcriber (audio)
pub fn builtin_catalog() -> Vec<ComponentConfig> {
    vec![
        bundle(
            "image-processor",
            ComponentDescriptor::builder("processing", "1.0.0")
                .interface("image")
                .interface("batch")
                .field("description", "Image processing pipeline")
                .build(),
        ),
        bundle(
            "text-tokenizer",
            ComponentDescriptor::builder("nlp", "2.1.0")
                .interface("tokenize")
                .interface("detokenize")
                .field("description", "Subword text tokenizer")
                .build(),
        ),
        bundle(
            "speech-transcriber",
            ComponentDescriptor::builder("audio", "0.9.2")
                .interface("transcribe")
                .interface("stream")
                .field("description", "Streaming speech-to-text")
                .build(),
        ),
    ]
}

/// Search the built-in catalog by name or type (case-insensitive substring).
///
/// If query is empty, returns all entries.
pub fn search_catalog(query: &str) -> Vec<ComponentConfig> {
    if query.is_empty() {
        return builtin_catalog();
    }
    let query_lower = query.to_lowercase();
    builtin_catalog()
        .into_iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query_lower)
                || c.component_type.to_lowercase().contains(&query_lower)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ComponentRegistry;

    #[test]
    fn builtin_catalog_returns_three_entries() {
        assert_eq!(builtin_catalog().len(), 3);
    }

    #[test]
    fn builtin_entries_pass_registry_validation() {
        let mut registry = ComponentRegistry::new();
        for entry in builtin_catalog() {
            assert!(registry.register(entry.name.clone(), entry.description.clone()));
            assert_eq!(entry.description.component_type(), Some(entry.component_type.as_str()));
        }
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn search_catalog_by_name() {
        let results = search_catalog("tokenizer");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "text-tokenizer");
    }

    #[test]
    fn search_catalog_by_type_case_insensitive() {
        let results = search_catalog("AUDIO");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "speech-transcriber");
    }

    #[test]
    fn search_catalog_empty_returns_all() {
        assert_eq!(search_catalog("").len(), 3);
    }

    #[test]
    fn search_catalog_no_match() {
        assert!(search_catalog("xyz_nonexistent").is_empty());
    }
}
