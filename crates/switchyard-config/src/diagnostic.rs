// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Converts Figment deserialization errors into miette diagnostics with
//! source spans, valid key listings, and "did you mean?" suggestions based
//! on Jaro-Winkler similarity.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity for a key to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(switchyard::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// Valid keys for the section, comma separated.
        valid_keys: String,
        /// Source span for the offending key.
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        /// The source file content for context display.
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: found {found}")]
    #[diagnostic(code(switchyard::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        found: String,
        expected: String,
    },

    /// A configuration value is not one of the accepted variants.
    #[error("invalid value for key `{key}`: {detail}")]
    #[diagnostic(code(switchyard::config::invalid_value))]
    InvalidValue { key: String, detail: String },

    /// A `[[components]]` entry lacks one of its mandatory keys.
    ///
    /// Every other section is fully defaulted, so bundles are the only
    /// place this can occur.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(switchyard::config::missing_key),
        help("each [[components]] entry needs `name`, `type` and `version`")
    )]
    MissingKey { key: String },

    /// A semantic validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(switchyard::config::validation))]
    Validation { message: String },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(switchyard::config::other))]
    Other(String),
}

fn format_unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Convert a `figment::Error` (which may hold several errors) into diagnostics.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    let mut errors = Vec::new();

    for error in err {
        let key = error.path.join(".");

        let config_error = match &error.kind {
            Kind::UnknownField(field, expected) => {
                let suggestion = suggest_key(field, expected);
                let (span, src) = find_source_span(&error, field, toml_sources);

                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion,
                    valid_keys: expected.join(", "),
                    span,
                    src,
                }
            }
            Kind::MissingField(field) if key.is_empty() => ConfigError::MissingKey {
                key: field.to_string(),
            },
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: format!("{key}.{field}"),
            },
            Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                key,
                found: actual.to_string(),
                expected: expected.clone(),
            },
            Kind::UnknownVariant(variant, expected) => ConfigError::InvalidValue {
                key,
                detail: format!("`{variant}` is not one of: {}", expected.join(", ")),
            },
            _ => ConfigError::Other(error.to_string()),
        };

        errors.push(config_error);
    }

    errors
}

fn find_source_span(
    error: &figment::error::Error,
    field: &str,
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let source_path = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| match s {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });

    let source = source_path.as_ref().and_then(|path| {
        toml_sources
            .iter()
            .find(|(p, _)| p == path)
            .map(|(p, content)| (p.as_str(), content.as_str()))
    });

    let Some((path, content)) = source else {
        return (None, None);
    };
    match find_key_offset(content, &section_header(&error.path), field) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), field.len())),
            Some(NamedSource::new(path, content.to_string())),
        ),
        None => (None, None),
    }
}

/// Table name for a figment path, skipping array indices:
/// `["components", "0"]` becomes `components`.
fn section_header(path: &[String]) -> String {
    path.iter()
        .filter(|segment| segment.parse::<usize>().is_err())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(".")
}

/// Byte offset of `field` in TOML `content`, searching after the table
/// header for `section` (`[section]` or `[[section]]`), or from the start
/// when `section` is empty.
pub fn find_key_offset(content: &str, section: &str, field: &str) -> Option<usize> {
    let start = if section.is_empty() {
        0
    } else {
        let header = format!("[{section}]");
        content.find(&header)? + header.len()
    };

    let mut offset = start;
    for line in content[start..].split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let matches = line[indent..]
            .strip_prefix(field)
            .is_some_and(|after| after.starts_with([' ', '=', '\t']));
        if matches {
            return Some(offset + indent);
        }
        offset += line.len();
    }

    None
}

/// Suggest the closest valid key above the similarity threshold.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    let mut best_score = SUGGESTION_THRESHOLD;
    let mut best_match = None;

    for &key in valid_keys {
        let score = strsim::jaro_winkler(unknown, key);
        if score > best_score {
            best_score = score;
            best_match = Some(key.to_string());
        }
    }

    best_match
}

/// Render config errors to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}
