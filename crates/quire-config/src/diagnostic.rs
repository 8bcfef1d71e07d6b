// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation issues with rich diagnostics and fuzzy match suggestions.
//!
//! Every failed validation yields an ordered list of [`ValidationIssue`]s.
//! Unknown keys carry "did you mean?" suggestions using Jaro-Winkler string
//! similarity, and Figment load errors are bridged into the same type.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::Diagnostic;
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A single reason a candidate configuration failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationIssue {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(quire::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// Comma-separated list of valid keys.
        valid_keys: String,
    },

    /// A configuration value has the wrong type or shape.
    #[error("invalid value for key `{key}`: {detail}")]
    #[diagnostic(code(quire::config::invalid_type))]
    InvalidType {
        /// The key holding the bad value.
        key: String,
        /// Description of the mismatch.
        detail: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(quire::config::missing_key),
        help("add `{key} = <value>` to your quire.toml")
    )]
    MissingKey {
        /// The missing key name.
        key: String,
    },

    /// A value is well-typed but semantically invalid.
    #[error("{message}")]
    #[diagnostic(code(quire::config::invalid))]
    Invalid {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("{0}")]
    #[diagnostic(code(quire::config::other))]
    Other(String),
}

/// Format the help message for unknown key errors.
fn format_unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Join issue messages one per line.
pub fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert a `figment::Error` into a list of issues.
///
/// Figment may carry several errors; each becomes one issue.
pub fn figment_to_issues(err: figment::Error) -> Vec<ValidationIssue> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| {
            let key = error
                .path
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(".");
            match &error.kind {
                Kind::InvalidType(actual, expected) if !key.is_empty() => {
                    ValidationIssue::InvalidType {
                        key,
                        detail: format!("found {actual}, expected {expected}"),
                    }
                }
                Kind::MissingField(field) => ValidationIssue::MissingKey {
                    key: field.clone().into_owned(),
                },
                _ => ValidationIssue::Other(format!("{error}")),
            }
        })
        .collect()
}

/// Suggest a similar key name using Jaro-Winkler string similarity.
///
/// Returns the best match above the similarity threshold, or `None` if
/// no valid key is close enough to the unknown key.
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

/// Render a list of issues to stderr using miette's graphical handler.
pub fn render_issues(issues: &[ValidationIssue]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for issue in issues {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = issue;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {issue}");
        }
    }
}
