// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors that abort a plugin run.
//!
//! Every variant is fatal: there is no retry and no "skip the failing plugin".
//! Each error is attributable either to the pipeline inputs (plugin list,
//! initial config) or to a named plugin.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::Diagnostic;
use quire_config::diagnostic::format_issues;
use quire_config::ValidationIssue;
use quire_core::QuireError;
use thiserror::Error;

/// A fatal failure of a plugin run.
#[derive(Debug, Error, Diagnostic)]
pub enum PluginError {
    /// The declared plugin list is malformed.
    #[error("invalid plugins config passed to quire\n{}", format_issues(.issues))]
    #[diagnostic(code(quire::plugin::invalid_plugins))]
    InvalidPluginList {
        /// Every problem found in the plugin list.
        issues: Vec<ValidationIssue>,
    },

    /// The user configuration failed validation before any plugin ran.
    #[error("invalid config passed to quire\n{}", format_issues(.issues))]
    #[diagnostic(code(quire::plugin::invalid_config))]
    InvalidConfig {
        /// Every problem found in the configuration.
        issues: Vec<ValidationIssue>,
    },

    /// A plugin's config update produced an invalid configuration.
    #[error("invalid config update provided by the `{plugin}` plugin\n{}", format_issues(.issues))]
    #[diagnostic(code(quire::plugin::invalid_update))]
    InvalidUpdate {
        /// Name of the offending plugin.
        plugin: String,
        /// Every problem found in the merged configuration.
        issues: Vec<ValidationIssue>,
    },

    /// A plugin tried to update the reserved `plugins` key.
    #[error("the `{plugin}` plugin tried to update the `plugins` config key which is not supported")]
    #[diagnostic(
        code(quire::plugin::reserved_key),
        help("plugins are declared in quire.toml and cannot be changed by other plugins")
    )]
    ReservedKey {
        /// Name of the offending plugin.
        plugin: String,
    },

    /// A plugin's setup routine failed.
    #[error("the `{plugin}` plugin failed during setup: {source}")]
    #[diagnostic(code(quire::plugin::setup))]
    Setup {
        /// Name of the failing plugin.
        plugin: String,
        /// The error returned by the plugin.
        #[source]
        source: QuireError,
    },
}

impl PluginError {
    /// Name of the plugin the error is attributed to, if any.
    pub fn plugin(&self) -> Option<&str> {
        match self {
            PluginError::InvalidUpdate { plugin, .. }
            | PluginError::ReservedKey { plugin }
            | PluginError::Setup { plugin, .. } => Some(plugin),
            PluginError::InvalidPluginList { .. } | PluginError::InvalidConfig { .. } => None,
        }
    }

    /// Validation issues carried by the error, empty for non-validation errors.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            PluginError::InvalidPluginList { issues }
            | PluginError::InvalidConfig { issues }
            | PluginError::InvalidUpdate { issues, .. } => issues,
            PluginError::ReservedKey { .. } | PluginError::Setup { .. } => &[],
        }
    }
}

/// Render a plugin error to stderr using miette's graphical handler.
pub fn render_error(error: &PluginError) {
    use miette::GraphicalReportHandler;

    let mut buf = String::new();
    let diagnostic: &dyn Diagnostic = error;
    if GraphicalReportHandler::new()
        .render_report(&mut buf, diagnostic)
        .is_ok()
    {
        eprint!("{buf}");
    } else {
        eprintln!("Error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(message: &str) -> ValidationIssue {
        ValidationIssue::Invalid {
            message: message.to_string(),
        }
    }

    #[test]
    fn update_error_composes_context_and_issues() {
        let err = PluginError::InvalidUpdate {
            plugin: "sidebar".to_string(),
            issues: vec![issue("title must not be empty"), issue("favicon `x` is bad")],
        };
        assert_eq!(
            err.to_string(),
            "invalid config update provided by the `sidebar` plugin\ntitle must not be empty\nfavicon `x` is bad"
        );
        assert_eq!(err.plugin(), Some("sidebar"));
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn reserved_key_error_names_plugin() {
        let err = PluginError::ReservedKey {
            plugin: "greedy".to_string(),
        };
        assert!(err.to_string().contains("`greedy` plugin"));
        assert!(err.to_string().contains("`plugins`"));
        assert!(err.issues().is_empty());
    }

    #[test]
    fn setup_error_keeps_source() {
        use std::error::Error as _;

        let err = PluginError::Setup {
            plugin: "flaky".to_string(),
            source: QuireError::plugin("network down"),
        };
        assert!(err.to_string().contains("network down"));
        assert!(err.source().is_some());
    }

    #[test]
    fn pipeline_errors_have_no_plugin() {
        let err = PluginError::InvalidConfig {
            issues: vec![issue("title must not be empty")],
        };
        assert_eq!(err.plugin(), None);
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("quire::plugin::invalid_config")
        );
    }
}
