// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin list validation.

use std::sync::Arc;

use quire_config::ValidationIssue;

use crate::error::PluginError;
use crate::plugin::{Plugin, PluginDescriptor};

/// Check the shape of a plugin list before anything runs.
///
/// An absent list is treated as empty. Every plugin must have a non-empty
/// name; setup routines are never invoked here. All problems are collected
/// into a single [`PluginError::InvalidPluginList`]. Duplicate names are
/// allowed: names only attribute errors and label log output.
pub fn validate_plugin_list(
    candidates: Option<Vec<Arc<dyn Plugin>>>,
) -> Result<Vec<PluginDescriptor>, PluginError> {
    let candidates = candidates.unwrap_or_default();

    let issues: Vec<ValidationIssue> = candidates
        .iter()
        .enumerate()
        .filter(|(_, plugin)| plugin.name().trim().is_empty())
        .map(|(i, _)| ValidationIssue::Invalid {
            message: format!("plugins[{i}].name must be a non-empty string"),
        })
        .collect();

    if !issues.is_empty() {
        return Err(PluginError::InvalidPluginList { issues });
    }

    Ok(candidates.into_iter().map(PluginDescriptor::new).collect())
}
