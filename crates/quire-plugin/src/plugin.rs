// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The plugin trait and validated plugin descriptors.

use std::sync::Arc;

use async_trait::async_trait;
use quire_core::QuireError;

use crate::context::PluginContext;

/// A named extension unit run once per configuration resolution.
///
/// `setup` may read and update the user configuration and register
/// integrations through the [`PluginContext`]. It may suspend; the runner
/// awaits it to completion before starting the next plugin.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Plugin name, used for error attribution and logger namespacing.
    fn name(&self) -> &str;

    /// Run the plugin against the current configuration.
    async fn setup(&self, ctx: &mut PluginContext<'_>) -> Result<(), QuireError>;
}

/// A plugin that passed plugin list validation.
///
/// Only [`validate_plugin_list`](crate::validate_plugin_list) builds these.
#[derive(Clone)]
pub struct PluginDescriptor {
    pub(crate) name: String,
    pub(crate) plugin: Arc<dyn Plugin>,
}

impl PluginDescriptor {
    pub(crate) fn new(plugin: Arc<dyn Plugin>) -> Self {
        Self {
            name: plugin.name().to_string(),
            plugin,
        }
    }

    /// Name the plugin is attributed under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The plugin itself.
    pub fn plugin(&self) -> &Arc<dyn Plugin> {
        &self.plugin
    }
}

impl std::fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
