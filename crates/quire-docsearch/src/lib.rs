// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! DocSearch plugin for Quire.
//!
//! Replaces the site's `Search` component with the DocSearch component,
//! unless the user already overrides it, and registers an integration that
//! exposes the DocSearch options to the host as a virtual module.
//!
//! Declared in `quire.toml` as:
//!
//! ```toml
//! [[plugins]]
//! name = "docsearch"
//!
//! [plugins.options]
//! app_id = "YOUR_APP_ID"
//! api_key = "YOUR_SEARCH_API_KEY"
//! index_name = "YOUR_INDEX_NAME"
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use quire_core::{Integration, QuireError};
use quire_plugin::{Plugin, PluginContext, PluginFactory};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Name the plugin is registered under in the built-in catalog.
pub const REGISTRY_NAME: &str = "docsearch";

/// Name of the plugin and of the integration it registers.
pub const PLUGIN_NAME: &str = "quire-docsearch";

/// Component path installed as the `Search` override.
pub const SEARCH_COMPONENT: &str = "@quire/docsearch/DocSearch";

/// Virtual module exposing the DocSearch options.
pub const CONFIG_MODULE_ID: &str = "virtual:quire/docsearch-config";

/// DocSearch credentials and index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocSearchConfig {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
}

/// The DocSearch plugin.
#[derive(Debug, Clone)]
pub struct DocSearchPlugin {
    config: DocSearchConfig,
}

impl DocSearchPlugin {
    pub fn new(config: DocSearchConfig) -> Self {
        Self { config }
    }

    /// The integration exposing the options as [`CONFIG_MODULE_ID`].
    pub fn integration(&self) -> Result<Integration, QuireError> {
        let options = serde_json::to_string(&self.config).map_err(|e| {
            QuireError::plugin_with_source("failed to serialize DocSearch options", e)
        })?;

        Ok(Integration::new(PLUGIN_NAME).with_hook(
            "config:setup",
            json!({
                "virtual_modules": {
                    CONFIG_MODULE_ID: format!("export default {options}"),
                }
            }),
        ))
    }
}

#[async_trait]
impl Plugin for DocSearchPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    async fn setup(&self, ctx: &mut PluginContext<'_>) -> Result<(), QuireError> {
        let mut components = ctx
            .config()
            .get("components")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        if components.contains_key("Search") {
            ctx.logger().warn(
                "It looks like you already have a `Search` component override. To render the \
                 DocSearch component, either remove the existing `Search` override from your \
                 configuration or render `@quire/docsearch/DocSearch` inside your custom override.",
            );
        } else {
            components.insert("Search".to_string(), json!(SEARCH_COMPONENT));
            ctx.update_config_value(json!({ "components": components }))?;
        }

        ctx.add_integration(self.integration()?);
        Ok(())
    }
}

/// Builds [`DocSearchPlugin`]s from declared options.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocSearchFactory;

impl PluginFactory for DocSearchFactory {
    fn description(&self) -> &str {
        "Algolia DocSearch as the site search provider"
    }

    fn create(&self, options: &Map<String, Value>) -> Result<Arc<dyn Plugin>, QuireError> {
        let config: DocSearchConfig = serde_json::from_value(Value::Object(options.clone()))
            .map_err(|e| QuireError::Config(format!("invalid DocSearch options: {e}")))?;
        Ok(Arc::new(DocSearchPlugin::new(config)))
    }
}
