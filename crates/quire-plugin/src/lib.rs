// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry, plugin list validation, and the sequential plugin runner.
//!
//! Plugins observe and update the user configuration before the host consumes
//! it, and register integrations for the host to install. The runner applies
//! plugins strictly in declaration order, re-validating the configuration
//! after every update, and attributes every failure to the plugin that caused
//! it.
//!
//! # Usage
//!
//! ```no_run
//! # async fn demo(plugins: Vec<std::sync::Arc<dyn quire_plugin::Plugin>>) {
//! use std::sync::Arc;
//! use quire_config::SiteConfigSchema;
//! use quire_plugin::{PluginRunner, TracingLogger};
//!
//! let runner = PluginRunner::new(SiteConfigSchema, Arc::new(TracingLogger::default()));
//! let user_config = serde_json::json!({ "title": "Docs" });
//! let user_config = user_config.as_object().cloned().unwrap_or_default();
//! let output = runner.run(user_config, Some(plugins)).await.expect("plugin run failed");
//! println!("{} integrations", output.integrations.len());
//! # }
//! ```

pub mod context;
pub mod error;
pub mod logger;
pub mod plugin;
pub mod registry;
pub mod runner;
pub mod validate;

pub use context::PluginContext;
pub use error::{render_error, PluginError};
pub use logger::{LogLevel, PluginLogger, TracingLogger};
pub use plugin::{Plugin, PluginDescriptor};
pub use registry::{PluginEntry, PluginFactory, PluginRegistry};
pub use runner::{PluginRunOutput, PluginRunner};
pub use validate::validate_plugin_list;
