// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for plugin pipeline tests.
//!
//! `TestHarness` wires a [`PluginRunner`] with the site schema and a
//! [`CaptureLogger`], so tests can drive a full run and inspect the logs.

use std::sync::Arc;

use quire_config::{RawConfig, SiteConfig, SiteConfigSchema};
use quire_plugin::{Plugin, PluginError, PluginRunOutput, PluginRunner};
use serde_json::Value;

use crate::capture_logger::{CaptureLogger, LogRecord};

/// A plugin runner with captured logs.
pub struct TestHarness {
    runner: PluginRunner<SiteConfigSchema>,
    logger: CaptureLogger,
}

impl TestHarness {
    /// Create a harness using [`SiteConfigSchema`].
    pub fn new() -> Self {
        let logger = CaptureLogger::new();
        Self {
            runner: PluginRunner::new(SiteConfigSchema, Arc::new(logger.clone())),
            logger,
        }
    }

    /// Run `plugins` against `config`, which must be a JSON object.
    pub async fn run(
        &self,
        config: Value,
        plugins: Vec<Arc<dyn Plugin>>,
    ) -> Result<PluginRunOutput<SiteConfig>, PluginError> {
        self.runner.run(raw_config(config), Some(plugins)).await
    }

    /// The underlying runner.
    pub fn runner(&self) -> &PluginRunner<SiteConfigSchema> {
        &self.runner
    }

    /// Every message logged by plugins so far.
    pub fn logs(&self) -> Vec<LogRecord> {
        self.logger.records()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a JSON object literal into a [`RawConfig`].
///
/// Non-object values yield an empty config.
pub fn raw_config(value: Value) -> RawConfig {
    match value {
        Value::Object(map) => map,
        _ => RawConfig::new(),
    }
}
