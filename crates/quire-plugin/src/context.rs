// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The capability object handed to a plugin's setup routine.
//!
//! A [`PluginContext`] is built fresh for every plugin turn. It is the only
//! way a plugin can reach pipeline state: plugins read the configuration
//! through a shared borrow and change it only through
//! [`PluginContext::update_config`], which re-validates before anything is
//! replaced.

use std::sync::Arc;

use quire_config::{RawConfig, ValidationIssue, PLUGINS_KEY};
use quire_core::{Integration, QuireError};
use serde_json::Value;
use tracing::debug;

use crate::error::PluginError;
use crate::logger::PluginLogger;

/// Type-erased access to the runner's configuration state.
pub(crate) trait ConfigSlot: Send {
    /// The current raw user configuration.
    fn raw(&self) -> &RawConfig;

    /// Validate `candidate` and, on success, make it the current state.
    ///
    /// On failure the state is left untouched.
    fn replace(&mut self, candidate: RawConfig) -> Result<(), Vec<ValidationIssue>>;
}

/// Capabilities available to a plugin during its setup routine.
pub struct PluginContext<'a> {
    plugin: &'a str,
    state: &'a mut dyn ConfigSlot,
    integrations: &'a mut Vec<Integration>,
    logger: Arc<dyn PluginLogger>,
    failure: Option<PluginError>,
}

impl<'a> PluginContext<'a> {
    pub(crate) fn new(
        plugin: &'a str,
        state: &'a mut dyn ConfigSlot,
        integrations: &'a mut Vec<Integration>,
        logger: Arc<dyn PluginLogger>,
    ) -> Self {
        Self {
            plugin,
            state,
            integrations,
            logger,
            failure: None,
        }
    }

    /// Name of the plugin this context is bound to.
    pub fn plugin_name(&self) -> &str {
        self.plugin
    }

    /// The current user configuration.
    ///
    /// Reflects every update made by earlier plugins and by earlier
    /// [`update_config`](Self::update_config) calls of this plugin. The
    /// borrow cannot be held across an update.
    pub fn config(&self) -> &RawConfig {
        self.state.raw()
    }

    /// Logger whose messages are labelled with this plugin's name.
    pub fn logger(&self) -> &dyn PluginLogger {
        self.logger.as_ref()
    }

    /// Update the user configuration.
    ///
    /// Keys in `partial` replace same-named keys wholesale; nested values are
    /// not merged. The merged configuration is re-validated and only replaces
    /// the current one if it is valid.
    ///
    /// Updating the `plugins` key or producing an invalid configuration is
    /// fatal to the run: the failure is recorded and the run fails once setup
    /// returns, even if the plugin ignores the returned error.
    pub fn update_config(&mut self, partial: RawConfig) -> Result<(), QuireError> {
        if let Some(failure) = &self.failure {
            return Err(QuireError::Config(failure.to_string()));
        }

        if partial.contains_key(PLUGINS_KEY) {
            return Err(self.fail(PluginError::ReservedKey {
                plugin: self.plugin.to_string(),
            }));
        }

        let updated_keys: Vec<String> = partial.keys().cloned().collect();
        let mut merged = self.state.raw().clone();
        merged.extend(partial);

        match self.state.replace(merged) {
            Ok(()) => {
                debug!(plugin = %self.plugin, keys = ?updated_keys, "config updated");
                Ok(())
            }
            Err(issues) => Err(self.fail(PluginError::InvalidUpdate {
                plugin: self.plugin.to_string(),
                issues,
            })),
        }
    }

    /// Update the user configuration from a JSON value.
    ///
    /// Convenience over [`update_config`](Self::update_config) for
    /// `serde_json::json!` literals. `partial` must be an object.
    pub fn update_config_value(&mut self, partial: Value) -> Result<(), QuireError> {
        match partial {
            Value::Object(partial) => self.update_config(partial),
            other => Err(QuireError::Config(format!(
                "config update from the `{}` plugin must be an object, got {other}",
                self.plugin
            ))),
        }
    }

    /// Register an integration for the host to install.
    ///
    /// Integrations are kept in registration order; duplicates are kept.
    pub fn add_integration(&mut self, integration: Integration) {
        debug!(plugin = %self.plugin, integration = %integration.name, "integration added");
        self.integrations.push(integration);
    }

    /// The fatal protocol failure recorded during this turn, if any.
    pub(crate) fn into_failure(self) -> Option<PluginError> {
        self.failure
    }

    fn fail(&mut self, error: PluginError) -> QuireError {
        let returned = QuireError::Config(error.to_string());
        self.failure = Some(error);
        returned
    }
}

impl std::fmt::Debug for PluginContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginContext")
            .field("plugin", &self.plugin)
            .field("config", self.state.raw())
            .field("integrations", &self.integrations.len())
            .field("failed", &self.failure.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::TracingLogger;
    use serde_json::json;

    /// Accepts any config without a `broken` key.
    struct Slot {
        raw: RawConfig,
        replacements: usize,
    }

    impl ConfigSlot for Slot {
        fn raw(&self) -> &RawConfig {
            &self.raw
        }

        fn replace(&mut self, candidate: RawConfig) -> Result<(), Vec<ValidationIssue>> {
            if candidate.contains_key("broken") {
                return Err(vec![ValidationIssue::Invalid {
                    message: "broken is not allowed".to_string(),
                }]);
            }
            self.raw = candidate;
            self.replacements += 1;
            Ok(())
        }
    }

    fn slot(value: Value) -> Slot {
        Slot {
            raw: value.as_object().cloned().unwrap(),
            replacements: 0,
        }
    }

    fn logger() -> Arc<dyn PluginLogger> {
        Arc::new(TracingLogger::default())
    }

    #[test]
    fn update_merges_shallowly() {
        let mut state = slot(json!({ "title": "Docs", "social": { "github": "a", "x": "b" } }));
        let mut integrations = Vec::new();
        let mut ctx = PluginContext::new("p", &mut state, &mut integrations, logger());

        ctx.update_config_value(json!({ "social": { "mastodon": "c" } }))
            .unwrap();
        assert_eq!(ctx.config()["social"], json!({ "mastodon": "c" }));
        assert_eq!(ctx.config()["title"], json!("Docs"));
        assert!(ctx.into_failure().is_none());
        assert_eq!(state.replacements, 1);
    }

    #[test]
    fn reserved_key_is_recorded_and_state_untouched() {
        let mut state = slot(json!({ "title": "Docs" }));
        let mut integrations = Vec::new();
        let mut ctx = PluginContext::new("greedy", &mut state, &mut integrations, logger());
        assert_eq!(ctx.plugin_name(), "greedy");

        let err = ctx
            .update_config_value(json!({ "plugins": [], "title": "Mine" }))
            .unwrap_err();
        assert!(err.to_string().contains("`plugins`"));
        assert!(matches!(
            ctx.into_failure(),
            Some(PluginError::ReservedKey { plugin }) if plugin == "greedy"
        ));
        assert_eq!(state.raw["title"], json!("Docs"));
        assert_eq!(state.replacements, 0);
    }

    #[test]
    fn invalid_update_is_not_applied() {
        let mut state = slot(json!({ "title": "Docs" }));
        let mut integrations = Vec::new();
        let mut ctx = PluginContext::new("p", &mut state, &mut integrations, logger());

        assert!(ctx.update_config_value(json!({ "broken": true })).is_err());
        assert!(!ctx.config().contains_key("broken"));
        assert!(matches!(
            ctx.into_failure(),
            Some(PluginError::InvalidUpdate { issues, .. }) if issues.len() == 1
        ));
    }

    #[test]
    fn updates_after_failure_are_rejected() {
        let mut state = slot(json!({ "title": "Docs" }));
        let mut integrations = Vec::new();
        let mut ctx = PluginContext::new("p", &mut state, &mut integrations, logger());

        let _ = ctx.update_config_value(json!({ "broken": true }));
        assert!(ctx.update_config_value(json!({ "title": "Later" })).is_err());
        assert_eq!(ctx.config()["title"], json!("Docs"));
    }

    #[test]
    fn non_object_update_is_rejected_without_recording() {
        let mut state = slot(json!({ "title": "Docs" }));
        let mut integrations = Vec::new();
        let mut ctx = PluginContext::new("p", &mut state, &mut integrations, logger());

        assert!(ctx.update_config_value(json!(["title"])).is_err());
        assert!(ctx.into_failure().is_none());
    }

    #[test]
    fn integrations_keep_order_and_duplicates() {
        let mut state = slot(json!({ "title": "Docs" }));
        let mut integrations = Vec::new();
        let mut ctx = PluginContext::new("p", &mut state, &mut integrations, logger());

        ctx.add_integration(Integration::new("a"));
        ctx.add_integration(Integration::new("a"));
        ctx.add_integration(Integration::new("b"));
        drop(ctx);

        let names: Vec<&str> = integrations.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "a", "b"]);
    }
}
