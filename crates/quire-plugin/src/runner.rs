// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The sequential plugin runner.
//!
//! Runs validated plugins one at a time, in declaration order, against a
//! shared configuration. The configuration is validated before the first
//! plugin runs and re-validated after every update, so each plugin observes
//! the fully merged result of every plugin before it. The first failure ends
//! the run and nothing partial is returned.

use std::sync::Arc;

use quire_config::{ConfigSchema, RawConfig, ValidationIssue};
use quire_core::Integration;
use tracing::{debug, info, warn, Instrument};

use crate::context::{ConfigSlot, PluginContext};
use crate::error::PluginError;
use crate::logger::PluginLogger;
use crate::plugin::{Plugin, PluginDescriptor};
use crate::validate::validate_plugin_list;

/// Result of a successful plugin run.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginRunOutput<C> {
    /// Integrations in plugin order, then registration order.
    pub integrations: Vec<Integration>,
    /// The final validated configuration.
    pub config: C,
    /// The final raw user configuration the validated one was built from.
    pub user_config: RawConfig,
}

/// Runs plugins against user configurations validated by `S`.
pub struct PluginRunner<S> {
    schema: S,
    logger: Arc<dyn PluginLogger>,
}

impl<S: ConfigSchema> PluginRunner<S> {
    /// Create a runner validating with `schema` and forking `logger` per plugin.
    pub fn new(schema: S, logger: Arc<dyn PluginLogger>) -> Self {
        Self { schema, logger }
    }

    /// The schema every candidate configuration is validated against.
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// Validate the configuration and the plugin list, then run every plugin.
    ///
    /// An absent plugin list is treated as empty. The configuration is
    /// validated first; neither validation runs any plugin code.
    pub async fn run(
        &self,
        user_config: RawConfig,
        plugins: Option<Vec<Arc<dyn Plugin>>>,
    ) -> Result<PluginRunOutput<S::Output>, PluginError> {
        let validated = self.validate_initial(&user_config)?;
        let descriptors = validate_plugin_list(plugins)?;
        self.run_validated(user_config, validated, &descriptors).await
    }

    fn validate_initial(&self, user_config: &RawConfig) -> Result<S::Output, PluginError> {
        self.schema.validate(user_config).map_err(|issues| {
            warn!(issues = issues.len(), "initial config failed validation");
            PluginError::InvalidConfig { issues }
        })
    }

    async fn run_validated(
        &self,
        user_config: RawConfig,
        validated: S::Output,
        descriptors: &[PluginDescriptor],
    ) -> Result<PluginRunOutput<S::Output>, PluginError> {
        let mut state = PipelineState {
            schema: &self.schema,
            raw: user_config,
            validated,
        };
        let mut integrations = Vec::new();

        for descriptor in descriptors {
            let span = tracing::debug_span!("plugin", name = %descriptor.name);
            self.run_plugin(descriptor, &mut state, &mut integrations)
                .instrument(span)
                .await?;
        }

        info!(
            plugins = descriptors.len(),
            integrations = integrations.len(),
            "plugins applied"
        );

        Ok(PluginRunOutput {
            integrations,
            config: state.validated,
            user_config: state.raw,
        })
    }

    async fn run_plugin(
        &self,
        descriptor: &PluginDescriptor,
        state: &mut PipelineState<'_, S>,
        integrations: &mut Vec<Integration>,
    ) -> Result<(), PluginError> {
        let logger = self.logger.fork(&descriptor.name);
        let mut ctx = PluginContext::new(&descriptor.name, state, integrations, logger);

        debug!("running plugin setup");
        let outcome = descriptor.plugin.setup(&mut ctx).await;

        if let Some(failure) = ctx.into_failure() {
            warn!(plugin = %descriptor.name, error = %failure, "plugin violated config protocol");
            return Err(failure);
        }

        if let Err(source) = outcome {
            warn!(plugin = %descriptor.name, error = %source, "plugin setup failed");
            return Err(PluginError::Setup {
                plugin: descriptor.name.clone(),
                source,
            });
        }

        debug!("plugin setup finished");
        Ok(())
    }
}

impl<S> std::fmt::Debug for PluginRunner<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRunner")
            .field("logger", &self.logger.label())
            .finish_non_exhaustive()
    }
}

/// The single live configuration of a run: raw form plus validated form.
struct PipelineState<'s, S: ConfigSchema> {
    schema: &'s S,
    raw: RawConfig,
    validated: S::Output,
}

impl<S: ConfigSchema> ConfigSlot for PipelineState<'_, S> {
    fn raw(&self) -> &RawConfig {
        &self.raw
    }

    fn replace(&mut self, candidate: RawConfig) -> Result<(), Vec<ValidationIssue>> {
        let validated = self.schema.validate(&candidate)?;
        self.raw = candidate;
        self.validated = validated;
        Ok(())
    }
}
