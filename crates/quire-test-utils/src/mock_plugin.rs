// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock plugins for deterministic pipeline tests.
//!
//! `ScriptedPlugin` replays a fixed list of [`Step`]s against its context and
//! records what it observed; `SpyPlugin` only counts setup calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use quire_config::RawConfig;
use quire_core::{Integration, QuireError};
use quire_plugin::{LogLevel, Plugin, PluginContext};
use serde_json::Value;

/// One action a [`ScriptedPlugin`] performs during setup.
#[derive(Debug, Clone)]
pub enum Step {
    /// Call `update_config` with this object and propagate any error.
    Update(Value),
    /// Call `update_config` with this object and ignore the result.
    UpdateIgnoringErrors(Value),
    /// Register an integration.
    AddIntegration(Integration),
    /// Log a message through the plugin logger.
    Log(LogLevel, String),
    /// Record a snapshot of the current config.
    Snapshot,
    /// Suspend for the given duration.
    Sleep(Duration),
    /// Fail setup with a plugin error.
    Fail(String),
}

/// Shared, ordered record of events across plugins.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    events: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&self, event: impl Into<String>) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.into());
        }
    }

    /// All events recorded so far, in order.
    pub fn events(&self) -> Vec<String> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

/// A plugin replaying a fixed script of steps.
pub struct ScriptedPlugin {
    name: String,
    steps: Vec<Step>,
    journal: Journal,
    snapshots: Arc<Mutex<Vec<RawConfig>>>,
}

impl ScriptedPlugin {
    /// Create a plugin with no steps.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            journal: Journal::new(),
            snapshots: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a step.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Record `start:<name>` and `end:<name>` events in `journal`.
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = journal;
        self
    }

    /// Config snapshots taken by [`Step::Snapshot`] steps, in order.
    pub fn snapshots(&self) -> Vec<RawConfig> {
        self.snapshots
            .lock()
            .map(|snapshots| snapshots.clone())
            .unwrap_or_default()
    }

    /// Wrap in an `Arc` for use in a plugin list.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl Plugin for ScriptedPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    async fn setup(&self, ctx: &mut PluginContext<'_>) -> Result<(), QuireError> {
        self.journal.record(format!("start:{}", self.name));

        for step in &self.steps {
            match step {
                Step::Update(partial) => ctx.update_config_value(partial.clone())?,
                Step::UpdateIgnoringErrors(partial) => {
                    let _ = ctx.update_config_value(partial.clone());
                }
                Step::AddIntegration(integration) => ctx.add_integration(integration.clone()),
                Step::Log(level, message) => ctx.logger().log(*level, message),
                Step::Snapshot => {
                    if let Ok(mut snapshots) = self.snapshots.lock() {
                        snapshots.push(ctx.config().clone());
                    }
                }
                Step::Sleep(duration) => tokio::time::sleep(*duration).await,
                Step::Fail(message) => return Err(QuireError::plugin(message.clone())),
            }
        }

        self.journal.record(format!("end:{}", self.name));
        Ok(())
    }
}

/// A plugin that only counts how often its setup ran.
#[derive(Debug, Clone)]
pub struct SpyPlugin {
    name: String,
    calls: Arc<AtomicUsize>,
}

impl SpyPlugin {
    /// Create a spy with zero recorded calls.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times setup ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Plugin for SpyPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    async fn setup(&self, _ctx: &mut PluginContext<'_>) -> Result<(), QuireError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
