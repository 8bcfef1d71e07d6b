// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Namespaced loggers handed to plugins.
//!
//! The runner receives a root [`PluginLogger`] and forks it once per plugin
//! turn, so every message a plugin emits is labelled with the plugin's name.

use std::sync::Arc;

use strum::Display;

/// Severity of a plugin log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// A logger bound to a label.
pub trait PluginLogger: Send + Sync {
    /// The label every message is namespaced under.
    fn label(&self) -> &str;

    /// Emit `message` at `level`.
    fn log(&self, level: LogLevel, message: &str);

    /// Create a child logger namespaced under `label`.
    fn fork(&self, label: &str) -> Arc<dyn PluginLogger>;

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Default logger emitting through `tracing` under the `quire::plugin` target.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    label: String,
}

impl TracingLogger {
    /// Create a root logger with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("quire")
    }
}

impl PluginLogger for TracingLogger {
    fn label(&self) -> &str {
        &self.label
    }

    fn log(&self, level: LogLevel, message: &str) {
        let label = self.label.as_str();
        match level {
            LogLevel::Debug => {
                tracing::debug!(target: "quire::plugin", label, "[{label}] {message}")
            }
            LogLevel::Info => {
                tracing::info!(target: "quire::plugin", label, "[{label}] {message}")
            }
            LogLevel::Warn => {
                tracing::warn!(target: "quire::plugin", label, "[{label}] {message}")
            }
            LogLevel::Error => {
                tracing::error!(target: "quire::plugin", label, "[{label}] {message}")
            }
        }
    }

    fn fork(&self, label: &str) -> Arc<dyn PluginLogger> {
        Arc::new(TracingLogger::new(format!("{}/{label}", self.label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fork_nests_label() {
        let root = TracingLogger::default();
        let child = root.fork("docsearch");
        assert_eq!(child.label(), "quire/docsearch");
        assert_eq!(child.fork("inner").label(), "quire/docsearch/inner");
        assert_eq!(root.label(), "quire");
    }

    #[test]
    fn log_level_displays_lowercase() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }
}
