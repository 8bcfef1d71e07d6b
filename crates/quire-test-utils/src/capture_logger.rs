// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger that records messages instead of emitting them.

use std::sync::{Arc, Mutex};

use quire_plugin::{LogLevel, PluginLogger};

/// A single captured log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Label of the logger that emitted the message.
    pub label: String,
    /// Message severity.
    pub level: LogLevel,
    /// Message text.
    pub message: String,
}

/// A logger capturing every message, shared with all of its forks.
#[derive(Debug, Clone)]
pub struct CaptureLogger {
    label: String,
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl CaptureLogger {
    /// Create a root capture logger labelled `quire`.
    pub fn new() -> Self {
        Self {
            label: "quire".to_string(),
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All messages captured so far by this logger and its forks.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl Default for CaptureLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginLogger for CaptureLogger {
    fn label(&self) -> &str {
        &self.label
    }

    fn log(&self, level: LogLevel, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push(LogRecord {
                label: self.label.clone(),
                level,
                message: message.to_string(),
            });
        }
    }

    fn fork(&self, label: &str) -> Arc<dyn PluginLogger> {
        Arc::new(CaptureLogger {
            label: format!("{}/{label}", self.label),
            records: Arc::clone(&self.records),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forks_share_records() {
        let root = CaptureLogger::new();
        let child = root.fork("docsearch");
        child.warn("search override exists");
        root.info("done");

        let records = root.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, "quire/docsearch");
        assert_eq!(records[0].level, LogLevel::Warn);
        assert_eq!(records[1].label, "quire");
    }
}
