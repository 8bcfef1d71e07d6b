// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Quire plugin system.

use thiserror::Error;

/// The error type returned by plugin setup routines and core operations.
#[derive(Debug, Error)]
pub enum QuireError {
    /// Configuration errors (invalid config update, reserved key, bad options).
    #[error("configuration error: {0}")]
    Config(String),

    /// A plugin failed for a reason of its own.
    #[error("plugin error: {message}")]
    Plugin {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Filesystem errors raised while a plugin reads its own resources.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl QuireError {
    /// Build a [`QuireError::Plugin`] without an underlying cause.
    pub fn plugin(message: impl Into<String>) -> Self {
        Self::Plugin {
            message: message.into(),
            source: None,
        }
    }

    /// Build a [`QuireError::Plugin`] wrapping an underlying cause.
    pub fn plugin_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Plugin {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
