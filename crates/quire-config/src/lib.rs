// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User configuration for Quire sites.
//!
//! Provides the raw user configuration loader (TOML file plus `QUIRE_`
//! environment overrides via Figment), the [`ConfigSchema`] contract used by
//! the plugin runner to validate every candidate configuration, the concrete
//! [`SiteConfig`] schema, and Elm-style diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use quire_config::{load_and_split, ConfigSchema, SiteConfigSchema};
//!
//! let loaded = load_and_split(None).expect("config errors");
//! let site = SiteConfigSchema.validate(&loaded.user_config).expect("invalid config");
//! println!("Site title: {}", site.title);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod schema;
pub mod validation;

use std::path::Path;

use serde_json::Value;

pub use diagnostic::{render_issues, ValidationIssue};
pub use loader::{load_user_config, load_user_config_from_path, load_user_config_from_str};
pub use model::SiteConfig;
pub use schema::{split_plugins, ConfigSchema, RawConfig, SiteConfigSchema, PLUGINS_KEY};

/// A raw user configuration with its plugin declarations split off.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// The user configuration without the `plugins` key.
    pub user_config: RawConfig,
    /// The declared `plugins` value, if any.
    pub plugins: Option<Value>,
}

/// Load the raw user configuration and split off its plugin declarations.
///
/// With `path`, only that file (plus env overrides) is read; otherwise
/// `./quire.toml` is used. The result is not schema-validated: that is the
/// plugin runner's first step.
pub fn load_and_split(path: Option<&Path>) -> Result<LoadedConfig, Vec<ValidationIssue>> {
    let loaded = match path {
        Some(path) => loader::load_user_config_from_path(path),
        None => loader::load_user_config(),
    };

    match loaded {
        Ok(raw) => {
            let (user_config, plugins) = split_plugins(raw);
            Ok(LoadedConfig {
                user_config,
                plugins,
            })
        }
        Err(err) => Err(diagnostic::figment_to_issues(err)),
    }
}
