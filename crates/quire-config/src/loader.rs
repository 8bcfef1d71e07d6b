// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw user configuration loader using Figment for layered merging.
//!
//! Reads `quire.toml` (or an explicit path) with environment variable
//! overrides via the `QUIRE_` prefix. The result is an untyped
//! [`RawConfig`]: typing and normalization belong to the schema.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};

use crate::schema::RawConfig;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "quire.toml";

/// Load the user configuration from `./quire.toml` with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. `./quire.toml`
/// 2. `QUIRE_*` environment variables
pub fn load_user_config() -> Result<RawConfig, figment::Error> {
    build_figment(Path::new(CONFIG_FILE)).extract()
}

/// Load the user configuration from a specific file path with env var overrides.
///
/// Unlike `./quire.toml`, an explicit path must exist.
pub fn load_user_config_from_path(path: &Path) -> Result<RawConfig, figment::Error> {
    if !path.is_file() {
        return Err(figment::Error::from(format!(
            "config file `{}` not found",
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), "loading user config");
    build_figment(path).extract()
}

/// Load the user configuration from a TOML string only (no file, no env).
///
/// Used for testing and explicit configuration.
pub fn load_user_config_from_str(toml_content: &str) -> Result<RawConfig, figment::Error> {
    Figment::new().merge(Toml::string(toml_content)).extract()
}

/// Build the Figment used for config loading.
pub fn build_figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Toml::file(path))
        .merge(env_provider())
}

/// Create the environment variable provider.
///
/// Double underscores separate nesting levels so that underscore-containing
/// keys survive: `QUIRE_TABLE_OF_CONTENTS__MAX_HEADING_LEVEL` maps to
/// `table_of_contents.max_heading_level`. `QUIRE_LOG` is the log filter and
/// never part of the config.
fn env_provider() -> Env {
    Env::prefixed("QUIRE_").ignore(&["log"]).split("__")
}
