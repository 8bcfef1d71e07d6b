// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `quire check` and `quire resolve`.
//!
//! Both load the raw config, build the declared plugins from the built-in
//! catalog and run them. They differ only in what they print.

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use quire_config::{render_issues, SiteConfig, SiteConfigSchema, ValidationIssue};
use quire_plugin::{render_error, PluginError, PluginRunOutput, PluginRunner, TracingLogger};

use crate::catalog::builtin_registry;

/// Why a resolution failed.
enum ResolveError {
    /// The config file could not be read or parsed.
    Load(Vec<ValidationIssue>),
    /// The plugin list, the config or a plugin failed.
    Plugin(PluginError),
}

impl ResolveError {
    fn render(&self) {
        match self {
            ResolveError::Load(issues) => render_issues(issues),
            ResolveError::Plugin(error) => render_error(error),
        }
    }
}

/// Load, instantiate plugins and run them.
async fn resolve(path: Option<&Path>) -> Result<PluginRunOutput<SiteConfig>, ResolveError> {
    let loaded = quire_config::load_and_split(path).map_err(ResolveError::Load)?;

    let plugins = builtin_registry()
        .instantiate(loaded.plugins.as_ref())
        .map_err(ResolveError::Plugin)?;
    tracing::debug!(plugins = plugins.len(), "instantiated declared plugins");

    let runner = PluginRunner::new(SiteConfigSchema, Arc::new(TracingLogger::default()));
    runner
        .run(loaded.user_config, Some(plugins))
        .await
        .map_err(ResolveError::Plugin)
}

/// Run `quire check`, returning the process exit code.
pub async fn run_check(path: Option<&Path>) -> i32 {
    match resolve(path).await {
        Ok(output) => {
            println!("{} {}", "ok".green().bold(), output.config.title);
            if let Some(description) = &output.config.description {
                println!("  description: {description}");
            }
            for (name, path) in &output.config.components {
                println!("  component {name}: {path}");
            }
            if output.integrations.is_empty() {
                println!("  no integrations");
            }
            for integration in &output.integrations {
                println!("  integration {}", integration.name);
            }
            0
        }
        Err(err) => {
            err.render();
            1
        }
    }
}

/// Run `quire resolve`, returning the process exit code.
pub async fn run_resolve(path: Option<&Path>) -> i32 {
    match resolve(path).await {
        Ok(output) => {
            let json = serde_json::json!({
                "config": output.config,
                "integrations": output.integrations,
            });
            match serde_json::to_string_pretty(&json) {
                Ok(text) => {
                    println!("{text}");
                    0
                }
                Err(e) => {
                    eprintln!("Error: failed to serialize resolved config: {e}");
                    1
                }
            }
        }
        Err(err) => {
            err.render();
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn resolves_declared_docsearch_plugin() {
        let file = config_file(
            r#"
title = "Docs"

[[plugins]]
name = "docsearch"

[plugins.options]
app_id = "APP"
api_key = "KEY"
index_name = "docs"
"#,
        );

        let output = resolve(Some(file.path())).await.ok().unwrap();
        assert_eq!(
            output.config.components["Search"],
            quire_docsearch::SEARCH_COMPONENT
        );
        assert_eq!(output.integrations.len(), 1);
        assert!(!output.user_config.contains_key("plugins"));
    }

    #[tokio::test]
    async fn unknown_plugin_fails_before_running() {
        let file = config_file(
            r#"
title = "Docs"

[[plugins]]
name = "docsearh"
"#,
        );

        match resolve(Some(file.path())).await {
            Err(ResolveError::Plugin(PluginError::InvalidPluginList { issues })) => {
                assert!(issues[0].to_string().contains("did you mean `docsearch`?"));
            }
            _ => panic!("expected an invalid plugin list"),
        }
    }

    #[tokio::test]
    async fn missing_config_file_is_reported_as_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quire.toml");

        match resolve(Some(&path)).await {
            Err(ResolveError::Load(issues)) => {
                assert_eq!(issues.len(), 1);
                assert!(matches!(
                    &issues[0],
                    ValidationIssue::Other(message) if message.contains("not found")
                ));
            }
            _ => panic!("expected a load error for a missing config file"),
        }
        assert_eq!(run_check(Some(&path)).await, 1);
    }

    #[tokio::test]
    async fn exit_codes_reflect_outcome() {
        let good = config_file("title = \"Docs\"\n");
        assert_eq!(run_check(Some(good.path())).await, 0);

        let bad = config_file("title = \"\"\n");
        assert_eq!(run_resolve(Some(bad.path())).await, 1);
    }
}
