// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The schema-validation contract and the concrete site schema.
//!
//! The plugin runner never looks inside a configuration. It hands every
//! candidate to a [`ConfigSchema`] and keeps whatever comes back.

use serde_json::{Map, Value};

use crate::diagnostic::{suggest_key, ValidationIssue};
use crate::model::{SiteConfig, KNOWN_KEYS};
use crate::validation::validate_site_config;

/// An unvalidated user configuration: a JSON object keyed by top-level option.
pub type RawConfig = Map<String, Value>;

/// Top-level key holding plugin declarations. Plugins may never update it.
pub const PLUGINS_KEY: &str = "plugins";

/// Validates and normalizes candidate user configurations.
///
/// Implementations must be pure: the runner calls `validate` once for the
/// initial configuration and again after every plugin update.
pub trait ConfigSchema: Send + Sync {
    /// The validated, normalized configuration.
    type Output: Send + Sync;

    /// Validate `candidate`, returning every issue found on failure.
    ///
    /// The returned issue list must be non-empty on failure.
    fn validate(&self, candidate: &RawConfig) -> Result<Self::Output, Vec<ValidationIssue>>;
}

/// The Quire site configuration schema, producing a [`SiteConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteConfigSchema;

impl ConfigSchema for SiteConfigSchema {
    type Output = SiteConfig;

    fn validate(&self, candidate: &RawConfig) -> Result<SiteConfig, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        for (key, value) in candidate {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                issues.push(ValidationIssue::UnknownKey {
                    key: key.clone(),
                    suggestion: suggest_key(key, KNOWN_KEYS),
                    valid_keys: KNOWN_KEYS.join(", "),
                });
                continue;
            }

            // Deserialize each key against an otherwise-minimal config so type
            // errors are attributed to the key that caused them.
            let mut probe = Map::new();
            probe.insert("title".to_string(), Value::String(String::new()));
            probe.insert(key.clone(), value.clone());
            if let Err(err) = serde_json::from_value::<SiteConfig>(Value::Object(probe)) {
                issues.push(ValidationIssue::InvalidType {
                    key: key.clone(),
                    detail: err.to_string(),
                });
            }
        }

        if !candidate.contains_key("title") {
            issues.push(ValidationIssue::MissingKey {
                key: "title".to_string(),
            });
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        let config: SiteConfig = serde_json::from_value(Value::Object(candidate.clone()))
            .map_err(|err| vec![ValidationIssue::Other(err.to_string())])?;

        validate_site_config(&config)?;
        Ok(config)
    }
}

/// Remove the `plugins` entry from a raw configuration.
///
/// Plugin declarations are consumed by the plugin registry and never reach
/// the schema or the plugins themselves.
pub fn split_plugins(mut raw: RawConfig) -> (RawConfig, Option<Value>) {
    let plugins = raw.remove(PLUGINS_KEY);
    (raw, plugins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawConfig {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn minimal_config_normalizes_defaults() {
        let config = SiteConfigSchema
            .validate(&raw(json!({ "title": "Docs" })))
            .unwrap();
        assert_eq!(config.title, "Docs");
        assert_eq!(config.favicon, "/favicon.svg");
        assert!(config.pagination);
        assert_eq!(config.table_of_contents.min_heading_level, 2);
    }

    #[test]
    fn unknown_key_gets_suggestion() {
        let issues = SiteConfigSchema
            .validate(&raw(json!({ "title": "Docs", "descripton": "x" })))
            .unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0],
            ValidationIssue::UnknownKey { key, suggestion, .. }
                if key == "descripton" && suggestion.as_deref() == Some("description")
        ));
    }

    #[test]
    fn type_errors_are_attributed_to_their_key() {
        let issues = SiteConfigSchema
            .validate(&raw(json!({ "title": "Docs", "pagination": "yes", "social": 3 })))
            .unwrap_err();
        let keys: Vec<&str> = issues
            .iter()
            .filter_map(|issue| match issue {
                ValidationIssue::InvalidType { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(keys, vec!["pagination", "social"]);
    }

    #[test]
    fn missing_title_is_reported() {
        let issues = SiteConfigSchema.validate(&RawConfig::new()).unwrap_err();
        assert_eq!(
            issues,
            vec![ValidationIssue::MissingKey {
                key: "title".to_string()
            }]
        );
    }

    #[test]
    fn issues_accumulate_across_categories() {
        let issues = SiteConfigSchema
            .validate(&raw(json!({ "titl": "Docs", "last_updated": 1 })))
            .unwrap_err();
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn validate_does_not_mutate_candidate() {
        let candidate = raw(json!({ "title": "Docs" }));
        let before = candidate.clone();
        let _ = SiteConfigSchema.validate(&candidate);
        assert_eq!(candidate, before);
    }

    #[test]
    fn split_plugins_removes_reserved_key() {
        let (config, plugins) =
            split_plugins(raw(json!({ "title": "Docs", "plugins": [{ "name": "x" }] })));
        assert!(!config.contains_key(PLUGINS_KEY));
        assert_eq!(plugins, Some(json!([{ "name": "x" }])));

        let (_, none) = split_plugins(raw(json!({ "title": "Docs" })));
        assert!(none.is_none());
    }
}
