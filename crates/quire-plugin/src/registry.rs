// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of compiled-in plugins.
//!
//! The `PluginRegistry` stores `PluginEntry` records keyed by plugin name.
//! Each entry holds a factory that builds a plugin instance from the options
//! declared for it in the user configuration's `plugins` list.

use std::collections::HashMap;
use std::sync::Arc;

use quire_config::diagnostic::suggest_key;
use quire_config::ValidationIssue;
use quire_core::QuireError;
use serde_json::{Map, Value};

use crate::error::PluginError;
use crate::plugin::Plugin;

/// Keys accepted in a single `plugins` entry.
const ENTRY_KEYS: &[&str] = &["name", "options"];

/// Factory trait for creating plugin instances from declared options.
pub trait PluginFactory: Send + Sync {
    /// One-line description shown by `quire plugins`.
    fn description(&self) -> &str;

    /// Create a plugin instance from its declared options table.
    fn create(&self, options: &Map<String, Value>) -> Result<Arc<dyn Plugin>, QuireError>;
}

/// A single entry in the plugin registry.
pub struct PluginEntry {
    /// Name the plugin is declared under.
    pub name: String,
    /// Factory building the plugin from its options.
    pub factory: Box<dyn PluginFactory>,
}

impl std::fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("name", &self.name)
            .field("description", &self.factory.description())
            .finish()
    }
}

/// Registry of compiled-in plugins.
///
/// Supports registration, lookup, sorted listing, and turning the `plugins`
/// declarations of a user configuration into plugin instances.
#[derive(Debug)]
pub struct PluginRegistry {
    entries: HashMap<String, PluginEntry>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a plugin factory under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, factory: Box<dyn PluginFactory>) {
        let name = name.into();
        self.entries.insert(name.clone(), PluginEntry { name, factory });
    }

    /// Get a plugin entry by name.
    pub fn get(&self, name: &str) -> Option<&PluginEntry> {
        self.entries.get(name)
    }

    /// List all plugin entries, sorted by name.
    pub fn list_all(&self) -> Vec<&PluginEntry> {
        let mut entries: Vec<&PluginEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build plugin instances from a user configuration's `plugins` value.
    ///
    /// `declared` must be absent, `null`, or an array of tables of the form
    /// `{ name = "...", options = { ... } }`. Every problem is collected and
    /// reported together; on success the instances keep declaration order.
    pub fn instantiate(
        &self,
        declared: Option<&Value>,
    ) -> Result<Vec<Arc<dyn Plugin>>, PluginError> {
        let items = match declared {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(PluginError::InvalidPluginList {
                    issues: vec![ValidationIssue::InvalidType {
                        key: "plugins".to_string(),
                        detail: format!("expected an array of tables, found {}", kind(other)),
                    }],
                });
            }
        };

        let mut issues = Vec::new();
        let mut plugins = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            match self.instantiate_entry(i, item) {
                Ok(plugin) => plugins.push(plugin),
                Err(mut entry_issues) => issues.append(&mut entry_issues),
            }
        }

        if issues.is_empty() {
            Ok(plugins)
        } else {
            Err(PluginError::InvalidPluginList { issues })
        }
    }

    fn instantiate_entry(
        &self,
        index: usize,
        item: &Value,
    ) -> Result<Arc<dyn Plugin>, Vec<ValidationIssue>> {
        let Some(table) = item.as_object() else {
            return Err(vec![ValidationIssue::InvalidType {
                key: format!("plugins[{index}]"),
                detail: format!("expected a table, found {}", kind(item)),
            }]);
        };

        let mut issues = Vec::new();

        for key in table.keys().filter(|k| !ENTRY_KEYS.contains(&k.as_str())) {
            issues.push(ValidationIssue::UnknownKey {
                key: format!("plugins[{index}].{key}"),
                suggestion: suggest_key(key, ENTRY_KEYS),
                valid_keys: ENTRY_KEYS.join(", "),
            });
        }

        let name = match table.get("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => Some(name.as_str()),
            Some(_) => {
                issues.push(ValidationIssue::Invalid {
                    message: format!("plugins[{index}].name must be a non-empty string"),
                });
                None
            }
            None => {
                issues.push(ValidationIssue::MissingKey {
                    key: format!("plugins[{index}].name"),
                });
                None
            }
        };

        let empty = Map::new();
        let options = match table.get("options") {
            None => Some(&empty),
            Some(Value::Object(options)) => Some(options),
            Some(other) => {
                issues.push(ValidationIssue::InvalidType {
                    key: format!("plugins[{index}].options"),
                    detail: format!("expected a table, found {}", kind(other)),
                });
                None
            }
        };

        let entry = name.and_then(|name| {
            let entry = self.entries.get(name);
            if entry.is_none() {
                issues.push(ValidationIssue::Invalid {
                    message: self.unknown_plugin_message(index, name),
                });
            }
            entry
        });

        match (entry, options) {
            (Some(entry), Some(options)) if issues.is_empty() => {
                entry.factory.create(options).map_err(|err| {
                    vec![ValidationIssue::Invalid {
                        message: format!("plugins[{index}] (`{}`): {err}", entry.name),
                    }]
                })
            }
            _ => Err(issues),
        }
    }

    fn unknown_plugin_message(&self, index: usize, name: &str) -> String {
        let mut known: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        known.sort_unstable();
        match suggest_key(name, &known) {
            Some(suggestion) => {
                format!("plugins[{index}]: unknown plugin `{name}`, did you mean `{suggestion}`?")
            }
            None => format!(
                "plugins[{index}]: unknown plugin `{name}`, available plugins: {}",
                known.join(", ")
            ),
        }
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable JSON type name for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PluginContext;
    use async_trait::async_trait;
    use serde_json::json;

    struct Noop(String);

    #[async_trait]
    impl Plugin for Noop {
        fn name(&self) -> &str {
            &self.0
        }

        async fn setup(&self, _ctx: &mut PluginContext<'_>) -> Result<(), QuireError> {
            Ok(())
        }
    }

    /// Builds a `Noop` named after the `label` option, or the entry name.
    struct NoopFactory(&'static str);

    impl PluginFactory for NoopFactory {
        fn description(&self) -> &str {
            "does nothing"
        }

        fn create(&self, options: &Map<String, Value>) -> Result<Arc<dyn Plugin>, QuireError> {
            match options.get("label") {
                None => Ok(Arc::new(Noop(self.0.to_string()))),
                Some(Value::String(label)) => Ok(Arc::new(Noop(label.clone()))),
                Some(_) => Err(QuireError::Config("`label` must be a string".into())),
            }
        }
    }

    fn registry() -> PluginRegistry {
        let mut registry = PluginRegistry::new();
        registry.register("sitemap", Box::new(NoopFactory("sitemap")));
        registry.register("docsearch", Box::new(NoopFactory("docsearch")));
        registry
    }

    #[test]
    fn register_and_get_roundtrip() {
        let registry = registry();
        assert_eq!(registry.get("sitemap").unwrap().name, "sitemap");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn list_all_returns_sorted() {
        let registry = registry();
        let names: Vec<&str> = registry.list_all().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["docsearch", "sitemap"]);
    }

    #[test]
    fn len_and_is_empty() {
        let mut registry = PluginRegistry::new();
        assert!(registry.is_empty());
        registry.register("x", Box::new(NoopFactory("x")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn absent_declarations_yield_no_plugins() {
        assert!(registry().instantiate(None).unwrap().is_empty());
        assert!(registry().instantiate(Some(&Value::Null)).unwrap().is_empty());
    }

    #[test]
    fn declarations_keep_order_and_pass_options() {
        let declared = json!([
            { "name": "sitemap" },
            { "name": "docsearch", "options": { "label": "search" } },
            { "name": "sitemap" },
        ]);
        let plugins = registry().instantiate(Some(&declared)).unwrap();
        let names: Vec<&str> = plugins.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["sitemap", "search", "sitemap"]);
    }

    #[test]
    fn non_array_declaration_is_rejected() {
        let err = registry()
            .instantiate(Some(&json!({ "name": "sitemap" })))
            .err()
            .unwrap();
        assert!(err.to_string().contains("expected an array of tables, found a table"));
    }

    #[test]
    fn all_entry_problems_are_collected() {
        let declared = json!([
            "sitemap",
            { "options": {} },
            { "name": "sitemapp" },
            { "name": "docsearch", "option": {} },
            { "name": "docsearch", "options": 3 },
            { "name": "docsearch", "options": { "label": 1 } },
        ]);
        let err = registry().instantiate(Some(&declared)).err().unwrap();
        let messages: Vec<String> = err.issues().iter().map(ToString::to_string).collect();
        assert_eq!(messages.len(), 6, "got: {messages:#?}");
        assert!(messages[0].contains("plugins[0]"));
        assert_eq!(messages[1], "missing required key `plugins[1].name`");
        assert!(messages[2].contains("did you mean `sitemap`?"));
        assert_eq!(messages[3], "unknown configuration key `plugins[3].option`");
        assert!(messages[4].contains("plugins[4].options"));
        assert!(messages[5].contains("`label` must be a string"));
    }
}
