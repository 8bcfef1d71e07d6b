// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared between plugins, the runner and the host.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A unit of host-framework behavior a plugin asks the host to install.
///
/// The plugin runner only collects and orders integrations. `hooks` is opaque
/// data keyed by host hook name; only the host interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    /// Integration name, used by the host for display and lookup.
    pub name: String,
    /// Hook payloads keyed by host hook name.
    #[serde(default)]
    pub hooks: Map<String, Value>,
}

impl Integration {
    /// Create an integration with no hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hooks: Map::new(),
        }
    }

    /// Attach a hook payload, replacing any previous payload for `hook`.
    pub fn with_hook(mut self, hook: impl Into<String>, payload: Value) -> Self {
        self.hooks.insert(hook.into(), payload);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hooks_default_to_empty_when_deserialized() {
        let integration: Integration =
            serde_json::from_str(r#"{ "name": "sitemap" }"#).expect("should deserialize");
        assert_eq!(integration.name, "sitemap");
        assert!(integration.hooks.is_empty());
    }

    #[test]
    fn with_hook_replaces_existing_payload() {
        let integration = Integration::new("search")
            .with_hook("config:setup", serde_json::json!({ "a": 1 }))
            .with_hook("config:setup", serde_json::json!({ "b": 2 }));
        assert_eq!(integration.hooks.len(), 1);
        assert_eq!(integration.hooks["config:setup"], serde_json::json!({ "b": 2 }));
    }
}
