// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugin catalog.

use colored::Colorize;
use quire_plugin::PluginRegistry;

/// Registry of every plugin compiled into the binary.
pub fn builtin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry.register(
        quire_docsearch::REGISTRY_NAME,
        Box::new(quire_docsearch::DocSearchFactory),
    );
    registry
}

/// Print the built-in plugins, one per line.
pub fn print_plugins() {
    let registry = builtin_registry();
    for entry in registry.list_all() {
        println!("{:<16} {}", entry.name.bold(), entry.factory.description());
    }
}
