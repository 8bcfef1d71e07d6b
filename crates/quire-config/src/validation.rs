// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for site configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as heading-level ranges and locale references.

use crate::diagnostic::ValidationIssue;
use crate::model::SiteConfig;

/// File extensions accepted for the favicon.
const FAVICON_EXTENSIONS: &[&str] = &["ico", "gif", "jpg", "jpeg", "png", "svg"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ValidationIssue>)`
/// with all collected issues (does not fail fast).
pub fn validate_site_config(config: &SiteConfig) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if config.title.trim().is_empty() {
        issues.push(invalid("title must not be empty".to_string()));
    }

    let extension = config
        .favicon
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension {
        Some(ext) if FAVICON_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => issues.push(invalid(format!(
            "favicon `{}` must be one of: {}",
            config.favicon,
            FAVICON_EXTENSIONS.join(", ")
        ))),
    }

    if let Some(logo) = &config.logo
        && logo.src.trim().is_empty()
    {
        issues.push(invalid("logo.src must not be empty".to_string()));
    }

    let toc = &config.table_of_contents;
    for (name, level) in [
        ("min_heading_level", toc.min_heading_level),
        ("max_heading_level", toc.max_heading_level),
    ] {
        if !(1..=6).contains(&level) {
            issues.push(invalid(format!(
                "table_of_contents.{name} must be between 1 and 6, got {level}"
            )));
        }
    }
    if toc.min_heading_level > toc.max_heading_level {
        issues.push(invalid(format!(
            "table_of_contents.min_heading_level ({}) must not exceed max_heading_level ({})",
            toc.min_heading_level, toc.max_heading_level
        )));
    }

    if let Some(default_locale) = &config.default_locale
        && !config.locales.is_empty()
        && !config.locales.contains_key(default_locale)
    {
        issues.push(invalid(format!(
            "default_locale `{default_locale}` does not match any configured locale"
        )));
    }

    for (key, locale) in &config.locales {
        if locale.label.trim().is_empty() {
            issues.push(invalid(format!("locales.{key}.label must not be empty")));
        }
    }

    for (platform, url) in &config.social {
        if url.trim().is_empty() {
            issues.push(invalid(format!("social.{platform} must not be empty")));
        }
    }

    for (component, path) in &config.components {
        if path.trim().is_empty() {
            issues.push(invalid(format!("components.{component} must not be empty")));
        }
    }

    if let Some(edit_link) = &config.edit_link
        && edit_link.base_url.trim().is_empty()
    {
        issues.push(invalid("edit_link.base_url must not be empty".to_string()));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn invalid(message: String) -> ValidationIssue {
    ValidationIssue::Invalid { message }
}
