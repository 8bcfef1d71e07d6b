// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Quire sites.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so typos surface as
//! validation issues instead of being silently ignored. Serde defaults are the
//! schema's normalization step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Every top-level key accepted by [`SiteConfig`].
pub const KNOWN_KEYS: &[&str] = &[
    "title",
    "description",
    "favicon",
    "logo",
    "social",
    "components",
    "custom_css",
    "default_locale",
    "locales",
    "table_of_contents",
    "edit_link",
    "last_updated",
    "pagination",
    "pagefind",
];

/// Validated site configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, shown in the header and page titles.
    pub title: String,

    /// Site description used in page metadata.
    #[serde(default)]
    pub description: Option<String>,

    /// Path to the favicon, relative to the public directory.
    #[serde(default = "default_favicon")]
    pub favicon: String,

    /// Optional logo shown in the header.
    #[serde(default)]
    pub logo: Option<LogoConfig>,

    /// Social links keyed by platform name.
    #[serde(default)]
    pub social: BTreeMap<String, String>,

    /// Component overrides keyed by component name.
    #[serde(default)]
    pub components: BTreeMap<String, String>,

    /// Extra stylesheets appended after the built-in styles.
    #[serde(default)]
    pub custom_css: Vec<String>,

    /// Locale served at the site root.
    #[serde(default)]
    pub default_locale: Option<String>,

    /// Configured locales keyed by URL segment.
    #[serde(default)]
    pub locales: BTreeMap<String, LocaleConfig>,

    /// Table of contents settings.
    #[serde(default)]
    pub table_of_contents: TableOfContentsConfig,

    /// "Edit this page" link settings.
    #[serde(default)]
    pub edit_link: Option<EditLinkConfig>,

    /// Show the last-updated date at the bottom of pages.
    #[serde(default)]
    pub last_updated: bool,

    /// Show previous/next page links.
    #[serde(default = "default_true")]
    pub pagination: bool,

    /// Build a search index after the site is generated.
    #[serde(default = "default_true")]
    pub pagefind: bool,
}

fn default_favicon() -> String {
    "/favicon.svg".to_string()
}

fn default_true() -> bool {
    true
}

/// Header logo configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogoConfig {
    /// Image source path.
    pub src: String,

    /// Alternative text.
    #[serde(default)]
    pub alt: String,

    /// Hide the site title next to the logo.
    #[serde(default)]
    pub replaces_title: bool,
}

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// A single locale.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleConfig {
    /// Label shown in the language picker.
    pub label: String,

    /// BCP-47 language tag. Defaults to the locale key.
    #[serde(default)]
    pub lang: Option<String>,

    /// Writing direction.
    #[serde(default)]
    pub dir: TextDirection,
}

/// Table of contents heading range.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TableOfContentsConfig {
    /// Smallest heading level included.
    #[serde(default = "default_min_heading_level")]
    pub min_heading_level: u8,

    /// Largest heading level included.
    #[serde(default = "default_max_heading_level")]
    pub max_heading_level: u8,
}

impl Default for TableOfContentsConfig {
    fn default() -> Self {
        Self {
            min_heading_level: default_min_heading_level(),
            max_heading_level: default_max_heading_level(),
        }
    }
}

fn default_min_heading_level() -> u8 {
    2
}

fn default_max_heading_level() -> u8 {
    3
}

/// "Edit this page" link configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EditLinkConfig {
    /// Base URL joined with the page's source path.
    pub base_url: String,
}
