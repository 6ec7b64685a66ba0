//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Changelog output configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Comparison link configuration.
    #[serde(default)]
    pub links: LinksConfig,
}

/// Changelog output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Treat pre-release markers as release boundaries.
    #[serde(default)]
    pub include_pre_releases: bool,

    /// Print the document preamble before the release sections.
    #[serde(default = "default_true")]
    pub header: bool,

    /// Document title used in the preamble.
    #[serde(default = "default_title")]
    pub title: String,

    /// Append the "Generated by" paragraph to the preamble.
    #[serde(default = "default_true")]
    pub attribution: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            include_pre_releases: false,
            header: true,
            title: default_title(),
            attribution: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Changelog".to_string()
}

/// Comparison link configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Emit link references after the release sections.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Remote whose URL is used to build comparison links.
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            remote: default_remote(),
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}
