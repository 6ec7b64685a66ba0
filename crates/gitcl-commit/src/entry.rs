//! Changelog annotations carried by a commit.

use serde::{Deserialize, Serialize};

/// A single categorized description of a user-facing change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// The category label (e.g. "added", "fixed"). Compared case-sensitively.
    pub category: String,

    /// Free-text description of the change.
    pub message: String,
}

impl ChangelogEntry {
    /// Creates a new changelog entry.
    #[must_use]
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }
}

/// Marks a commit as a release boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMarker {
    /// The release label, usually a semantic version.
    pub id: String,

    /// Whether this is a pre-release.
    pub pre_release: bool,
}

impl ReleaseMarker {
    /// Creates a stable release marker.
    #[must_use]
    pub fn release(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pre_release: false,
        }
    }

    /// Creates a pre-release marker.
    #[must_use]
    pub fn pre_release(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pre_release: true,
        }
    }
}
