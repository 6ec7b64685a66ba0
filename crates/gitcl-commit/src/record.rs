//! Commit record after annotation parsing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ChangelogEntry, RawCommit, ReleaseMarker, parse_annotations};

/// A commit together with the changelog data declared in its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogCommit {
    /// The full commit hash (SHA).
    pub sha: String,

    /// The one-line summary.
    pub summary: String,

    /// The commit date.
    pub date: DateTime<Utc>,

    /// Changelog entries in declaration order.
    pub entries: Vec<ChangelogEntry>,

    /// The release marker, if this commit marks a release.
    pub release: Option<ReleaseMarker>,
}

impl ChangelogCommit {
    /// Creates a new builder.
    #[must_use]
    pub fn builder(sha: impl Into<String>) -> ChangelogCommitBuilder {
        ChangelogCommitBuilder::new(sha)
    }

    /// Builds a record from a raw commit by parsing the annotations in its body.
    #[must_use]
    pub fn from_raw(raw: &RawCommit) -> Self {
        let annotations = parse_annotations(raw.body().unwrap_or_default());
        Self {
            sha: raw.hash.clone(),
            summary: raw.subject().to_string(),
            date: raw.date,
            entries: annotations.entries,
            release: annotations.release,
        }
    }

    /// Returns the release marker that counts as a boundary.
    ///
    /// Pre-release markers are treated as absent unless `include_pre_releases` is set.
    #[must_use]
    pub fn release(&self, include_pre_releases: bool) -> Option<&ReleaseMarker> {
        self.release
            .as_ref()
            .filter(|marker| include_pre_releases || !marker.pre_release)
    }

    /// Returns true if the commit declares any entry or release marker.
    #[must_use]
    pub fn has_changelog_data(&self) -> bool {
        !self.entries.is_empty() || self.release.is_some()
    }

    /// Returns the short hash (first 6 characters) used in commit listings.
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..6.min(self.sha.len())]
    }
}

/// Builder for [`ChangelogCommit`].
#[derive(Debug)]
pub struct ChangelogCommitBuilder {
    sha: String,
    summary: String,
    date: DateTime<Utc>,
    entries: Vec<ChangelogEntry>,
    release: Option<ReleaseMarker>,
}

impl ChangelogCommitBuilder {
    fn new(sha: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            summary: String::new(),
            date: Utc::now(),
            entries: Vec::new(),
            release: None,
        }
    }

    /// Sets the summary.
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Sets the date.
    #[must_use]
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Appends a changelog entry.
    #[must_use]
    pub fn entry(mut self, category: impl Into<String>, message: impl Into<String>) -> Self {
        self.entries.push(ChangelogEntry::new(category, message));
        self
    }

    /// Marks the commit as a stable release.
    #[must_use]
    pub fn release(mut self, id: impl Into<String>) -> Self {
        self.release = Some(ReleaseMarker::release(id));
        self
    }

    /// Marks the commit as a pre-release.
    #[must_use]
    pub fn pre_release(mut self, id: impl Into<String>) -> Self {
        self.release = Some(ReleaseMarker::pre_release(id));
        self
    }

    /// Builds the [`ChangelogCommit`].
    #[must_use]
    pub fn build(self) -> ChangelogCommit {
        ChangelogCommit {
            sha: self.sha,
            summary: self.summary,
            date: self.date,
            entries: self.entries,
            release: self.release,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let commit = ChangelogCommit::builder("abc1234567")
            .summary("Ship widgets")
            .entry("added", "widgets")
            .entry("fixed", "crash on start")
            .release("1.2.0")
            .build();

        assert_eq!(commit.sha, "abc1234567");
        assert_eq!(commit.summary, "Ship widgets");
        assert_eq!(commit.entries.len(), 2);
        assert_eq!(commit.entries[1], ChangelogEntry::new("fixed", "crash on start"));
        assert_eq!(commit.release, Some(ReleaseMarker::release("1.2.0")));
    }

    #[test]
    fn test_from_raw() {
        let raw = RawCommit::new(
            "0123456789abcdef",
            "Release 2.0\n\n[changelog]\nrelease: v2.0.0\nadded: dark mode\n",
            Utc::now(),
        );

        let commit = ChangelogCommit::from_raw(&raw);
        assert_eq!(commit.sha, "0123456789abcdef");
        assert_eq!(commit.summary, "Release 2.0");
        assert_eq!(commit.date, raw.date);
        assert_eq!(commit.entries, vec![ChangelogEntry::new("added", "dark mode")]);
        assert_eq!(commit.release, Some(ReleaseMarker::release("v2.0.0")));
    }

    #[test]
    fn test_from_raw_ignores_subject_line() {
        let raw = RawCommit::new("abc", "[changelog]\nadded: not a block\n", Utc::now());

        let commit = ChangelogCommit::from_raw(&raw);
        assert_eq!(commit.summary, "[changelog]");
        assert!(!commit.has_changelog_data());
    }

    #[test]
    fn test_from_raw_subject_only() {
        let raw = RawCommit::new("abc", "Tweak", Utc::now());
        assert!(!ChangelogCommit::from_raw(&raw).has_changelog_data());
    }

    #[test]
    fn test_release_filters_pre_release() {
        let commit = ChangelogCommit::builder("abc").pre_release("1.0.0-beta").build();
        assert!(commit.release(false).is_none());
        assert_eq!(commit.release(true).map(|m| m.id.as_str()), Some("1.0.0-beta"));
    }

    #[test]
    fn test_release_keeps_stable() {
        let commit = ChangelogCommit::builder("abc").release("1.0.0").build();
        assert!(commit.release(false).is_some());
        assert!(commit.release(true).is_some());
    }

    #[test]
    fn test_has_changelog_data() {
        assert!(!ChangelogCommit::builder("abc").build().has_changelog_data());
        assert!(
            ChangelogCommit::builder("abc")
                .entry("added", "x")
                .build()
                .has_changelog_data()
        );
        assert!(
            ChangelogCommit::builder("abc")
                .release("1.0.0")
                .build()
                .has_changelog_data()
        );
    }

    #[test]
    fn test_short_sha() {
        let commit = ChangelogCommit::builder("abcdef123456").build();
        assert_eq!(commit.short_sha(), "abcdef");
    }
}
