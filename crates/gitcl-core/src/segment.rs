//! Release segmentation.
//!
//! Walks commits newest first and splits them into release buckets. A commit
//! carrying a release marker closes the bucket accumulated so far and opens
//! the bucket for its own release, which then collects the marker commit's
//! entries and those of every older commit up to the next marker.

use std::fmt;

use chrono::{DateTime, Utc};
use gitcl_commit::ChangelogCommit;
use tracing::debug;

use crate::{CategorizedEntries, HEAD, LinkRange, LinkRanges};

/// Label of the bucket holding commits newer than any release.
pub const UNRELEASED: &str = "Unreleased";

/// Identifies a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketLabel {
    /// Commits newer than the most recent release.
    Unreleased,

    /// A tagged release.
    Release(String),
}

impl BucketLabel {
    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unreleased => UNRELEASED,
            Self::Release(id) => id,
        }
    }
}

impl fmt::Display for BucketLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The entries and metadata belonging to one release, or to the unreleased head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBucket {
    /// Bucket label.
    pub label: BucketLabel,

    /// Date of the release commit; `None` for Unreleased.
    pub date: Option<DateTime<Utc>>,

    /// Entries accumulated for this bucket.
    pub entries: CategorizedEntries,

    /// SHA range bounding the bucket.
    pub range: LinkRange,
}

impl ReleaseBucket {
    /// Returns true for the Unreleased bucket.
    #[must_use]
    pub fn is_unreleased(&self) -> bool {
        self.label == BucketLabel::Unreleased
    }
}

/// Output of a segmentation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Buckets in emission order, newest first.
    pub buckets: Vec<ReleaseBucket>,

    /// Link ranges in the same order as `buckets`.
    pub links: LinkRanges,
}

impl Segmentation {
    /// Returns the Unreleased bucket, if one was emitted.
    #[must_use]
    pub fn unreleased(&self) -> Option<&ReleaseBucket> {
        self.buckets.first().filter(|bucket| bucket.is_unreleased())
    }

    /// Iterates released buckets, newest first.
    pub fn releases(&self) -> impl Iterator<Item = &ReleaseBucket> {
        self.buckets.iter().filter(|bucket| !bucket.is_unreleased())
    }

    /// Returns the newest released bucket.
    #[must_use]
    pub fn latest_release(&self) -> Option<&ReleaseBucket> {
        self.releases().next()
    }
}

/// Whether a release is waiting to be closed.
#[derive(Debug)]
enum State {
    NoPendingRelease,
    PendingRelease {
        id: String,
        date: DateTime<Utc>,
        sha: String,
    },
}

/// Single-pass segmentation state machine.
///
/// Feed commits newest first with [`Segmenter::push`], then call
/// [`Segmenter::finish`].
#[derive(Debug)]
pub struct Segmenter {
    include_pre_releases: bool,
    state: State,
    current: CategorizedEntries,
    last_sha: Option<String>,
    output: Segmentation,
}

impl Segmenter {
    /// Creates a segmenter. Pre-release markers only close buckets when
    /// `include_pre_releases` is set.
    #[must_use]
    pub fn new(include_pre_releases: bool) -> Self {
        Self {
            include_pre_releases,
            state: State::NoPendingRelease,
            current: CategorizedEntries::new(),
            last_sha: None,
            output: Segmentation::default(),
        }
    }

    /// Processes the next (older) commit.
    pub fn push(&mut self, commit: &ChangelogCommit) {
        if let Some(marker) = commit.release(self.include_pre_releases) {
            self.close(&commit.sha);
            self.state = State::PendingRelease {
                id: marker.id.clone(),
                date: commit.date,
                sha: commit.sha.clone(),
            };
        }

        for entry in &commit.entries {
            self.current
                .upsert_append(entry.category.as_str(), entry.message.as_str());
        }
        self.last_sha = Some(commit.sha.clone());
    }

    /// Closes the final bucket and returns the result.
    ///
    /// Returns an empty segmentation if no commit was pushed.
    #[must_use]
    pub fn finish(mut self) -> Segmentation {
        if let Some(last_sha) = self.last_sha.take() {
            self.close(&last_sha);
        }
        self.output
    }

    /// Emits the open bucket, bounded on its older end by `to_sha`.
    fn close(&mut self, to_sha: &str) {
        let pending = std::mem::replace(&mut self.state, State::NoPendingRelease);
        let (label, date, from_sha) = match pending {
            State::NoPendingRelease => (BucketLabel::Unreleased, None, HEAD.to_string()),
            State::PendingRelease { id, date, sha } => (BucketLabel::Release(id), Some(date), sha),
        };

        let range = LinkRange::new(label.as_str(), from_sha, to_sha);
        let entries = self.current.take();
        debug!(
            bucket = %label,
            entries = entries.len(),
            from = %range.from_sha,
            to = %range.to_sha,
            "closed release bucket"
        );

        self.output.links.track(range.clone());
        self.output.buckets.push(ReleaseBucket {
            label,
            date,
            entries,
            range,
        });
    }
}

/// Segments commits (newest first) into release buckets.
#[must_use]
pub fn segment(commits: &[ChangelogCommit], include_pre_releases: bool) -> Segmentation {
    let mut segmenter = Segmenter::new(include_pre_releases);
    for commit in commits {
        segmenter.push(commit);
    }
    segmenter.finish()
}
