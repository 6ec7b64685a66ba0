//! Parsing of `[changelog]` annotation blocks in commit messages.
//!
//! A block starts at a `[changelog]` line and runs until the next blank line:
//!
//! ```text
//! Add export command
//!
//! [changelog]
//! added: CSV export
//! fixed: crash when the output directory is missing
//! release: v1.4.0
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::{ChangelogEntry, ReleaseMarker};

/// Line that opens an annotation block.
const CHANGELOG_SECTION: &str = "[changelog]";

static ANNOTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<key>[A-Za-z][\w-]*)\s*:\s*(?P<value>.*\S)\s*$").expect("invalid regex")
});

/// The changelog data declared in one commit message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    /// Entries in declaration order.
    pub entries: Vec<ChangelogEntry>,

    /// The release marker. The last one declared wins.
    pub release: Option<ReleaseMarker>,
}

/// Extracts the changelog entries and release marker from a commit message.
#[must_use]
pub fn parse_annotations(message: &str) -> Annotations {
    let mut annotations = Annotations::default();
    let mut in_section = false;

    for line in message.lines() {
        let line = line.trim();

        if line.eq_ignore_ascii_case(CHANGELOG_SECTION) {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if line.is_empty() {
            in_section = false;
            continue;
        }

        let Some(captures) = ANNOTATION_RE.captures(line) else {
            debug!(line, "skipping malformed changelog annotation");
            continue;
        };
        let key = &captures["key"];
        let value = captures["value"].to_string();

        if key.eq_ignore_ascii_case("release") {
            annotations.release = Some(ReleaseMarker::release(value));
        } else if key.eq_ignore_ascii_case("pre-release") || key.eq_ignore_ascii_case("prerelease")
        {
            annotations.release = Some(ReleaseMarker::pre_release(value));
        } else {
            annotations.entries.push(ChangelogEntry::new(key, value));
        }
    }

    annotations
}
