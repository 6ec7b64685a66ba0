//! Commit types for git-cl.
//!
//! This crate provides the commit types used throughout git-cl:
//! - [`RawCommit`]: A commit as retrieved from Git
//! - [`ChangelogCommit`]: A commit after its `[changelog]` annotations are parsed
//! - [`ChangelogEntry`] and [`ReleaseMarker`]: The annotations themselves

mod annotations;
mod entry;
mod raw;
mod record;

pub use annotations::{Annotations, parse_annotations};
pub use entry::{ChangelogEntry, ReleaseMarker};
pub use raw::RawCommit;
pub use record::{ChangelogCommit, ChangelogCommitBuilder};
