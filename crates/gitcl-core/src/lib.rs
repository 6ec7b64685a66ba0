//! Core library for git-cl.
//!
//! This crate turns annotated commits into a changelog:
//! - [`segment()`]: splits history into release buckets and their SHA ranges
//! - [`markdown`]: renders buckets as Markdown sections
//! - [`compare`]: builds comparison URLs for GitHub and Bitbucket remotes
//! - [`ChangelogGenerator`]: ties a [`CommitSource`] to the above

pub mod compare;
mod entries;
mod error;
mod generator;
mod links;
pub mod markdown;
mod segment;

pub use compare::{HostKind, RepositoryUrl, compare_url};
pub use entries::CategorizedEntries;
pub use error::{CoreError, CoreResult};
pub use generator::{ChangelogGenerator, CommitSource, GeneratorOptions};
pub use links::{HEAD, LinkRange, LinkRanges};
pub use markdown::MarkdownOptions;
pub use segment::{BucketLabel, ReleaseBucket, Segmentation, Segmenter, UNRELEASED, segment};
