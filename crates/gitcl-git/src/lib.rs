//! Git access layer for git-cl.
//!
//! This crate provides the Git operations the changelog needs:
//! - Repository discovery
//! - Commit history retrieval (newest first)
//! - Remote URL lookup

mod error;
mod repository;

pub use error::{GitError, GitResult};
pub use repository::Repository;
