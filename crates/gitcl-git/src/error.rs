//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// A commit carries a timestamp outside the representable range.
    #[error("commit {sha} has an invalid timestamp: {seconds}")]
    InvalidTimestamp {
        /// The offending commit.
        sha: String,
        /// The raw timestamp, in seconds since the epoch.
        seconds: i64,
    },

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
