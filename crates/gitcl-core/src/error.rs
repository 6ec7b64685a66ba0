//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] gitcl_git::GitError),

    /// The remote used for comparison links is not configured.
    #[error("remote '{0}' is not configured; add it or disable links")]
    RemoteNotConfigured(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_not_configured_display() {
        let err = CoreError::RemoteNotConfigured("origin".to_string());
        assert_eq!(
            err.to_string(),
            "remote 'origin' is not configured; add it or disable links"
        );
    }

    #[test]
    fn test_from_git_error() {
        let err: CoreError = gitcl_git::GitError::NotARepo("/tmp/x".into()).into();
        assert_eq!(err.to_string(), "git error: not a git repository: /tmp/x");
    }
}
