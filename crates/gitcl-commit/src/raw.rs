//! Raw commit type as retrieved from Git.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit as retrieved from Git, before annotation parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// The commit hash (SHA).
    pub hash: String,

    /// The full commit message (subject + body).
    pub message: String,

    /// The commit date.
    pub date: DateTime<Utc>,
}

impl RawCommit {
    /// Creates a new raw commit.
    #[must_use]
    pub fn new(hash: impl Into<String>, message: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            date,
        }
    }

    /// Returns the first line of the commit message (the subject).
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the commit body (everything after the subject line), trimmed.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        let (_, rest) = self.message.split_once('\n')?;
        let body = rest.trim();
        if body.is_empty() { None } else { Some(body) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_commit(message: &str) -> RawCommit {
        RawCommit::new("abc123", message, Utc::now())
    }

    #[test]
    fn test_subject() {
        let commit = make_commit("Add new feature\n\nThis is the body");
        assert_eq!(commit.subject(), "Add new feature");
    }

    #[test]
    fn test_subject_empty() {
        let commit = make_commit("");
        assert_eq!(commit.subject(), "");
    }

    #[test]
    fn test_body_none_single_line() {
        let commit = make_commit("single line");
        assert!(commit.body().is_none());
    }

    #[test]
    fn test_body_none_trailing_newlines() {
        let commit = make_commit("subject\n\n\n");
        assert!(commit.body().is_none());
    }

    #[test]
    fn test_body_with_text() {
        let commit = make_commit("subject\n\n[changelog]\nadded: thing\n");
        assert_eq!(commit.body(), Some("[changelog]\nadded: thing"));
    }

    #[test]
    fn test_serialize_deserialize() {
        let commit = make_commit("test message");
        let json = serde_json::to_string(&commit).unwrap();
        let deserialized: RawCommit = serde_json::from_str(&json).unwrap();
        assert_eq!(commit, deserialized);
    }
}
