//! Git repository wrapper.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use git2::{ErrorCode, Repository as Git2Repo, Sort};
use gitcl_commit::RawCommit;
use tracing::debug;

use crate::{GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Discovers the repository containing the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover(start: impl AsRef<Path>) -> GitResult<Self> {
        let start = start.as_ref();
        let inner =
            Git2Repo::discover(start).map_err(|_| GitError::NotARepo(start.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns every commit reachable from `HEAD`, newest first.
    ///
    /// A repository without commits yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if history cannot be read or a commit carries an
    /// invalid timestamp.
    pub fn commits(&self) -> GitResult<Vec<RawCommit>> {
        if self.inner.is_empty()? {
            debug!("repository has no commits");
            return Ok(Vec::new());
        }

        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.inner.find_commit(oid)?;

            let sha = oid.to_string();
            // Messages in a legacy encoding keep their ASCII annotations.
            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
            let date = commit_date(&sha, commit.time().seconds())?;

            commits.push(RawCommit::new(sha, message, date));
        }

        debug!(count = commits.len(), "read commit history");
        Ok(commits)
    }

    /// Returns the URL of the named remote, or `None` if it is not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote configuration cannot be read.
    pub fn remote_url(&self, name: &str) -> GitResult<Option<String>> {
        match self.inner.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(String::from)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitError::Git2(e)),
        }
    }
}

fn commit_date(sha: &str, seconds: i64) -> GitResult<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| GitError::InvalidTimestamp {
            sha: sha.to_string(),
            seconds,
        })
}
