//! Comparison URLs for hosted repositories.

use std::sync::LazyLock;

use regex::Regex;

static REMOTE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*://)?(?:[^@/:]+@)?").expect("invalid regex")
});

/// Hosting providers with a known comparison URL layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// `github.com`
    GitHub,
    /// `bitbucket.org`
    Bitbucket,
}

impl HostKind {
    /// Recognizes a host name. Unknown hosts yield `None`.
    #[must_use]
    pub fn from_host(host: &str) -> Option<Self> {
        match host.to_ascii_lowercase().as_str() {
            "github.com" => Some(Self::GitHub),
            "bitbucket.org" => Some(Self::Bitbucket),
            _ => None,
        }
    }
}

/// A remote URL normalized to `https://host/owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryUrl {
    base: String,
    host: String,
}

impl RepositoryUrl {
    /// Normalizes a remote URL such as `git@github.com:org/repo.git` or
    /// `https://bitbucket.org/org/repo`.
    ///
    /// Returns `None` if the remote has no host or no path.
    #[must_use]
    pub fn parse(remote: &str) -> Option<Self> {
        let stripped = REMOTE_PREFIX_RE.replace(remote.trim(), "");
        let stripped = stripped.trim_end_matches('/');
        let stripped = stripped.strip_suffix(".git").unwrap_or(stripped);
        let path = stripped.replace(':', "/");

        let (host, rest) = path.split_once('/')?;
        if host.is_empty() || rest.trim_matches('/').is_empty() {
            return None;
        }

        Some(Self {
            host: host.to_string(),
            base: format!("https://{path}"),
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the host name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the hosting provider, if recognized.
    #[must_use]
    pub fn kind(&self) -> Option<HostKind> {
        HostKind::from_host(&self.host)
    }

    /// Builds the URL comparing `from_sha` (older) with `to_sha` (newer).
    ///
    /// Returns `None` for hosts without a known comparison layout.
    #[must_use]
    pub fn compare(&self, from_sha: &str, to_sha: &str) -> Option<String> {
        match self.kind()? {
            HostKind::GitHub => Some(format!("{}/compare/{from_sha}...{to_sha}", self.base)),
            // Bitbucket separates the pair with a carriage return, newer first.
            HostKind::Bitbucket => Some(format!(
                "{}/branches/compare/{to_sha}%0D{from_sha}",
                self.base
            )),
        }
    }
}

/// Builds a comparison URL straight from a remote URL.
///
/// `from_sha` must be older than `to_sha`. Returns `None` when the remote
/// cannot be normalized or its host is not recognized.
#[must_use]
pub fn compare_url(remote: &str, from_sha: &str, to_sha: &str) -> Option<String> {
    RepositoryUrl::parse(remote)?.compare(from_sha, to_sha)
}
