//! Changelog generation from a commit source.

use gitcl_commit::ChangelogCommit;
use gitcl_config::Config;
use gitcl_git::Repository;
use tracing::{debug, info, warn};

use crate::markdown::{self, MarkdownOptions};
use crate::{CoreError, CoreResult, RepositoryUrl, Segmentation, segment};

const PLAIN: MarkdownOptions = MarkdownOptions { link_refs: false };

/// Supplies annotated commits and the remote URL used for links.
pub trait CommitSource {
    /// Returns every commit, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if history cannot be read.
    fn commits(&self) -> CoreResult<Vec<ChangelogCommit>>;

    /// Returns the URL of the named remote, or `None` if it is not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote configuration cannot be read.
    fn remote_url(&self, name: &str) -> CoreResult<Option<String>>;
}

impl CommitSource for Repository {
    fn commits(&self) -> CoreResult<Vec<ChangelogCommit>> {
        let raw = Repository::commits(self)?;
        Ok(raw.iter().map(ChangelogCommit::from_raw).collect())
    }

    fn remote_url(&self, name: &str) -> CoreResult<Option<String>> {
        Ok(Repository::remote_url(self, name)?)
    }
}

/// Options for [`ChangelogGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Treat pre-release markers as release boundaries.
    pub include_pre_releases: bool,

    /// Title of the document preamble; `None` omits the preamble.
    pub title: Option<String>,

    /// Close the preamble with the "Generated by" paragraph.
    pub attribution: bool,

    /// Remote used for comparison links; `None` disables links.
    pub link_remote: Option<String>,
}

impl From<&Config> for GeneratorOptions {
    fn from(config: &Config) -> Self {
        Self {
            include_pre_releases: config.changelog.include_pre_releases,
            title: config
                .changelog
                .header
                .then(|| config.changelog.title.clone()),
            attribution: config.changelog.attribution,
            link_remote: config.links.enabled.then(|| config.links.remote.clone()),
        }
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Produces changelog documents from a [`CommitSource`].
pub struct ChangelogGenerator<'a> {
    source: &'a dyn CommitSource,
    options: GeneratorOptions,
}

impl<'a> ChangelogGenerator<'a> {
    /// Creates a generator.
    #[must_use]
    pub fn new(source: &'a dyn CommitSource, options: GeneratorOptions) -> Self {
        Self { source, options }
    }

    /// Reads history and segments it into release buckets.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot supply commits.
    pub fn segmentation(&self) -> CoreResult<Segmentation> {
        let commits = self.source.commits()?;
        debug!(
            count = commits.len(),
            include_pre_releases = self.options.include_pre_releases,
            "segmenting history"
        );
        Ok(segment(&commits, self.options.include_pre_releases))
    }

    /// Renders the whole changelog: preamble, every bucket and the link references.
    ///
    /// Nothing is rendered until every input has been read, so a failing
    /// source never yields partial output.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails, or if links are enabled and the
    /// configured remote does not exist.
    pub fn full(&self) -> CoreResult<String> {
        let segmentation = self.segmentation()?;
        let links = if segmentation.buckets.is_empty() {
            Vec::new()
        } else {
            self.link_lines(&segmentation)?
        };
        let options = MarkdownOptions {
            link_refs: !links.is_empty(),
        };

        let mut output = String::new();
        if let Some(title) = &self.options.title {
            output.push_str(&markdown::render_preamble(title, self.options.attribution));
        }
        for bucket in &segmentation.buckets {
            output.push_str(&markdown::render_bucket(bucket, options));
            output.push('\n');
        }
        for line in &links {
            output.push_str(line);
            output.push('\n');
        }

        info!(
            buckets = segmentation.buckets.len(),
            links = links.len(),
            "generated changelog"
        );
        Ok(output)
    }

    /// Renders only the Unreleased bucket. Empty when history is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot supply commits.
    pub fn unreleased(&self) -> CoreResult<String> {
        let segmentation = self.segmentation()?;
        Ok(segmentation
            .unreleased()
            .map(|bucket| markdown::render_bucket(bucket, PLAIN))
            .unwrap_or_default())
    }

    /// Renders only the newest release. Empty when nothing was released.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot supply commits.
    pub fn latest(&self) -> CoreResult<String> {
        let segmentation = self.segmentation()?;
        Ok(segmentation
            .latest_release()
            .map(|bucket| markdown::render_bucket(bucket, PLAIN))
            .unwrap_or_default())
    }

    /// Renders every release, newest first, without the Unreleased bucket.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot supply commits.
    pub fn released(&self) -> CoreResult<String> {
        let segmentation = self.segmentation()?;
        Ok(segmentation
            .releases()
            .map(|bucket| markdown::render_bucket(bucket, PLAIN))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Lists commits carrying changelog data as `<sha[..6]> <summary>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot supply commits.
    pub fn commit_summaries(&self) -> CoreResult<Vec<String>> {
        Ok(self
            .source
            .commits()?
            .iter()
            .filter(|commit| commit.has_changelog_data())
            .map(|commit| format!("{} {}", commit.short_sha(), commit.summary))
            .collect())
    }

    /// Builds one link reference line per tracked range.
    ///
    /// Yields no lines when links are disabled or the remote host has no known
    /// comparison layout.
    fn link_lines(&self, segmentation: &Segmentation) -> CoreResult<Vec<String>> {
        let Some(remote) = &self.options.link_remote else {
            return Ok(Vec::new());
        };
        let url = self
            .source
            .remote_url(remote)?
            .ok_or_else(|| CoreError::RemoteNotConfigured(remote.clone()))?;

        let Some(repository) = RepositoryUrl::parse(&url) else {
            warn!(%url, "cannot parse remote URL, omitting comparison links");
            return Ok(Vec::new());
        };
        if repository.kind().is_none() {
            warn!(host = repository.host(), "unsupported host, omitting comparison links");
            return Ok(Vec::new());
        }

        Ok(segmentation
            .links
            .iter()
            .filter_map(|range| {
                let (older, newer) = range.compare_pair();
                repository
                    .compare(older, newer)
                    .map(|compare| markdown::render_link(&range.label, &compare))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    struct MockSource {
        commits: Vec<ChangelogCommit>,
        remote: Option<String>,
    }

    impl CommitSource for MockSource {
        fn commits(&self) -> CoreResult<Vec<ChangelogCommit>> {
            Ok(self.commits.clone())
        }

        fn remote_url(&self, _name: &str) -> CoreResult<Option<String>> {
            Ok(self.remote.clone())
        }
    }

    struct FailingSource;

    impl CommitSource for FailingSource {
        fn commits(&self) -> CoreResult<Vec<ChangelogCommit>> {
            Err(gitcl_git::GitError::NotARepo("/nowhere".into()).into())
        }

        fn remote_url(&self, _name: &str) -> CoreResult<Option<String>> {
            Ok(None)
        }
    }

    fn history() -> Vec<ChangelogCommit> {
        vec![
            ChangelogCommit::builder("3333333333")
                .summary("Fix bug A")
                .entry("fixed", "bug A")
                .build(),
            ChangelogCommit::builder("2222222222")
                .summary("Release 1.0.0")
                .date(Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap())
                .release("v1.0.0")
                .build(),
            ChangelogCommit::builder("0000000000")
                .summary("Housekeeping")
                .build(),
            ChangelogCommit::builder("1111111111")
                .summary("Add feature B")
                .entry("added", "feature B")
                .build(),
        ]
    }

    fn source(remote: Option<&str>) -> MockSource {
        MockSource {
            commits: history(),
            remote: remote.map(String::from),
        }
    }

    #[test]
    fn test_options_from_config() {
        let mut config = Config::default();
        config.changelog.header = false;
        config.links.remote = "upstream".to_string();

        let options = GeneratorOptions::from(&config);
        assert!(!options.include_pre_releases);
        assert!(options.title.is_none());
        assert!(options.attribution);
        assert_eq!(options.link_remote.as_deref(), Some("upstream"));

        config.links.enabled = false;
        config.changelog.attribution = false;
        let options = GeneratorOptions::from(&config);
        assert!(options.link_remote.is_none());
        assert!(!options.attribution);
    }

    #[test]
    fn test_full_github() {
        let source = source(Some("git@github.com:org/repo.git"));
        let generator = ChangelogGenerator::new(&source, GeneratorOptions::default());

        let output = generator.full().unwrap();
        insta::assert_snapshot!(output.trim_end(), @r"
        # Changelog

        All notable changes to this project will be documented in this file.

        The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/).

        Generated by [Git Changelog](https://github.com/uptech/git-cl), an open source project brought to you by [UpTech Works, LLC](https://upte.ch). A consultancy that partners with companies to help **build**, **launch**, and **refine** their products.

        ## [Unreleased] - now

        ### Fixed
        - bug A

        ## [v1.0.0] - 2024-03-05

        ### Added
        - feature B

        [Unreleased]: https://github.com/org/repo/compare/2222222...HEAD
        [v1.0.0]: https://github.com/org/repo/compare/1111111...2222222
        ");
    }

    #[test]
    fn test_full_without_attribution() {
        let source = source(Some("git@github.com:org/repo.git"));
        let options = GeneratorOptions {
            attribution: false,
            ..GeneratorOptions::default()
        };
        let generator = ChangelogGenerator::new(&source, options);

        let output = generator.full().unwrap();
        assert!(!output.contains("Generated by"));
        assert!(output.contains(
            "[Keep a Changelog](https://keepachangelog.com/en/1.0.0/).\n\n## [Unreleased] - now\n"
        ));
    }

    #[test]
    fn test_full_bitbucket_links() {
        let source = source(Some("git@bitbucket.org:org/repo.git"));
        let generator = ChangelogGenerator::new(&source, GeneratorOptions::default());

        let output = generator.full().unwrap();
        assert!(output.contains(
            "[v1.0.0]: https://bitbucket.org/org/repo/branches/compare/2222222%0D1111111"
        ));
    }

    #[test]
    fn test_full_unknown_host_omits_links() {
        let source = source(Some("git@gitlab.com:org/repo.git"));
        let generator = ChangelogGenerator::new(&source, GeneratorOptions::default());

        let output = generator.full().unwrap();
        assert!(output.contains("## Unreleased - now"));
        assert!(output.contains("## v1.0.0 - 2024-03-05"));
        assert!(!output.contains("]: "));
    }

    #[test]
    fn test_full_missing_remote_is_fatal() {
        let source = source(None);
        let generator = ChangelogGenerator::new(&source, GeneratorOptions::default());

        let result = generator.full();
        assert!(matches!(result, Err(CoreError::RemoteNotConfigured(name)) if name == "origin"));
    }

    #[test]
    fn test_full_links_disabled_skips_remote() {
        let source = source(None);
        let options = GeneratorOptions {
            title: None,
            link_remote: None,
            ..GeneratorOptions::default()
        };
        let generator = ChangelogGenerator::new(&source, options);

        let output = generator.full().unwrap();
        assert!(output.starts_with("## Unreleased - now\n"));
    }

    #[test]
    fn test_full_empty_history() {
        let source = MockSource {
            commits: Vec::new(),
            remote: None,
        };
        let options = GeneratorOptions {
            title: None,
            ..GeneratorOptions::default()
        };
        let generator = ChangelogGenerator::new(&source, options);

        assert_eq!(generator.full().unwrap(), "");
        assert_eq!(generator.unreleased().unwrap(), "");
        assert_eq!(generator.latest().unwrap(), "");
    }

    #[test]
    fn test_source_failure_propagates() {
        let generator = ChangelogGenerator::new(&FailingSource, GeneratorOptions::default());
        assert!(matches!(generator.full(), Err(CoreError::Git(_))));
        assert!(generator.commit_summaries().is_err());
    }

    #[test]
    fn test_unreleased() {
        let source = source(None);
        let generator = ChangelogGenerator::new(&source, GeneratorOptions::default());

        assert_eq!(
            generator.unreleased().unwrap(),
            "## Unreleased - now\n\n### Fixed\n- bug A\n"
        );
    }

    #[test]
    fn test_latest_and_released() {
        let source = source(None);
        let generator = ChangelogGenerator::new(&source, GeneratorOptions::default());

        let expected = "## v1.0.0 - 2024-03-05\n\n### Added\n- feature B\n";
        assert_eq!(generator.latest().unwrap(), expected);
        assert_eq!(generator.released().unwrap(), expected);
    }

    #[test]
    fn test_commit_summaries() {
        let source = source(None);
        let generator = ChangelogGenerator::new(&source, GeneratorOptions::default());

        assert_eq!(
            generator.commit_summaries().unwrap(),
            vec![
                "333333 Fix bug A".to_string(),
                "222222 Release 1.0.0".to_string(),
                "111111 Add feature B".to_string(),
            ]
        );
    }

    #[test]
    fn test_pre_release_option() {
        let mut commits = history();
        commits.insert(
            0,
            ChangelogCommit::builder("4444444444")
                .pre_release("v1.1.0-rc.1")
                .build(),
        );
        let source = MockSource {
            commits,
            remote: None,
        };

        let without = ChangelogGenerator::new(&source, GeneratorOptions::default());
        assert_eq!(without.segmentation().unwrap().buckets.len(), 2);

        let options = GeneratorOptions {
            include_pre_releases: true,
            ..GeneratorOptions::default()
        };
        let with = ChangelogGenerator::new(&source, options);
        let segmentation = with.segmentation().unwrap();
        assert_eq!(segmentation.buckets.len(), 3);
        assert_eq!(
            segmentation.latest_release().map(|b| b.label.as_str()),
            Some("v1.1.0-rc.1")
        );
    }
}
