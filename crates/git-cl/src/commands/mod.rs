//! Subcommands.

pub mod commits;
pub mod full;
pub mod latest;
pub mod released;
pub mod unreleased;

use std::path::Path;

use anyhow::{Context, Result};
use gitcl_config::{Config, load_config, load_or_default};
use gitcl_core::GeneratorOptions;
use gitcl_git::Repository;
use tracing::debug;

/// The repository and configuration a command runs against.
pub struct Workspace {
    pub repository: Repository,
    pub config: Config,
}

impl Workspace {
    /// Discovers the repository and loads its configuration.
    pub fn load(repo: Option<&Path>, config: Option<&Path>) -> Result<Self> {
        let start = match repo {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir().context("failed to read current directory")?,
        };
        let repository = Repository::discover(&start).context("failed to open git repository")?;
        debug!(path = ?repository.path(), "opened repository");

        let config = match config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => load_or_default(repository.path()).context("failed to load git-cl.toml")?,
        };

        Ok(Self { repository, config })
    }

    /// Generator options from the configuration, with `--pre` forcing pre-releases on.
    pub fn options(&self, pre: bool) -> GeneratorOptions {
        let mut options = GeneratorOptions::from(&self.config);
        options.include_pre_releases |= pre;
        options
    }
}

/// Writes the output to a file, or to stdout when no file is given.
pub fn emit(output: &str, file: Option<&Path>) -> Result<()> {
    match file {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!(path = %path.display(), "wrote changelog");
        }
        None => print!("{output}"),
    }
    Ok(())
}
