//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{self, Workspace};

/// Generate a Keep a Changelog document from `[changelog]` annotations in commit messages.
#[derive(Debug, Parser)]
#[command(name = "git-cl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "repo", global = true, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Configuration file (default: git-cl.toml in the repository or a parent)
    #[arg(short, long, global = true, env = "GIT_CL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// All unreleased and released changes, with comparison links
    Full(commands::full::FullArgs),

    /// Changes since the latest release
    Unreleased(commands::unreleased::UnreleasedArgs),

    /// Changes in the latest release
    Latest(commands::latest::LatestArgs),

    /// Changes in every release, without unreleased changes
    Released(commands::released::ReleasedArgs),

    /// Commits carrying changelog annotations
    Commits,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let workspace = Workspace::load(self.repo.as_deref(), self.config.as_deref())?;

        match self.command {
            Commands::Full(args) => commands::full::run(&args, &workspace),
            Commands::Unreleased(args) => commands::unreleased::run(&args, &workspace),
            Commands::Latest(args) => commands::latest::run(&args, &workspace),
            Commands::Released(args) => commands::released::run(&args, &workspace),
            Commands::Commits => commands::commits::run(&workspace),
        }
    }
}
