//! Full changelog command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use gitcl_core::ChangelogGenerator;

use super::{Workspace, emit};

/// Arguments for the full command.
#[derive(Debug, Args)]
pub struct FullArgs {
    /// Include pre-releases in the output
    #[arg(short, long)]
    pub pre: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the full command.
pub fn run(args: &FullArgs, workspace: &Workspace) -> Result<()> {
    let generator = ChangelogGenerator::new(&workspace.repository, workspace.options(args.pre));
    let changelog = generator.full()?;
    emit(&changelog, args.output.as_deref())
}
