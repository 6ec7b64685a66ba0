//! Unreleased changes command.

use anyhow::Result;
use clap::Args;
use gitcl_core::ChangelogGenerator;

use super::{Workspace, emit};

/// Arguments for the unreleased command.
#[derive(Debug, Args)]
pub struct UnreleasedArgs {
    /// Treat pre-releases as releases
    #[arg(short, long)]
    pub pre: bool,
}

/// Runs the unreleased command.
pub fn run(args: &UnreleasedArgs, workspace: &Workspace) -> Result<()> {
    let generator = ChangelogGenerator::new(&workspace.repository, workspace.options(args.pre));
    emit(&generator.unreleased()?, None)
}
