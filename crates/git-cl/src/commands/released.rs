//! Released changes command.

use anyhow::Result;
use clap::Args;
use gitcl_core::ChangelogGenerator;

use super::{Workspace, emit};

/// Arguments for the released command.
#[derive(Debug, Args)]
pub struct ReleasedArgs {
    /// Include pre-releases in the output
    #[arg(short, long)]
    pub pre: bool,
}

/// Runs the released command.
pub fn run(args: &ReleasedArgs, workspace: &Workspace) -> Result<()> {
    let generator = ChangelogGenerator::new(&workspace.repository, workspace.options(args.pre));
    emit(&generator.released()?, None)
}
