//! Latest release command.

use anyhow::Result;
use clap::Args;
use gitcl_core::ChangelogGenerator;
use tracing::info;

use super::{Workspace, emit};

/// Arguments for the latest command.
#[derive(Debug, Args)]
pub struct LatestArgs {
    /// Include pre-releases in the output
    #[arg(short, long)]
    pub pre: bool,
}

/// Runs the latest command.
pub fn run(args: &LatestArgs, workspace: &Workspace) -> Result<()> {
    let generator = ChangelogGenerator::new(&workspace.repository, workspace.options(args.pre));
    let latest = generator.latest()?;
    if latest.is_empty() {
        info!("no release found");
    }
    emit(&latest, None)
}
