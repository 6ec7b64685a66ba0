//! Annotated commits command.

use anyhow::Result;
use gitcl_core::{ChangelogGenerator, GeneratorOptions};

use super::Workspace;

/// Runs the commits command.
pub fn run(workspace: &Workspace) -> Result<()> {
    let generator = ChangelogGenerator::new(&workspace.repository, GeneratorOptions::default());
    for line in generator.commit_summaries()? {
        println!("{line}");
    }
    Ok(())
}
