use anyhow::Context;
use speckit_core::{assistant, workspace::Workspace};
use std::path::Path;

pub fn run(root: &Path, feature: &str) -> anyhow::Result<()> {
    // Every command opens the workspace, even read-only ones, so the
    // directory tree exists after any first invocation.
    Workspace::open(root)
        .with_context(|| format!("failed to open workspace at {}", root.display()))?;

    println!("{}", assistant::workflow_report(feature));
    Ok(())
}
