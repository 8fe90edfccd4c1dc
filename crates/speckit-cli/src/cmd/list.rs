use anyhow::Context;
use speckit_core::{document, workspace::Workspace};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let ws = Workspace::open(root)
        .with_context(|| format!("failed to open workspace at {}", root.display()))?;

    let specs = document::list_specs(&ws).context("failed to list specifications")?;
    if specs.is_empty() {
        println!("📭 没有找到功能规范");
        return Ok(());
    }

    println!("📋 功能规范列表:");
    for (i, path) in specs.iter().enumerate() {
        println!("  {}. {}", i + 1, document::spec_stem(path));
    }
    Ok(())
}
