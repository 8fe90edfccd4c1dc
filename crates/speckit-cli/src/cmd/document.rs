use anyhow::Context;
use speckit_core::document::{self, CreateOutcome};
use speckit_core::types::DocKind;
use speckit_core::workspace::Workspace;
use std::path::Path;

/// Shared runner for the `spec`, `plan`, and `tasks` subcommands.
pub fn run(
    root: &Path,
    kind: DocKind,
    feature: &str,
    description: Option<&str>,
) -> anyhow::Result<()> {
    let ws = Workspace::open(root)
        .with_context(|| format!("failed to open workspace at {}", root.display()))?;

    let outcome = document::create(&ws, kind, feature, description)
        .with_context(|| format!("failed to create {} for '{feature}'", kind.as_str()))?;

    match outcome {
        CreateOutcome::Created(path) => {
            println!("{} 创建{}: {}", kind.emoji(), kind.label(), path.display());
        }
        CreateOutcome::AlreadyExists(path) => {
            println!("⚠️  {}文件已存在: {}", kind.short_label(), path.display());
        }
    }
    Ok(())
}
