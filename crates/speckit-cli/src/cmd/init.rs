use anyhow::Context;
use speckit_core::{config, io, paths, workspace::Workspace};
use std::path::Path;

pub fn run(root: &Path, name: &str, agent: &str) -> anyhow::Result<()> {
    let ws = Workspace::open(root)
        .with_context(|| format!("failed to open workspace at {}", root.display()))?;

    println!("🚀 初始化 Spec-Kit 项目: {name}");

    for (dir, label) in paths::PROJECT_LAYOUT {
        let p = ws.root().join(dir);
        io::ensure_dir(&p).with_context(|| format!("failed to create {}", p.display()))?;
        println!("  📁 创建目录: {dir} - {label}");
    }

    // Always overwrites an existing config — re-running init with a new
    // name is last-writer-wins, unlike document creation.
    config::init_project(&ws, name, agent).context("failed to write config.json")?;
    println!("  ⚙️  创建配置文件: {}", ws.config_path().display());

    Ok(())
}
