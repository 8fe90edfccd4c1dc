use crate::types::DocKind;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SPECKIT_DIR: &str = ".speckit";
pub const TEMPLATES_DIR: &str = ".speckit/templates";
pub const MEMORY_DIR: &str = ".speckit/memory";

pub const CONFIG_FILE: &str = ".speckit/config.json";

/// Top-level project subdirectories created by `init`, each with the
/// purpose label echoed to the user as it is created.
pub const PROJECT_LAYOUT: &[(&str, &str)] = &[
    ("docs", "项目文档"),
    ("src", "源代码"),
    ("tests", "测试代码"),
    ("scripts", "构建和部署脚本"),
    ("config", "配置文件"),
];

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn speckit_dir(root: &Path) -> PathBuf {
    root.join(SPECKIT_DIR)
}

pub fn templates_dir(root: &Path) -> PathBuf {
    root.join(TEMPLATES_DIR)
}

pub fn memory_dir(root: &Path) -> PathBuf {
    root.join(MEMORY_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Returns `<templates>/<kind>.template.md` — the optional user override
/// consulted before the built-in default.
pub fn template_path(root: &Path, kind: DocKind) -> PathBuf {
    templates_dir(root).join(kind.template_filename())
}

/// Returns `<memory>/<feature>.<kind>.md`.
pub fn document_path(root: &Path, feature: &str, kind: DocKind) -> PathBuf {
    memory_dir(root).join(format!("{feature}.{}.md", kind.as_str()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
