//! The directory tree speckit manages under a project root.

use crate::error::Result;
use crate::io;
use crate::paths;
use crate::types::DocKind;
use std::path::{Path, PathBuf};

/// Resolved project root plus the `.speckit` tree beneath it.
///
/// Opening a workspace creates its directories; the operation is
/// idempotent and every command performs it, so the invariant "all
/// directories exist before any document operation" holds per process.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Resolve `root` to an absolute path and ensure the `.speckit`
    /// directory tree exists. The path itself does not have to exist
    /// beforehand.
    pub fn open(root: &Path) -> Result<Workspace> {
        let root = std::path::absolute(root)?;
        let ws = Workspace { root };
        io::ensure_dir(&ws.speckit_dir())?;
        io::ensure_dir(&ws.templates_dir())?;
        io::ensure_dir(&ws.memory_dir())?;
        Ok(ws)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn speckit_dir(&self) -> PathBuf {
        paths::speckit_dir(&self.root)
    }

    pub fn templates_dir(&self) -> PathBuf {
        paths::templates_dir(&self.root)
    }

    pub fn memory_dir(&self) -> PathBuf {
        paths::memory_dir(&self.root)
    }

    pub fn config_path(&self) -> PathBuf {
        paths::config_path(&self.root)
    }

    pub fn template_path(&self, kind: DocKind) -> PathBuf {
        paths::template_path(&self.root, kind)
    }

    pub fn document_path(&self, feature: &str, kind: DocKind) -> PathBuf {
        paths::document_path(&self.root, feature, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_creates_directory_tree() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();
        assert!(ws.speckit_dir().is_dir());
        assert!(ws.templates_dir().is_dir());
        assert!(ws.memory_dir().is_dir());
    }

    #[test]
    fn open_is_idempotent() {
        let dir = TempDir::new().unwrap();
        Workspace::open(dir.path()).unwrap();
        let ws = Workspace::open(dir.path()).unwrap();
        assert!(ws.memory_dir().is_dir());
    }

    #[test]
    fn root_is_absolute() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();
        assert!(ws.root().is_absolute());
    }
}
