use crate::error::Result;
use crate::io;
use crate::types::DocKind;
use crate::workspace::Workspace;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_VERSION: &str = "1.0.0";

// ---------------------------------------------------------------------------
// ProjectConfig
// ---------------------------------------------------------------------------

/// The `.speckit/config.json` record written at init time. Never
/// mutated afterwards; re-running init overwrites it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project: ProjectMeta,
    pub templates: TemplatePaths,
    pub paths: ProjectPaths,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    pub ai_agent: String,
    pub version: String,
}

/// Absolute paths to the three template override files, whether or not
/// they exist on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatePaths {
    pub spec: PathBuf,
    pub plan: PathBuf,
    pub tasks: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPaths {
    pub memory: PathBuf,
    pub docs: PathBuf,
    pub src: PathBuf,
}

impl ProjectConfig {
    pub fn new(ws: &Workspace, name: &str, agent: &str) -> ProjectConfig {
        ProjectConfig {
            project: ProjectMeta {
                name: name.to_string(),
                created_at: Local::now().to_rfc3339(),
                ai_agent: agent.to_string(),
                version: CONFIG_VERSION.to_string(),
            },
            templates: TemplatePaths {
                spec: ws.template_path(DocKind::Spec),
                plan: ws.template_path(DocKind::Plan),
                tasks: ws.template_path(DocKind::Tasks),
            },
            paths: ProjectPaths {
                memory: ws.memory_dir(),
                docs: ws.root().join("docs"),
                src: ws.root().join("src"),
            },
        }
    }

    /// Write pretty-printed JSON to the config path, overwriting any
    /// existing file. serde_json leaves non-ASCII characters unescaped.
    pub fn save(&self, ws: &Workspace) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        io::atomic_write(&ws.config_path(), json.as_bytes())
    }

    pub fn load(ws: &Workspace) -> Result<ProjectConfig> {
        let content = std::fs::read_to_string(ws.config_path())?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Write the config for a fresh (or re-run) init and read it back.
/// The re-read is deliberate: it surfaces serialization problems at
/// init time instead of on a later command.
pub fn init_project(ws: &Workspace, name: &str, agent: &str) -> Result<ProjectConfig> {
    let config = ProjectConfig::new(ws, name, agent);
    config.save(ws)?;
    ProjectConfig::load(ws)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ws() -> (TempDir, Workspace) {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();
        (dir, ws)
    }

    #[test]
    fn init_writes_and_reads_back() {
        let (_dir, ws) = ws();
        let config = init_project(&ws, "demo", "claude").unwrap();
        assert_eq!(config.project.name, "demo");
        assert_eq!(config.project.ai_agent, "claude");
        assert_eq!(config.project.version, "1.0.0");
        assert!(ws.config_path().exists());
    }

    #[test]
    fn init_overwrites_previous_config() {
        let (_dir, ws) = ws();
        init_project(&ws, "first", "claude").unwrap();
        init_project(&ws, "second", "claude").unwrap();
        let config = ProjectConfig::load(&ws).unwrap();
        assert_eq!(config.project.name, "second");
        let raw = std::fs::read_to_string(ws.config_path()).unwrap();
        assert!(!raw.contains("first"));
    }

    #[test]
    fn non_ascii_is_preserved_unescaped() {
        let (_dir, ws) = ws();
        init_project(&ws, "演示项目", "claude").unwrap();
        let raw = std::fs::read_to_string(ws.config_path()).unwrap();
        assert!(raw.contains("演示项目"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn template_paths_are_absolute_and_complete() {
        let (_dir, ws) = ws();
        let config = init_project(&ws, "demo", "claude").unwrap();
        for p in [
            &config.templates.spec,
            &config.templates.plan,
            &config.templates.tasks,
            &config.paths.memory,
            &config.paths.docs,
            &config.paths.src,
        ] {
            assert!(p.is_absolute());
        }
        assert!(config
            .templates
            .spec
            .ends_with(".speckit/templates/spec.template.md"));
    }
}
