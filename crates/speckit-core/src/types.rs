use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DocKind
// ---------------------------------------------------------------------------

/// The three document categories this tool generates. Each has its own
/// template, filename suffix, and status-line labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocKind {
    Spec,
    Plan,
    Tasks,
}

impl DocKind {
    pub fn all() -> &'static [DocKind] {
        &[DocKind::Spec, DocKind::Plan, DocKind::Tasks]
    }

    /// Filename suffix component: `<feature>.<kind>.md`.
    pub fn as_str(self) -> &'static str {
        match self {
            DocKind::Spec => "spec",
            DocKind::Plan => "plan",
            DocKind::Tasks => "tasks",
        }
    }

    /// Override file name under `.speckit/templates/`.
    pub fn template_filename(self) -> &'static str {
        match self {
            DocKind::Spec => "spec.template.md",
            DocKind::Plan => "plan.template.md",
            DocKind::Tasks => "tasks.template.md",
        }
    }

    /// Full label used on creation status lines.
    pub fn label(self) -> &'static str {
        match self {
            DocKind::Spec => "功能规范",
            DocKind::Plan => "实施计划",
            DocKind::Tasks => "任务列表",
        }
    }

    /// Short label used on already-exists warnings.
    pub fn short_label(self) -> &'static str {
        match self {
            DocKind::Spec => "规范",
            DocKind::Plan => "计划",
            DocKind::Tasks => "任务",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            DocKind::Spec => "📝",
            DocKind::Plan => "📋",
            DocKind::Tasks => "✅",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_and_template_filename_agree() {
        for kind in DocKind::all() {
            assert_eq!(
                kind.template_filename(),
                format!("{}.template.md", kind.as_str())
            );
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(DocKind::Tasks.to_string(), "tasks");
    }
}
