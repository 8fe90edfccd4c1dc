//! Document generation: resolve a template, substitute placeholder
//! tokens, write the result exactly once per `(feature, kind)` pair.

use crate::error::Result;
use crate::io;
use crate::templates;
use crate::types::DocKind;
use crate::workspace::Workspace;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// CreateOutcome
// ---------------------------------------------------------------------------

/// Result of a document creation attempt. An existing target is not an
/// error — first write wins and later attempts return the path as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl CreateOutcome {
    pub fn path(&self) -> &Path {
        match self {
            CreateOutcome::Created(p) | CreateOutcome::AlreadyExists(p) => p,
        }
    }

    pub fn created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Generate `<memory>/<feature>.<kind>.md` from the kind's template,
/// dated today. `description` is only consulted for [`DocKind::Spec`].
pub fn create(
    ws: &Workspace,
    kind: DocKind,
    feature: &str,
    description: Option<&str>,
) -> Result<CreateOutcome> {
    create_with_date(ws, kind, feature, description, Local::now().date_naive())
}

/// Same as [`create`] with an explicit date, so tests can pin it.
pub fn create_with_date(
    ws: &Workspace,
    kind: DocKind,
    feature: &str,
    description: Option<&str>,
    date: NaiveDate,
) -> Result<CreateOutcome> {
    let target = ws.document_path(feature, kind);
    if target.exists() {
        return Ok(CreateOutcome::AlreadyExists(target));
    }

    let template = load_template(ws, kind)?;
    let content = substitute(kind, &template, feature, description, date);

    // The exclusive create is what actually enforces write-once; the
    // existence check above is just the fast path. A concurrent winner
    // turns this into an already-exists outcome.
    if io::create_exclusive(&target, content.as_bytes())? {
        Ok(CreateOutcome::Created(target))
    } else {
        Ok(CreateOutcome::AlreadyExists(target))
    }
}

/// Read the override file under `.speckit/templates/` if present,
/// otherwise fall back to the built-in default for `kind`.
fn load_template(ws: &Workspace, kind: DocKind) -> Result<String> {
    let override_path = ws.template_path(kind);
    if override_path.exists() {
        Ok(std::fs::read_to_string(&override_path)?)
    } else {
        Ok(templates::default_template(kind).to_string())
    }
}

/// Apply the fixed, ordered token substitutions for `kind`. Literal
/// global replace, no template engine.
fn substitute(
    kind: DocKind,
    template: &str,
    feature: &str,
    description: Option<&str>,
    date: NaiveDate,
) -> String {
    let date = date.format("%Y-%m-%d").to_string();
    match kind {
        DocKind::Spec => {
            let mut content = template
                .replace(templates::NAME, feature)
                .replace(templates::CREATED_DATE, &date);
            if let Some(desc) = description {
                if !desc.is_empty() {
                    content = content.replace(templates::MOTIVATION, desc);
                }
            }
            content
        }
        DocKind::Plan => template
            .replace(templates::NAME, feature)
            .replace(templates::AUTHOR, templates::AI_ASSISTANT)
            .replace(templates::DATE, &date),
        DocKind::Tasks => template
            .replace(templates::NAME, feature)
            .replace(templates::CREATOR, templates::AI_ASSISTANT)
            .replace(templates::CREATED_DATE, &date)
            .replace(templates::UPDATED_DATE, &date),
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Full paths of all `*.spec.md` files in the memory directory, in the
/// filesystem's native enumeration order.
pub fn list_specs(ws: &Workspace) -> Result<Vec<PathBuf>> {
    let mut specs = Vec::new();
    for entry in std::fs::read_dir(ws.memory_dir())? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(".spec.md") {
            specs.push(entry.path());
        }
    }
    Ok(specs)
}

/// File name up to the first `.`: `login.spec.md` → `login`.
pub fn spec_stem(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .map(|n| n.split('.').next().unwrap_or_default().to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
