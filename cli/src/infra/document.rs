//! Filesystem infrastructure: implements `DocumentSource`.
//!
//! The active document is either a file named on the command line or the
//! file focused in an Obsidian vault, as recorded in
//! `<vault>/.obsidian/workspace.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::application::ports::DocumentSource;
use crate::domain::ActiveDocument;

/// Workspace layout file, relative to the vault root.
pub const WORKSPACE_FILE: &str = ".obsidian/workspace.json";

/// Where to look for the active document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentTarget {
    /// An explicit file.
    File(PathBuf),
    /// The focused file of a vault.
    Vault(PathBuf),
    /// Nothing to read.
    Nothing,
}

/// Production implementation of `DocumentSource` reading from local disk.
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    target: DocumentTarget,
}

impl FsDocumentSource {
    /// An explicit file wins over a vault.
    #[must_use]
    pub fn new(file: Option<PathBuf>, vault: Option<PathBuf>) -> Self {
        let target = match (file, vault) {
            (Some(file), _) => DocumentTarget::File(file),
            (None, Some(vault)) => DocumentTarget::Vault(vault),
            (None, None) => DocumentTarget::Nothing,
        };
        Self { target }
    }

    /// The resolved lookup target.
    #[must_use]
    pub fn target(&self) -> &DocumentTarget {
        &self.target
    }
}

impl DocumentSource for FsDocumentSource {
    async fn active_document(&self) -> Result<Option<ActiveDocument>> {
        let target = self.target.clone();
        tokio::task::spawn_blocking(move || read_target(&target))
            .await
            .context("spawn_blocking for active_document")?
    }
}

fn read_target(target: &DocumentTarget) -> Result<Option<ActiveDocument>> {
    let path = match target {
        DocumentTarget::File(path) => path.clone(),
        DocumentTarget::Vault(vault) => match active_vault_file(vault)? {
            Some(path) => path,
            None => return Ok(None),
        },
        DocumentTarget::Nothing => return Ok(None),
    };
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "active document does not exist");
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(ActiveDocument::from_path(path, content))
}

/// Resolve the focused file of `vault`, or `None` if the vault records none.
///
/// # Errors
///
/// Returns an error if the workspace file exists but cannot be read or parsed.
pub fn active_vault_file(vault: &Path) -> Result<Option<PathBuf>> {
    let workspace = vault.join(WORKSPACE_FILE);
    if !workspace.is_file() {
        tracing::debug!(path = %workspace.display(), "no workspace file in vault");
        return Ok(None);
    }
    let raw = std::fs::read_to_string(&workspace)
        .with_context(|| format!("reading {}", workspace.display()))?;
    let layout: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", workspace.display()))?;
    Ok(active_file_in_layout(&layout).map(|rel| vault.join(rel)))
}

/// Vault-relative path of the focused file in a workspace layout.
///
/// Prefers the leaf named by `active`; falls back to the most recent entry
/// of `lastOpenFiles`.
#[must_use]
pub fn active_file_in_layout(layout: &Value) -> Option<String> {
    let from_leaf = layout
        .get("active")
        .and_then(Value::as_str)
        .and_then(|id| find_node(layout, id))
        .and_then(|leaf| leaf.pointer("/state/state/file"))
        .and_then(Value::as_str);

    from_leaf
        .or_else(|| {
            layout
                .get("lastOpenFiles")
                .and_then(Value::as_array)
                .and_then(|files| files.first())
                .and_then(Value::as_str)
        })
        .filter(|f| !f.is_empty())
        .map(str::to_string)
}

fn find_node<'a>(node: &'a Value, id: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => {
            if map.get("id").and_then(Value::as_str) == Some(id) {
                return Some(node);
            }
            map.values().find_map(|child| find_node(child, id))
        }
        Value::Array(items) => items.iter().find_map(|child| find_node(child, id)),
        _ => None,
    }
}
