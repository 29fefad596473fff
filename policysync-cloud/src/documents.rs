//! Local policy documents.
//!
//! A policy directory is scanned non-recursively; only regular files with a
//! `.rego` extension take part in a sync run.

use crate::error::{SyncError, SyncResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extension marking a policy document.
pub const POLICY_EXTENSION: &str = "rego";

/// A local policy file, named after its file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyDocument {
    pub name: String,
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl PolicyDocument {
    /// Reads the full content of the document at `path`.
    pub async fn read(path: &Path) -> SyncResult<Self> {
        let content = tokio::fs::read(path)
            .await
            .map_err(|e| SyncError::io(path, e))?;

        Ok(Self {
            name: document_name(path),
            path: path.to_path_buf(),
            content,
        })
    }
}

/// Name a document is resolved under: its file name, extension included.
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn is_policy_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == POLICY_EXTENSION)
}

/// Lists the policy documents in `dir`, sorted by file name.
///
/// Subdirectories and files without the policy extension are skipped.
/// Failing to list `dir` itself is an error; entries whose metadata cannot
/// be read are kept so the read failure is reported per document.
pub async fn discover(dir: &Path) -> SyncResult<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| SyncError::io(dir, e))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| SyncError::io(dir, e))?
    {
        let path = entry.path();
        if !is_policy_file(&path) {
            debug!("ignoring {}", path.display());
            continue;
        }
        match tokio::fs::metadata(&path).await {
            Ok(meta) if !meta.is_file() => {
                debug!("ignoring non-file {}", path.display());
                continue;
            }
            _ => paths.push(path),
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}
