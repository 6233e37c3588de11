//! File-backed shortcut store.
//!
//! Persists the list as a plain JSON array — the same shape the
//! import/export format uses — so a store file is itself a valid export.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use directories::ProjectDirs;
use tokio::fs;
use uuid::Uuid;

use super::ShortcutStore;
use crate::error::{TabhopError, TabhopResult};
use crate::types::Shortcut;

/// Shortcut list persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file. The file need not exist
    /// yet; a missing file loads as an empty list.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location under the platform config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tabhop", "tabhop")
            .map(|dirs| dirs.config_dir().join("shortcuts.json"))
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ShortcutStore for FileStore {
    async fn load(&self) -> TabhopResult<Vec<Shortcut>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TabhopError::store(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&raw).map_err(|e| {
            TabhopError::store(format!("{} is not a shortcut list: {}", self.path.display(), e))
        })
    }

    async fn replace(&self, shortcuts: &[Shortcut]) -> TabhopResult<()> {
        let contents = serde_json::to_string_pretty(shortcuts)
            .map_err(|e| TabhopError::store(format!("failed to serialize shortcuts: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                TabhopError::store(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        atomic_write(&self.path, &contents)
            .await
            .map_err(|e| TabhopError::store(format!("{:#}", e)))
    }
}

/// Writes data to a file atomically using write-to-temp-then-rename.
///
/// Each write either fully succeeds or leaves the previous contents in
/// place; a crash mid-write never produces a truncated list.
async fn atomic_write(path: &Path, contents: &str) -> Result<()> {
    // Temp file in the same directory, so the rename stays on one filesystem
    let parent = path.parent().unwrap_or(Path::new("."));
    let temp_name = format!(
        ".{}.tmp.{}",
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("shortcuts"),
        Uuid::new_v4()
    );
    let temp_path = parent.join(temp_name);

    fs::write(&temp_path, contents)
        .await
        .context("Failed to write temp file")?;

    fs::rename(&temp_path, path)
        .await
        .context("Failed to rename temp file")?;

    Ok(())
}
