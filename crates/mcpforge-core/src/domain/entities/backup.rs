use std::path::{Path, PathBuf};

use serde::Serialize;

/// One file captured by a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupEntry {
    pub original: PathBuf,
    pub backup: PathBuf,
}

/// Pristine copies of the registry files, taken before a patch attempt.
///
/// Snapshots are left on disk after a successful run; only a failed run
/// reads them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupSnapshot {
    /// Timestamp identifier, also the name of the snapshot directory.
    pub id: String,
    pub project_path: PathBuf,
    pub backup_root: PathBuf,
    pub entries: Vec<BackupEntry>,
}

impl BackupSnapshot {
    pub fn new(id: impl Into<String>, project_path: &Path, backup_root: PathBuf) -> Self {
        Self {
            id: id.into(),
            project_path: project_path.to_path_buf(),
            backup_root,
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, original: PathBuf, backup: PathBuf) {
        self.entries.push(BackupEntry { original, backup });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether `path` was captured.
    pub fn covers(&self, path: &Path) -> bool {
        self.entries.iter().any(|e| e.original == path)
    }
}
