//! Snapshots of registry files taken before they are patched.
//!
//! Layout: `<project>/<backup dir>/<timestamp>/<path relative to src>`.
//! Snapshots are never deleted by the tool.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{BackupSnapshot, ComponentKind, ProjectContext},
    error::CoreResult,
};

/// Backup directory, relative to the project root, when none is configured.
pub const DEFAULT_BACKUP_DIR: &str = ".mcpforge/backups";

/// `chrono` format of snapshot identifiers, e.g. `20250114T093012.481`.
pub const SNAPSHOT_ID_FORMAT: &str = "%Y%m%dT%H%M%S%.3f";

pub struct BackupManager {
    filesystem: Arc<dyn Filesystem>,
    dir_name: PathBuf,
}

impl BackupManager {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self::with_dir_name(filesystem, DEFAULT_BACKUP_DIR)
    }

    pub fn with_dir_name(filesystem: Arc<dyn Filesystem>, dir_name: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            dir_name: dir_name.into(),
        }
    }

    /// Directory holding every snapshot of `context`'s project.
    pub fn backups_dir(&self, context: &ProjectContext) -> PathBuf {
        context.project_path.join(&self.dir_name)
    }

    /// Copy every existing registry file into a fresh snapshot directory.
    ///
    /// Registry files that do not exist are skipped; nothing is written
    /// when none exist.
    #[instrument(skip_all, fields(project = %context.project_path.display()))]
    pub fn backup(&self, context: &ProjectContext) -> CoreResult<BackupSnapshot> {
        let stamp = chrono::Local::now().format(SNAPSHOT_ID_FORMAT).to_string();
        let id = self.unique_id(context, &stamp);
        let backup_root = self.backups_dir(context).join(&id);
        let mut snapshot = BackupSnapshot::new(id, &context.project_path, backup_root.clone());

        for kind in ComponentKind::INDEXED {
            let Some(original) = context.registry_path(kind) else {
                continue;
            };
            if !self.filesystem.exists(&original) {
                debug!(path = %original.display(), "Registry file absent, not backed up");
                continue;
            }

            let relative = context
                .relative_to_source(&original)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| original.file_name().map(PathBuf::from).unwrap_or_default());
            let backup = backup_root.join(relative);

            self.filesystem
                .copy_file(&original, &backup)
                .map_err(|e| ApplicationError::BackupFailed {
                    path: original.clone(),
                    reason: e.to_string(),
                })?;
            snapshot.record(original, backup);
        }

        info!(id = %snapshot.id, files = snapshot.len(), "Snapshot taken");
        Ok(snapshot)
    }

    /// Copy every backup over its original.
    ///
    /// Best-effort: every entry is attempted, and the first failure is
    /// returned afterwards.
    #[instrument(skip_all, fields(id = %snapshot.id))]
    pub fn restore(&self, snapshot: &BackupSnapshot) -> CoreResult<()> {
        let mut first_failure = None;

        for entry in &snapshot.entries {
            match self.filesystem.copy_file(&entry.backup, &entry.original) {
                Ok(()) => debug!(path = %entry.original.display(), "Restored"),
                Err(e) => {
                    warn!(error = %e, path = %entry.original.display(), "Restore failed");
                    first_failure.get_or_insert(ApplicationError::RollbackFailed {
                        path: entry.original.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        match first_failure {
            Some(e) => Err(e.into()),
            None => {
                info!(files = snapshot.len(), "Snapshot restored");
                Ok(())
            }
        }
    }

    /// Existing snapshots of the project, oldest first.
    pub fn list_snapshots(&self, context: &ProjectContext) -> CoreResult<Vec<BackupSnapshot>> {
        let dir = self.backups_dir(context);
        if !self.filesystem.is_dir(&dir) {
            return Ok(Vec::new());
        }

        let mut snapshots = Vec::new();
        for root in self.filesystem.list_dir(&dir)? {
            if !self.filesystem.is_dir(&root) {
                continue;
            }
            let id = root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let mut snapshot = BackupSnapshot::new(id, &context.project_path, root.clone());

            for backup in self.files_under(&root)? {
                if let Ok(relative) = backup.strip_prefix(&root) {
                    let original = context.source_root_path.join(relative);
                    snapshot.record(original, backup.clone());
                }
            }
            snapshots.push(snapshot);
        }

        snapshots.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(snapshots)
    }

    fn files_under(&self, dir: &Path) -> CoreResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for child in self.filesystem.list_dir(dir)? {
            if self.filesystem.is_dir(&child) {
                files.extend(self.files_under(&child)?);
            } else {
                files.push(child);
            }
        }
        Ok(files)
    }

    /// `stamp`, or `stamp-N` for the first free N when taken.
    fn unique_id(&self, context: &ProjectContext, stamp: &str) -> String {
        let dir = self.backups_dir(context);
        if !self.filesystem.exists(&dir.join(stamp)) {
            return stamp.to_string();
        }
        (1..)
            .map(|n| format!("{stamp}-{n}"))
            .find(|id| !self.filesystem.exists(&dir.join(id)))
            .unwrap_or_else(|| stamp.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    fn context() -> ProjectContext {
        ProjectContext {
            is_valid_project: true,
            project_path: PathBuf::from("/p"),
            source_root_path: PathBuf::from("/p/src"),
            project_name: "p".into(),
            manifest: None,
            issues: Vec::new(),
        }
    }

    #[test]
    fn colliding_stamp_gets_numeric_suffix() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| {
            p.ends_with("20250101T000000.000") || p.ends_with("20250101T000000.000-1")
        });

        let manager = BackupManager::new(Arc::new(fs));
        assert_eq!(
            manager.unique_id(&context(), "20250101T000000.000"),
            "20250101T000000.000-2"
        );
    }

    #[test]
    fn missing_registries_are_skipped() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.ends_with("core/tool-registry.ts"));
        fs.expect_copy_file().times(1).returning(|_, _| Ok(()));

        let snapshot = BackupManager::new(Arc::new(fs)).backup(&context()).unwrap();

        assert_eq!(snapshot.len(), 1);
        let entry = &snapshot.entries[0];
        assert_eq!(entry.original, PathBuf::from("/p/src/core/tool-registry.ts"));
        assert!(entry.backup.starts_with("/p/.mcpforge/backups"));
        assert!(entry.backup.ends_with("core/tool-registry.ts"));
    }

    #[test]
    fn copy_failure_is_a_backup_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.ends_with("core/tool-registry.ts"));
        fs.expect_copy_file().returning(|_, to| {
            Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let err = BackupManager::new(Arc::new(fs))
            .backup(&context())
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Application(ApplicationError::BackupFailed { .. })
        ));
    }

    #[test]
    fn restore_attempts_every_entry() {
        let mut snapshot = BackupSnapshot::new("s", Path::new("/p"), PathBuf::from("/p/b/s"));
        snapshot.record("/p/src/a.ts".into(), "/p/b/s/a.ts".into());
        snapshot.record("/p/src/b.ts".into(), "/p/b/s/b.ts".into());

        let mut fs = MockFilesystem::new();
        fs.expect_copy_file().times(2).returning(|from, _| {
            if from.ends_with("a.ts") {
                Err(ApplicationError::FilesystemError {
                    path: from.to_path_buf(),
                    reason: "gone".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });

        let err = BackupManager::new(Arc::new(fs))
            .restore(&snapshot)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Application(ApplicationError::RollbackFailed { ref path, .. })
                if path == Path::new("/p/src/a.ts")
        ));
    }
}
