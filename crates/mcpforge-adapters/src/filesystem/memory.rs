//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use mcpforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CoreError, CoreResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same contents. `write_file` calls on paths registered
/// with [`MemoryFilesystem::fail_writes_to`] fail without touching the file.
/// Paths registered with [`MemoryFilesystem::fail_after_writing_to`] take the
/// new content and then report a failure, once. Copies onto either kind of
/// path still succeed, so snapshots can be restored over them.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
    torn_writes: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper: add a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.insert_file(path, content);
        self
    }

    /// Add or replace a file, creating its parent directories.
    pub fn insert_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                add_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Make every later `write_file` onto `path` fail.
    pub fn fail_writes_to(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_writes.insert(path.as_ref().to_path_buf());
        }
    }

    /// Make the next `write_file` onto `path` store its content and then
    /// fail, leaving the file changed.
    pub fn fail_after_writing_to(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.torn_writes.insert(path.as_ref().to_path_buf());
        }
    }

    fn read(&self) -> CoreResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| lock_poisoned())
    }

    fn write(&self) -> CoreResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_poisoned())
    }
}

impl MemoryFilesystemInner {
    fn store(&mut self, path: &Path, content: String) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            add_ancestors(&mut self.directories, parent);
        }
        self.files.insert(path.to_path_buf(), content);
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        add_ancestors(&mut self.write()?.directories, path);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CoreResult<String> {
        self.read()?.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to read file: not found".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        let mut inner = self.write()?;
        if inner.failing_writes.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to write file: simulated failure".into(),
            }
            .into());
        }
        inner.store(path, content.to_string())?;
        if inner.torn_writes.remove(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to write file: simulated failure after write".into(),
            }
            .into());
        }
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> CoreResult<()> {
        let content = self.read_to_string(from)?;
        self.write()?.store(to, content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn list_dir(&self, path: &Path) -> CoreResult<Vec<PathBuf>> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to list directory: not found".into(),
            }
            .into());
        }

        let children: BTreeSet<PathBuf> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect();
        Ok(children.into_iter().collect())
    }
}

fn add_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn lock_poisoned() -> CoreError {
    CoreError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}
