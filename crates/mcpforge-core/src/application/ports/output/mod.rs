//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mcpforge-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{ComponentKind, ComponentTemplate, GenerateOptions};
use crate::error::CoreResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mcpforge_adapters::filesystem::LocalFilesystem` (production)
/// - `mcpforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are used as given; services always pass paths under the project
/// - Operations are synchronous and unlocked
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> CoreResult<String>;

    /// Write content to a file, replacing it. Parent directories are created.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Copy `from` over `to`. Parent directories of `to` are created.
    fn copy_file(&self, from: &Path, to: &Path) -> CoreResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Direct children of a directory, sorted by path.
    fn list_dir(&self, path: &Path) -> CoreResult<Vec<PathBuf>>;
}

/// Port for producing component source text.
///
/// Implemented by:
/// - `mcpforge_adapters::generator::TypeScriptGenerator` (built-in templates)
pub trait ComponentGenerator: Send + Sync {
    /// Produce the file content, index fragment and registry update for a
    /// component. `name` is the normalized (kebab-case) name.
    fn generate(
        &self,
        kind: ComponentKind,
        name: &str,
        options: &GenerateOptions,
    ) -> CoreResult<ComponentTemplate>;
}
