//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Detection found the directory is not a generated server project.
    #[error("{path} is not a valid MCP server project")]
    NotAValidProject { path: PathBuf, issues: Vec<String> },

    /// A component with the same canonical file already exists.
    #[error("Component already exists at {path}")]
    ComponentExists { path: PathBuf },

    /// A registry file the patcher must edit is missing.
    #[error("Registry file not found: {path}")]
    RegistryNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The component generator could not produce a template.
    #[error("Component generation failed: {reason}")]
    GenerationFailed { reason: String },

    /// Taking the pre-patch snapshot failed.
    #[error("Backup failed for {path}: {reason}")]
    BackupFailed { path: PathBuf, reason: String },

    /// Restoring the snapshot failed (best-effort restore).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotAValidProject { path, issues } => {
                let mut out = vec![format!(
                    "'{}' does not look like a generated MCP server",
                    path.display()
                )];
                out.extend(issues.iter().map(|i| format!("  • {i}")));
                out.push("Run the command from the project root, or pass --path".into());
                out
            }
            Self::ComponentExists { path } => vec![
                format!("Remove or rename '{}' first", path.display()),
                "Or choose a different component name".into(),
            ],
            Self::RegistryNotFound { path } => vec![
                format!("Expected registry file: {}", path.display()),
                "The project layout does not match the generator's conventions".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::BackupFailed { .. } => vec![
                "No files were modified".into(),
                "Check that the project directory is writable".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("'{}' may be partially modified", path.display()),
                "Restore it manually from the latest directory under .mcpforge/backups".into(),
            ],
            Self::GenerationFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotAValidProject { .. } => ErrorCategory::NotFound,
            Self::ComponentExists { .. } => ErrorCategory::Validation,
            Self::RegistryNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. }
            | Self::BackupFailed { .. }
            | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::GenerationFailed { .. } => ErrorCategory::Internal,
        }
    }
}
