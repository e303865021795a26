//! Application layer for mcpforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AddComponentService, ComponentCatalog)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AddComponentService, AddOptions, AddOutcome, BackupManager, ComponentCatalog,
    DEFAULT_BACKUP_DIR, ExistenceCheck, KindListing, NameValidation, PatchReport,
    PatcherSettings, ProjectDetector, RegistryPatcher, RegistryTarget,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ComponentGenerator, Filesystem};

pub use error::ApplicationError;
