//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a tool" or "list components".

pub mod add_component;
pub mod backup;
pub mod catalog;
pub mod detector;
pub mod patcher;

pub use add_component::{AddComponentService, AddOptions, AddOutcome};
pub use backup::{BackupManager, DEFAULT_BACKUP_DIR, SNAPSHOT_ID_FORMAT};
pub use catalog::{ComponentCatalog, KindListing};
pub use detector::{ExistenceCheck, NameValidation, ProjectDetector};
pub use patcher::{PatchReport, PatcherSettings, RegistryPatcher, RegistryTarget};
