pub mod backup;
pub mod component;
pub mod project;
pub mod render;

pub use backup::{BackupEntry, BackupSnapshot};
pub use component::{ComponentTemplate, GenerateOptions, RegistryUpdate};
pub use project::{PackageManifest, ProjectContext};
pub use render::RenderContext;
