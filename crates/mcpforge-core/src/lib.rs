//! mcpforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for extending
//! generated TypeScript MCP server projects with new components, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          mcpforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (AddComponentService, RegistryPatcher,  │
//! │  BackupManager, ProjectDetector)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, Generator)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    mcpforge-adapters (Infrastructure)   │
//! │ (LocalFilesystem, TypeScriptGenerator)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ComponentKind, naming, text surgery)  │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mcpforge_core::prelude::*;
//!
//! # fn run(filesystem: std::sync::Arc<dyn Filesystem>, generator: std::sync::Arc<dyn ComponentGenerator>) -> CoreResult<()> {
//! let service = AddComponentService::new(
//!     filesystem.clone(),
//!     generator,
//!     BackupManager::new(filesystem.clone()),
//!     RegistryPatcher::new(filesystem, PatcherSettings::default()),
//! );
//! let outcome = service.add(
//!     std::path::Path::new("./weather-server"),
//!     ComponentKind::Tool,
//!     "get weather",
//!     &AddOptions::default(),
//! )?;
//! println!("created {}", outcome.file_path.display());
//! # Ok(())
//! # }
//! ```

// Domain layer (pure rules and text surgery)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AddComponentService, AddOptions, AddOutcome, BackupManager, ComponentCatalog,
        PatchReport, PatcherSettings, ProjectDetector, RegistryPatcher,
        ports::{ComponentGenerator, Filesystem},
    };
    pub use crate::domain::{
        ComponentKind, ComponentTemplate, GenerateOptions, InsertAnchor, ProjectContext,
        RegistrationStyle, RegistryUpdate, RenderContext, StepOutcome,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
