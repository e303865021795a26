//! Infrastructure adapters for mcpforge.
//!
//! This crate implements the ports defined in `mcpforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod generator;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generator::TypeScriptGenerator;
