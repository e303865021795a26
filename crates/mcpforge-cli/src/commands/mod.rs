//! One module per subcommand.  Each exposes an `execute` function taking
//! its parsed arguments plus whatever shared state it needs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mcpforge_adapters::LocalFilesystem;
use mcpforge_core::application::ports::Filesystem;

use crate::error::{CliResult, IntoCli};

pub mod add;
pub mod backups;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;

/// The on-disk filesystem every project command runs against.
fn local_filesystem() -> Arc<dyn Filesystem> {
    Arc::new(LocalFilesystem::new())
}

/// Absolute form of a `--path` argument, so reports show real locations.
fn project_root(path: &Path) -> CliResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    Ok(cwd.join(path))
}
