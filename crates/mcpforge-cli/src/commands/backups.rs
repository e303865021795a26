//! `mcpforge backups` - list the registry snapshots kept in a project.

use mcpforge_core::application::{BackupManager, ProjectDetector};
use tracing::instrument;

use crate::{cli::BackupsArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: BackupsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = super::project_root(&args.path)?;
    let fs = super::local_filesystem();
    let context = ProjectDetector::new(fs.clone()).detect(&root);
    let backups = BackupManager::with_dir_name(fs, config.backup.dir_name);

    let snapshots = backups.list_snapshots(&context)?;

    if output.is_json() {
        output.json(&snapshots)?;
        return Ok(());
    }

    if snapshots.is_empty() {
        output.info(&format!(
            "No backups under {}",
            backups.backups_dir(&context).display()
        ))?;
        return Ok(());
    }

    output.header(&format!("Backups in {}", backups.backups_dir(&context).display()))?;
    for snapshot in &snapshots {
        output.print(&format!("{} ({} files)", snapshot.id, snapshot.len()))?;
        for entry in &snapshot.entries {
            let shown = context
                .relative_to_source(&entry.original)
                .unwrap_or(entry.original.as_path());
            output.item(&shown.display().to_string())?;
        }
    }
    Ok(())
}
