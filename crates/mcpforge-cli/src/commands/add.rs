//! `mcpforge add` - generate a component and wire it into the project.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use mcpforge_adapters::TypeScriptGenerator;
use mcpforge_core::{
    application::{
        AddComponentService, AddOptions, AddOutcome, BackupManager, PatchReport, RegistryPatcher,
    },
    domain::{ComponentKind, StepOutcome},
    error::CoreError,
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    cli::AddArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON rendering of an [`AddOutcome`].
#[derive(Debug, Serialize)]
struct AddSummary<'a> {
    kind: ComponentKind,
    name: &'a str,
    type_name: &'a str,
    file: &'a Path,
    index: Option<&'a Path>,
    index_updated: bool,
    registry: Option<&'a PatchReport>,
    backup: Option<&'a Path>,
    dry_run: bool,
}

impl<'a> From<&'a AddOutcome> for AddSummary<'a> {
    fn from(outcome: &'a AddOutcome) -> Self {
        Self {
            kind: outcome.kind,
            name: &outcome.name,
            type_name: &outcome.type_name,
            file: &outcome.file_path,
            index: outcome.index_path.as_deref(),
            index_updated: outcome.index_updated,
            registry: outcome.patch_report.as_ref(),
            backup: outcome.snapshot.as_ref().map(|s| s.backup_root.as_path()),
            dry_run: outcome.dry_run,
        }
    }
}

#[instrument(skip_all, fields(kind = %args.kind, name = %args.name))]
pub fn execute(args: AddArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kind = ComponentKind::from_str(&args.kind).map_err(CoreError::from)?;
    let root = super::project_root(&args.path)?;

    let fs = super::local_filesystem();
    let service = AddComponentService::new(
        fs.clone(),
        Arc::new(TypeScriptGenerator::new()),
        BackupManager::with_dir_name(fs.clone(), PathBuf::from(&config.backup.dir_name)),
        RegistryPatcher::new(fs, config.patcher_settings()),
    );

    let options = AddOptions {
        description: args.description,
        author: args.author.or(config.defaults.author),
        skip_validation: args.skip_validation,
        dry_run: args.dry_run,
    };
    debug!(?options, root = %root.display(), "Adding component");

    let outcome = service
        .add(&root, kind, &args.name, &options)
        .map_err(CliError::Core)?;

    if output.is_json() {
        output.json(&AddSummary::from(&outcome))?;
        return Ok(());
    }

    if outcome.dry_run {
        print_dry_run(&outcome, &output)?;
    } else {
        print_report(&outcome, &output)?;
    }
    Ok(())
}

fn print_report(outcome: &AddOutcome, output: &OutputManager) -> CliResult<()> {
    output.success(&format!(
        "Added {} '{}' ({})",
        outcome.kind, outcome.name, outcome.type_name
    ))?;
    output.item(&format!("created {}", outcome.file_path.display()))?;

    if let Some(index) = &outcome.index_path {
        let verb = if outcome.index_updated {
            "updated"
        } else {
            "unchanged"
        };
        output.item(&format!("{verb} {}", index.display()))?;
    }

    if let Some(report) = &outcome.patch_report {
        output.item(&format!("patched {}", report.registry.display()))?;
        for (step, result) in [("import", &report.import), ("registration", &report.registration)] {
            if let StepOutcome::Skipped(reason) = result {
                output.warning(&format!("{step} not inserted: {reason}"))?;
            }
        }
    }

    if let Some(snapshot) = outcome.snapshot.as_ref().filter(|s| !s.is_empty()) {
        output.info(&format!("Backup saved to {}", snapshot.backup_root.display()))?;
    }
    Ok(())
}

fn print_dry_run(outcome: &AddOutcome, output: &OutputManager) -> CliResult<()> {
    output.header(&format!(
        "Dry run: would add {} '{}' ({})",
        outcome.kind, outcome.name, outcome.type_name
    ))?;
    output.item(&format!("create {}", outcome.file_path.display()))?;
    if let Some(index) = &outcome.index_path {
        output.item(&format!("append to {}", index.display()))?;
    }
    if let Some(registry) = &outcome.registry_path {
        output.item(&format!("patch {}", registry.display()))?;
    }
    output.info("No files were written.")?;
    Ok(())
}
