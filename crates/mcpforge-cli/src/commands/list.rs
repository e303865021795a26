//! `mcpforge list` - show the components of a project, grouped by kind.

use mcpforge_core::application::{ComponentCatalog, KindListing, ProjectDetector};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::{cli::ListArgs, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct ListDocument<'a> {
    project: &'a str,
    valid: bool,
    issues: &'a [String],
    kinds: &'a [KindListing],
}

/// Never fails on an invalid project: it reports the problem and exits 0.
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let root = super::project_root(&args.path)?;
    let fs = super::local_filesystem();
    let context = ProjectDetector::new(fs.clone()).detect(&root);

    let listings = if context.is_valid_project {
        ComponentCatalog::new(fs)
            .list(&context)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Could not read component directories");
                Vec::new()
            })
    } else {
        Vec::new()
    };

    if output.is_json() {
        output.json(&ListDocument {
            project: &context.project_name,
            valid: context.is_valid_project,
            issues: &context.issues,
            kinds: &listings,
        })?;
        return Ok(());
    }

    if !context.is_valid_project {
        output.warning(&format!(
            "{} is not a valid project",
            context.project_path.display()
        ))?;
        for issue in &context.issues {
            output.item(issue)?;
        }
        return Ok(());
    }

    output.header(&format!("Components in {}", context.project_name))?;
    for listing in &listings {
        output.print(&format!("{} ({})", listing.kind, listing.components.len()))?;
        for name in &listing.components {
            output.item(name)?;
        }
    }
    Ok(())
}
