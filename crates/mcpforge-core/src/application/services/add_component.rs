//! Add Component Service - the `add` use case.
//!
//! Workflow:
//! 1. Detect the project
//! 2. Validate and normalize the name (unless skipped)
//! 3. Refuse to overwrite an existing component
//! 4. Generate the component
//! 5. Snapshot the registry files
//! 6. Write the component file, update the index, patch the registry
//!
//! A failure in step 6 restores the snapshot. The component file itself is
//! left in place.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ComponentGenerator, Filesystem},
        services::{BackupManager, PatchReport, ProjectDetector, RegistryPatcher},
    },
    domain::{
        BackupSnapshot, ComponentKind, ComponentTemplate, DomainError,
        DomainValidator as validator, GenerateOptions, ProjectContext, naming,
    },
    error::{CoreError, CoreResult},
};

/// Per-invocation options of [`AddComponentService::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOptions {
    pub description: Option<String>,
    pub author: Option<String>,
    /// Accept the name as given, only converting it to kebab-case.
    pub skip_validation: bool,
    /// Stop after generation and report what would be written.
    pub dry_run: bool,
}

/// What [`AddComponentService::add`] did (or, for a dry run, would do).
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub kind: ComponentKind,
    pub name: String,
    pub type_name: String,
    pub file_path: PathBuf,
    pub index_path: Option<PathBuf>,
    pub index_updated: bool,
    pub registry_path: Option<PathBuf>,
    pub patch_report: Option<PatchReport>,
    pub snapshot: Option<BackupSnapshot>,
    pub dry_run: bool,
    pub template: ComponentTemplate,
}

/// Result of the mutation phase, before it is folded into [`AddOutcome`].
struct Applied {
    index_updated: bool,
    patch_report: Option<PatchReport>,
}

pub struct AddComponentService {
    filesystem: Arc<dyn Filesystem>,
    generator: Arc<dyn ComponentGenerator>,
    detector: ProjectDetector,
    backups: BackupManager,
    patcher: RegistryPatcher,
}

impl AddComponentService {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        generator: Arc<dyn ComponentGenerator>,
        backups: BackupManager,
        patcher: RegistryPatcher,
    ) -> Self {
        Self {
            detector: ProjectDetector::new(filesystem.clone()),
            filesystem,
            generator,
            backups,
            patcher,
        }
    }

    /// Add a component of `kind` named `name` to the project at `project`.
    #[instrument(
        skip_all,
        fields(kind = %kind, name = %name, project = %project.display())
    )]
    pub fn add(
        &self,
        project: &Path,
        kind: ComponentKind,
        name: &str,
        options: &AddOptions,
    ) -> CoreResult<AddOutcome> {
        let context = self.detector.detect(project);
        if !context.is_valid_project {
            return Err(ApplicationError::NotAValidProject {
                path: context.project_path,
                issues: context.issues,
            }
            .into());
        }

        let name = self.normalize_name(name, kind, options.skip_validation)?;

        let existing = self.detector.check_component_exists(&context, kind, &name);
        if let Some(path) = existing.existing_path.filter(|_| existing.exists) {
            return Err(ApplicationError::ComponentExists { path }.into());
        }

        let template = self.generate(&context, kind, &name, options)?;
        info!(type_name = %template.type_name, "Component generated");

        let mut outcome = AddOutcome {
            kind,
            name,
            type_name: template.type_name.clone(),
            file_path: context.component_dir(kind).join(&template.file_name),
            index_path: context.index_path(kind),
            index_updated: false,
            registry_path: template
                .registry_update
                .as_ref()
                .and_then(|u| context.registry_path(u.registry_kind)),
            patch_report: None,
            snapshot: None,
            dry_run: options.dry_run,
            template,
        };

        if options.dry_run {
            info!("Dry run, nothing written");
            return Ok(outcome);
        }

        let snapshot = self.backups.backup(&context)?;

        match self.apply(&context, &outcome) {
            Ok(applied) => {
                outcome.index_updated = applied.index_updated;
                outcome.patch_report = applied.patch_report;
                outcome.snapshot = Some(snapshot);
                info!(file = %outcome.file_path.display(), "Component added");
                Ok(outcome)
            }
            Err(e) => {
                warn!(error = %e, "Add failed, restoring registry snapshot");
                self.backups.restore(&snapshot)?;
                Err(e)
            }
        }
    }

    fn normalize_name(
        &self,
        name: &str,
        kind: ComponentKind,
        skip_validation: bool,
    ) -> CoreResult<String> {
        if !skip_validation {
            return Ok(self
                .detector
                .validate_component_name(name, kind)
                .into_result()?);
        }

        let kebab = naming::to_kebab_case(name);
        if kebab.is_empty() {
            return Err(DomainError::InvalidComponentName {
                name: name.to_string(),
                reason: "name cannot be empty".into(),
            }
            .into());
        }
        Ok(kebab)
    }

    fn generate(
        &self,
        context: &ProjectContext,
        kind: ComponentKind,
        name: &str,
        options: &AddOptions,
    ) -> CoreResult<ComponentTemplate> {
        let generate_options = GenerateOptions {
            description: options.description.clone(),
            author: options.author.clone(),
            project_name: context.project_name.clone(),
        };

        let template = self
            .generator
            .generate(kind, name, &generate_options)
            .map_err(|e| match e {
                CoreError::Domain(_) => e,
                other => ApplicationError::GenerationFailed {
                    reason: other.to_string(),
                }
                .into(),
            })?;
        validator::validate_template(&template)?;
        Ok(template)
    }

    fn apply(&self, context: &ProjectContext, outcome: &AddOutcome) -> CoreResult<Applied> {
        let template = &outcome.template;

        self.filesystem
            .create_dir_all(&context.component_dir(template.kind))?;
        self.filesystem
            .write_file(&outcome.file_path, &template.file_content)?;
        info!(path = %outcome.file_path.display(), "Component file written");

        let index_updated = match &outcome.index_path {
            Some(index) if !template.index_fragment.is_empty() => {
                self.update_index(index, &template.type_name, &template.index_fragment)?
            }
            _ => false,
        };

        let patch_report = template
            .registry_update
            .as_ref()
            .map(|update| self.patcher.patch(context, update))
            .transpose()?;

        Ok(Applied {
            index_updated,
            patch_report,
        })
    }

    /// Append `fragment` to the index unless `type_name` is already exported.
    fn update_index(&self, index: &Path, type_name: &str, fragment: &str) -> CoreResult<bool> {
        let mut content = if self.filesystem.exists(index) {
            self.filesystem.read_to_string(index)?
        } else {
            String::new()
        };

        if exports_identifier(&content, type_name)? {
            warn!(path = %index.display(), type_name, "Index already exports component, skipped");
            return Ok(false);
        }

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(fragment.trim_end());
        content.push('\n');

        self.filesystem.write_file(index, &content)?;
        info!(path = %index.display(), "Index updated");
        Ok(true)
    }
}

/// Whether `content` names `identifier` as a whole word. `MyWeatherTool`
/// does not export `WeatherTool`.
fn exports_identifier(content: &str, identifier: &str) -> CoreResult<bool> {
    let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(identifier))).map_err(|e| {
        CoreError::Internal {
            message: format!("invalid identifier pattern: {e}"),
        }
    })?;
    Ok(pattern.is_match(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_match_is_whole_word() {
        let index = "export { EchoTool } from './echo-tool.js';\nexport { MyWeatherTool } from './my-weather-tool.js';\n";
        assert!(exports_identifier(index, "EchoTool").unwrap());
        assert!(exports_identifier(index, "MyWeatherTool").unwrap());
        assert!(!exports_identifier(index, "WeatherTool").unwrap());
        assert!(!exports_identifier(index, "Echo").unwrap());
    }
}
