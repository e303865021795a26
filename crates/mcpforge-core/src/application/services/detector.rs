//! Project detection and name checks.
//!
//! Detection is read-only and fails soft: every problem becomes an entry in
//! [`ProjectContext::issues`] instead of an error.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{
        ComponentKind, DomainError, DomainValidator as validator, MANIFEST_FILE, PackageManifest,
        ProjectContext, REQUIRED_FILES, SERVER_DEPENDENCY, SOURCE_DIR,
    },
};

/// Outcome of [`ProjectDetector::validate_component_name`].
#[derive(Debug, Clone, PartialEq)]
pub struct NameValidation {
    pub valid: bool,
    pub error: Option<DomainError>,
    /// Kebab-case form of an accepted name.
    pub normalized: Option<String>,
}

impl NameValidation {
    pub fn into_result(self) -> Result<String, DomainError> {
        match (self.normalized, self.error) {
            (Some(name), None) => Ok(name),
            (_, Some(e)) => Err(e),
            (None, None) => Err(DomainError::InvalidComponentName {
                name: String::new(),
                reason: "name could not be normalized".into(),
            }),
        }
    }
}

/// Outcome of [`ProjectDetector::check_component_exists`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistenceCheck {
    pub exists: bool,
    pub existing_path: Option<PathBuf>,
}

/// Decides whether a directory is a generated MCP server project.
pub struct ProjectDetector {
    filesystem: Arc<dyn Filesystem>,
}

impl ProjectDetector {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Inspect `path`. Never fails; an invalid project carries its issues.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn detect(&self, path: &Path) -> ProjectContext {
        let project_path = path.to_path_buf();
        let source_root_path = project_path.join(SOURCE_DIR);
        let mut issues = Vec::new();

        let manifest = self.read_manifest(&project_path, &mut issues);
        if let Some(manifest) = &manifest {
            if !manifest.depends_on(SERVER_DEPENDENCY) {
                issues.push(format!(
                    "{MANIFEST_FILE} does not list {SERVER_DEPENDENCY} in dependencies"
                ));
            }
        }

        if !self.filesystem.is_dir(&source_root_path) {
            issues.push(format!("{SOURCE_DIR}/ directory not found"));
        } else {
            for file in REQUIRED_FILES {
                if !self.filesystem.exists(&source_root_path.join(file)) {
                    issues.push(format!("missing {SOURCE_DIR}/{file}"));
                }
            }
        }

        let project_name = manifest
            .as_ref()
            .and_then(|m| m.name.clone())
            .filter(|n| !n.trim().is_empty())
            .or_else(|| {
                project_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_default();

        for issue in &issues {
            debug!(issue = %issue, "Detection issue");
        }

        ProjectContext {
            is_valid_project: issues.is_empty(),
            project_path,
            source_root_path,
            project_name,
            manifest,
            issues,
        }
    }

    /// Check a user-supplied name against the naming rules for `kind`.
    pub fn validate_component_name(&self, name: &str, kind: ComponentKind) -> NameValidation {
        match validator::validate_component_name(name, kind) {
            Ok(normalized) => NameValidation {
                valid: true,
                error: None,
                normalized: Some(normalized),
            },
            Err(e) => NameValidation {
                valid: false,
                error: Some(e),
                normalized: None,
            },
        }
    }

    /// Whether the canonical file for `name` already exists.
    pub fn check_component_exists(
        &self,
        context: &ProjectContext,
        kind: ComponentKind,
        name: &str,
    ) -> ExistenceCheck {
        let path = context.component_path(kind, name);
        if self.filesystem.exists(&path) {
            ExistenceCheck {
                exists: true,
                existing_path: Some(path),
            }
        } else {
            ExistenceCheck {
                exists: false,
                existing_path: None,
            }
        }
    }

    fn read_manifest(&self, project: &Path, issues: &mut Vec<String>) -> Option<PackageManifest> {
        let path = project.join(MANIFEST_FILE);
        if !self.filesystem.exists(&path) {
            issues.push(format!("{MANIFEST_FILE} not found"));
            return None;
        }

        let content = match self.filesystem.read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Could not read manifest");
                issues.push(format!("{MANIFEST_FILE} could not be read: {e}"));
                return None;
            }
        };

        match PackageManifest::parse(&content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Could not parse manifest");
                issues.push(e.to_string());
                None
            }
        }
    }
}
