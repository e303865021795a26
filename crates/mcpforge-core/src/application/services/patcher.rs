//! Registry Patcher - wires a generated component into its registry file.
//!
//! Reads the registry, applies the import and registration edits from
//! `crate::domain::surgery`, and writes the file back when anything changed.
//! Both edits are idempotent, so patching twice leaves the file as after
//! the first run.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        BraceScanLocator, ComponentKind, InsertAnchor, ProjectContext, RegionLocator,
        RegistrationPlan, RegistrationStyle, RegistryUpdate, StepOutcome,
        surgery::{insert_import, insert_registration},
    },
    error::{CoreError, CoreResult},
};

/// User-tunable insertion behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatcherSettings {
    pub anchor: InsertAnchor,
    pub style: RegistrationStyle,
}

/// One registry file and how to edit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryTarget {
    pub kind: ComponentKind,
    pub path: PathBuf,
    pub setter_prefix: String,
    pub getter_prefix: String,
    pub init_method: &'static str,
    pub anchor: InsertAnchor,
    pub style: RegistrationStyle,
}

/// What patching one registry did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub registry: PathBuf,
    pub import: StepOutcome,
    pub registration: StepOutcome,
}

impl PatchReport {
    /// Whether the file was rewritten.
    pub fn changed(&self) -> bool {
        self.import.is_inserted() || self.registration.is_inserted()
    }
}

pub struct RegistryPatcher {
    filesystem: Arc<dyn Filesystem>,
    locator: Box<dyn RegionLocator>,
    settings: PatcherSettings,
}

impl RegistryPatcher {
    pub fn new(filesystem: Arc<dyn Filesystem>, settings: PatcherSettings) -> Self {
        Self::with_locator(filesystem, settings, Box::new(BraceScanLocator::new()))
    }

    pub fn with_locator(
        filesystem: Arc<dyn Filesystem>,
        settings: PatcherSettings,
        locator: Box<dyn RegionLocator>,
    ) -> Self {
        Self {
            filesystem,
            locator,
            settings,
        }
    }

    pub fn settings(&self) -> PatcherSettings {
        self.settings
    }

    /// Registry file and conventions for `kind` in `context`.
    pub fn target(&self, context: &ProjectContext, kind: ComponentKind) -> CoreResult<RegistryTarget> {
        let (Some(spec), Some(path)) = (kind.registry(), context.registry_path(kind)) else {
            return Err(CoreError::Internal {
                message: format!("kind '{kind}' has no registry"),
            });
        };

        Ok(RegistryTarget {
            kind,
            path,
            setter_prefix: spec.setter_prefix(),
            getter_prefix: spec.getter_prefix(),
            init_method: spec.init_method,
            anchor: self.settings.anchor,
            style: self.settings.style,
        })
    }

    /// Insert `update`'s import and registration into its registry.
    ///
    /// A missing registry file or a failed write is an error; structural
    /// misses inside the file are reported as skipped steps.
    #[instrument(skip_all, fields(kind = %update.registry_kind))]
    pub fn patch(&self, context: &ProjectContext, update: &RegistryUpdate) -> CoreResult<PatchReport> {
        let target = self.target(context, update.registry_kind)?;

        if !self.filesystem.exists(&target.path) {
            return Err(ApplicationError::RegistryNotFound { path: target.path }.into());
        }
        let original = self.filesystem.read_to_string(&target.path)?;

        let imported = insert_import(&original, &update.import_line);
        log_step("import", &target, &imported.outcome);

        let plan = RegistrationPlan {
            method: target.init_method,
            setter_prefix: &target.setter_prefix,
            getter_prefix: &target.getter_prefix,
            registration_line: &update.registration_line,
            initialization_line: &update.initialization_line,
            anchor: target.anchor,
            style: target.style,
        };
        let registered = insert_registration(&imported.text, self.locator.as_ref(), &plan);
        log_step("registration", &target, &registered.outcome);

        let report = PatchReport {
            registry: target.path.clone(),
            import: imported.outcome,
            registration: registered.outcome,
        };

        if report.changed() {
            self.filesystem.write_file(&target.path, &registered.text)?;
            info!(path = %target.path.display(), "Registry updated");
        } else {
            debug!(path = %target.path.display(), "Registry unchanged");
        }

        Ok(report)
    }
}

fn log_step(step: &str, target: &RegistryTarget, outcome: &StepOutcome) {
    match outcome {
        StepOutcome::Inserted => debug!(step, path = %target.path.display(), "Inserted"),
        StepOutcome::AlreadyPresent => {
            debug!(step, path = %target.path.display(), "Already present")
        }
        StepOutcome::Skipped(reason) => {
            warn!(step, path = %target.path.display(), reason = %reason, "Skipped")
        }
    }
}
