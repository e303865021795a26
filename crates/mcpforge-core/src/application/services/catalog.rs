//! Component Catalog - the `list` use case.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::{ComponentKind, INDEX_FILE, ProjectContext},
    error::CoreResult,
};

/// Existing components of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindListing {
    pub kind: ComponentKind,
    /// File stems, sorted, e.g. `weather-tool`.
    pub components: Vec<String>,
}

pub struct ComponentCatalog {
    filesystem: Arc<dyn Filesystem>,
}

impl ComponentCatalog {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// One listing per kind, in [`ComponentKind::ALL`] order. Kinds whose
    /// directory is missing get an empty listing.
    pub fn list(&self, context: &ProjectContext) -> CoreResult<Vec<KindListing>> {
        ComponentKind::ALL
            .into_iter()
            .map(|kind| {
                Ok(KindListing {
                    kind,
                    components: self.components_of(context, kind)?,
                })
            })
            .collect()
    }

    fn components_of(&self, context: &ProjectContext, kind: ComponentKind) -> CoreResult<Vec<String>> {
        let dir = context.component_dir(kind);
        if !self.filesystem.is_dir(&dir) {
            debug!(dir = %dir.display(), "No component directory");
            return Ok(Vec::new());
        }

        let mut names: Vec<String> = self
            .filesystem
            .list_dir(&dir)?
            .into_iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == "ts"))
            .filter(|p| p.file_name().is_some_and(|n| n != INDEX_FILE))
            .filter(|p| !self.filesystem.is_dir(p))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        Ok(names)
    }
}
