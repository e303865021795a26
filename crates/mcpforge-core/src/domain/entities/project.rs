use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, naming, value_objects::ComponentKind};

/// Manifest file every generated project carries at its root.
pub const MANIFEST_FILE: &str = "package.json";

/// Dependency that marks a manifest as belonging to an MCP server.
pub const SERVER_DEPENDENCY: &str = "@modelcontextprotocol/sdk";

/// Source root, relative to the project directory.
pub const SOURCE_DIR: &str = "src";

/// Files (relative to the source root) every generated project must have:
/// the entry point, the core server module and the three index files.
pub const REQUIRED_FILES: &[&str] = &[
    "index.ts",
    "core/server.ts",
    "tools/index.ts",
    "resources/index.ts",
    "prompts/index.ts",
];

/// Name of the per-kind file re-exporting every component of that kind.
pub const INDEX_FILE: &str = "index.ts";

/// The subset of `package.json` the detector cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        serde_json::from_str(content).map_err(|e| DomainError::MalformedManifest {
            reason: e.to_string(),
        })
    }

    /// Whether `package` is a runtime dependency.
    pub fn depends_on(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
    }
}

/// Result of inspecting a directory.
///
/// Created fresh on every detection; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub is_valid_project: bool,
    pub project_path: PathBuf,
    pub source_root_path: PathBuf,
    pub project_name: String,
    pub manifest: Option<PackageManifest>,
    /// Why detection failed; empty for a valid project.
    pub issues: Vec<String>,
}

impl ProjectContext {
    /// Directory holding components of `kind`.
    pub fn component_dir(&self, kind: ComponentKind) -> PathBuf {
        self.source_root_path.join(kind.directory())
    }

    /// Canonical file path of the component `name` of `kind`.
    pub fn component_path(&self, kind: ComponentKind, name: &str) -> PathBuf {
        self.component_dir(kind).join(naming::file_name(kind, name))
    }

    /// Index file of `kind`, if the kind has one.
    pub fn index_path(&self, kind: ComponentKind) -> Option<PathBuf> {
        kind.has_index()
            .then(|| self.component_dir(kind).join(INDEX_FILE))
    }

    /// Registry file of `kind`, if the kind has one.
    pub fn registry_path(&self, kind: ComponentKind) -> Option<PathBuf> {
        kind.registry()
            .map(|spec| self.source_root_path.join(spec.file))
    }

    /// Path of `path` relative to the source root, when it lives under it.
    pub fn relative_to_source<'a>(&self, path: &'a Path) -> Option<&'a Path> {
        path.strip_prefix(&self.source_root_path).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ProjectContext {
        ProjectContext {
            is_valid_project: true,
            project_path: PathBuf::from("/work/weather-server"),
            source_root_path: PathBuf::from("/work/weather-server/src"),
            project_name: "weather-server".into(),
            manifest: None,
            issues: Vec::new(),
        }
    }

    #[test]
    fn manifest_parses_dependencies() {
        let manifest = PackageManifest::parse(
            r#"{
                "name": "weather-server",
                "version": "1.0.0",
                "dependencies": { "@modelcontextprotocol/sdk": "^1.0.0", "zod": "^3.0.0" },
                "devDependencies": { "typescript": "^5.0.0" }
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("weather-server"));
        assert!(manifest.depends_on(SERVER_DEPENDENCY));
        assert!(!manifest.depends_on("typescript"));
        assert!(manifest.dev_dependencies.contains_key("typescript"));
    }

    #[test]
    fn manifest_without_dependencies_parses() {
        let manifest = PackageManifest::parse(r#"{ "name": "bare" }"#).unwrap();
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(matches!(
            PackageManifest::parse("{ not json"),
            Err(DomainError::MalformedManifest { .. })
        ));
    }

    #[test]
    fn paths_follow_kind_conventions() {
        let ctx = context();
        assert_eq!(
            ctx.component_path(ComponentKind::Tool, "get weather"),
            PathBuf::from("/work/weather-server/src/tools/get-weather-tool.ts")
        );
        assert_eq!(
            ctx.index_path(ComponentKind::Prompt),
            Some(PathBuf::from("/work/weather-server/src/prompts/index.ts"))
        );
        assert_eq!(ctx.index_path(ComponentKind::Service), None);
        assert_eq!(
            ctx.registry_path(ComponentKind::Resource),
            Some(PathBuf::from(
                "/work/weather-server/src/core/resource-registry.ts"
            ))
        );
        assert_eq!(ctx.registry_path(ComponentKind::Util), None);
    }
}
