//! Core domain layer for mcpforge.
//!
//! Pure logic only: component kinds and their conventions, name
//! validation, the data handed between services, and the text surgery that
//! patches registry files. All I/O goes through the ports defined in the
//! application layer.
//!
//! - **No I/O**: functions take and return strings and paths
//! - **Value objects are `Copy`**: `ComponentKind`, `InsertAnchor`, `RegistrationStyle`
//! - **Surgery is pure**: every edit returns new text plus an outcome
pub mod entities;
pub mod error;
pub mod naming;
pub mod surgery;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    BackupEntry, BackupSnapshot, ComponentTemplate, GenerateOptions, PackageManifest,
    ProjectContext, RegistryUpdate, RenderContext,
    project::{INDEX_FILE, MANIFEST_FILE, REQUIRED_FILES, SERVER_DEPENDENCY, SOURCE_DIR},
};

pub use error::{DomainError, ErrorCategory};

pub use surgery::{BraceScanLocator, Edit, Region, RegionLocator, RegistrationPlan, StepOutcome};

pub use value_objects::{ComponentKind, InsertAnchor, RegistrationStyle, RegistrySpec};

pub use validation::{DomainValidator, MAX_NAME_LENGTH, RESERVED_NAMES};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn kind_parses_singular_and_plural() {
        assert_eq!(ComponentKind::from_str("tool").unwrap(), ComponentKind::Tool);
        assert_eq!(ComponentKind::from_str("Prompts").unwrap(), ComponentKind::Prompt);
        assert_eq!(ComponentKind::from_str(" utils ").unwrap(), ComponentKind::Util);
        assert!(matches!(
            ComponentKind::from_str("widget"),
            Err(DomainError::UnknownKind { .. })
        ));
    }

    #[test]
    fn only_indexed_kinds_have_registries() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.has_index(), kind.registry().is_some(), "{kind}");
            assert_eq!(
                kind.has_index(),
                ComponentKind::INDEXED.contains(&kind),
                "{kind}"
            );
        }
    }

    #[test]
    fn registry_prefixes_follow_collection() {
        let spec = ComponentKind::Resource.registry().unwrap();
        assert_eq!(spec.setter_prefix(), "this.resources.set(");
        assert_eq!(spec.getter_prefix(), "this.resources.get(");
        assert_eq!(spec.init_method, "initializeResources");
    }

    #[test]
    fn anchor_and_style_parse_from_config_strings() {
        assert_eq!(
            InsertAnchor::from_str("end-of-line").unwrap(),
            InsertAnchor::EndOfLine
        );
        assert_eq!(
            RegistrationStyle::from_str("legacy").unwrap(),
            RegistrationStyle::Paired
        );
        assert!(RegistrationStyle::from_str("sometimes").is_err());
    }

    #[test]
    fn auto_style_resolves_from_body() {
        let getter = "this.tools.get(";
        assert_eq!(
            RegistrationStyle::Auto.resolve("this.tools.get('a')?.initialize?.();", getter),
            RegistrationStyle::Paired
        );
        assert_eq!(
            RegistrationStyle::Auto.resolve("this.tools.set('a', a);", getter),
            RegistrationStyle::Single
        );
        assert_eq!(
            RegistrationStyle::Paired.resolve("", getter),
            RegistrationStyle::Paired
        );
    }
}
