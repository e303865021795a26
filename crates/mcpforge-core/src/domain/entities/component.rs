use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::ComponentKind};

/// Inputs to component generation beyond kind and name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub description: Option<String>,
    pub author: Option<String>,
    pub project_name: String,
}

/// Text fragments that wire a new component into its registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryUpdate {
    pub registry_kind: ComponentKind,
    /// A complete single-line import statement.
    pub import_line: String,
    /// The call that instantiates and registers the component.
    pub registration_line: String,
    /// Follow-up call used by registries that initialize components
    /// explicitly after registering them.
    pub initialization_line: String,
}

/// Everything needed to add a component to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentTemplate {
    pub kind: ComponentKind,
    /// Kebab-case component name.
    pub name: String,
    /// Exported class name, e.g. `WeatherTool`.
    pub type_name: String,
    /// File name inside the kind's directory, e.g. `weather-tool.ts`.
    pub file_name: String,
    pub file_content: String,
    /// Export statement for the kind's index file; empty for kinds without one.
    pub index_fragment: String,
    pub registry_update: Option<RegistryUpdate>,
}

impl ComponentTemplate {
    /// Check the generator's output contract.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.file_content.trim().is_empty() {
            return Err(DomainError::InvalidTemplate(format!(
                "{} '{}' has no file content",
                self.kind, self.name
            )));
        }

        if !self.kind.has_index() {
            if !self.index_fragment.is_empty() || self.registry_update.is_some() {
                return Err(DomainError::InvalidTemplate(format!(
                    "kind '{}' has no index file but the template wires one",
                    self.kind
                )));
            }
            return Ok(());
        }

        if self.index_fragment.trim().lines().count() != 1 {
            return Err(DomainError::InvalidTemplate(
                "index fragment must be a single export statement".into(),
            ));
        }

        let update = self.registry_update.as_ref().ok_or_else(|| {
            DomainError::InvalidTemplate(format!(
                "kind '{}' requires a registry update",
                self.kind
            ))
        })?;

        if update.registry_kind != self.kind {
            return Err(DomainError::InvalidTemplate(format!(
                "registry update targets '{}' but the component is a '{}'",
                update.registry_kind, self.kind
            )));
        }

        for (label, line) in [
            ("import", &update.import_line),
            ("registration", &update.registration_line),
            ("initialization", &update.initialization_line),
        ] {
            if line.trim().is_empty() || line.contains('\n') {
                return Err(DomainError::InvalidTemplate(format!(
                    "{label} line must be a single non-empty line"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool_template() -> ComponentTemplate {
        ComponentTemplate {
            kind: ComponentKind::Tool,
            name: "weather".into(),
            type_name: "WeatherTool".into(),
            file_name: "weather-tool.ts".into(),
            file_content: "export class WeatherTool {}\n".into(),
            index_fragment: "export { WeatherTool } from './weather-tool.js';".into(),
            registry_update: Some(RegistryUpdate {
                registry_kind: ComponentKind::Tool,
                import_line: "import { WeatherTool } from '../tools/weather-tool.js';".into(),
                registration_line: "this.tools.set('weather', new WeatherTool());".into(),
                initialization_line: "await this.tools.get('weather')?.initialize?.();".into(),
            }),
        }
    }

    #[test]
    fn well_formed_template_validates() {
        assert!(tool_template().validate().is_ok());
    }

    #[test]
    fn kind_without_index_must_not_wire_registry() {
        let mut template = tool_template();
        template.kind = ComponentKind::Service;
        assert!(template.validate().is_err());

        template.index_fragment.clear();
        template.registry_update = None;
        assert!(template.validate().is_ok());
    }

    #[test]
    fn multi_line_import_is_rejected() {
        let mut template = tool_template();
        if let Some(update) = template.registry_update.as_mut() {
            update.import_line = "import {\n  WeatherTool\n} from '../tools/weather-tool.js';".into();
        }
        assert!(template.validate().is_err());
    }

    #[test]
    fn mismatched_registry_kind_is_rejected() {
        let mut template = tool_template();
        if let Some(update) = template.registry_update.as_mut() {
            update.registry_kind = ComponentKind::Prompt;
        }
        assert!(template.validate().is_err());
    }
}
