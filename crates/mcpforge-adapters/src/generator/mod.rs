//! Component generator backed by built-in TypeScript templates.

mod templates;

use mcpforge_core::{
    application::ports::ComponentGenerator,
    domain::{ComponentKind, ComponentTemplate, GenerateOptions, RegistryUpdate, RenderContext},
    error::CoreResult,
};
use tracing::{debug, instrument};

/// Renders one built-in template per component kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptGenerator;

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ComponentGenerator for TypeScriptGenerator {
    #[instrument(skip(self, options))]
    fn generate(
        &self,
        kind: ComponentKind,
        name: &str,
        options: &GenerateOptions,
    ) -> CoreResult<ComponentTemplate> {
        let base = RenderContext::for_component(kind, name, options);
        let description = base.get("DESCRIPTION").unwrap_or_default().to_string();
        let author_tag = match options.author.as_deref().map(str::trim) {
            Some(author) if !author.is_empty() => {
                format!("\n * @author {}", escape_doc_comment(author))
            }
            _ => String::new(),
        };
        let ctx = base
            .with_variable("DESCRIPTION_LITERAL", escape_single_quoted(&description))
            .with_variable("DESCRIPTION_DOC", escape_doc_comment(&description))
            .with_variable("AUTHOR_TAG", author_tag)
            .with_variable("DIRECTORY", kind.directory());

        let type_name = ctx.get("TYPE_NAME").unwrap_or_default().to_string();
        let file_stem = ctx.get("FILE_STEM").unwrap_or_default().to_string();

        let (index_fragment, registry_update) = if kind.has_index() {
            (
                ctx.render(templates::INDEX_EXPORT),
                Some(RegistryUpdate {
                    registry_kind: kind,
                    import_line: ctx.render(templates::REGISTRY_IMPORT),
                    registration_line: ctx.render(templates::REGISTRY_SET),
                    initialization_line: ctx.render(templates::REGISTRY_INITIALIZE),
                }),
            )
        } else {
            (String::new(), None)
        };

        debug!(type_name = %type_name, "Rendered component");

        Ok(ComponentTemplate {
            kind,
            name: ctx.get("NAME").unwrap_or_default().to_string(),
            type_name,
            file_name: format!("{file_stem}.ts"),
            file_content: ctx.render(templates::file_template(kind)),
            index_fragment,
            registry_update,
        })
    }
}

/// Escape text for use inside a single-quoted TypeScript string.
fn escape_single_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Keep text from closing the surrounding `/** */` block.
fn escape_doc_comment(text: &str) -> String {
    text.replace("*/", "*\\/").replace('\r', "").replace('\n', "\n * ")
}

#[cfg(test)]
mod tests {
    use mcpforge_core::domain::DomainValidator;

    use super::*;

    fn options() -> GenerateOptions {
        GenerateOptions {
            description: Some("Fetches the user's weather".into()),
            author: Some("Ada".into()),
            project_name: "weather-server".into(),
        }
    }

    #[test]
    fn tool_wiring_lines() {
        let t = TypeScriptGenerator::new()
            .generate(ComponentKind::Tool, "get-weather", &options())
            .unwrap();

        assert_eq!(t.type_name, "GetWeatherTool");
        assert_eq!(t.file_name, "get-weather-tool.ts");
        assert_eq!(
            t.index_fragment,
            "export { GetWeatherTool } from './get-weather-tool.js';"
        );
        let update = t.registry_update.as_ref().unwrap();
        assert_eq!(
            update.import_line,
            "import { GetWeatherTool } from '../tools/get-weather-tool.js';"
        );
        assert_eq!(
            update.registration_line,
            "this.tools.set('get-weather', new GetWeatherTool());"
        );
        assert_eq!(
            update.initialization_line,
            "await this.tools.get('get-weather')?.initialize?.();"
        );
    }

    #[test]
    fn file_content_is_fully_rendered() {
        for kind in ComponentKind::ALL {
            let t = TypeScriptGenerator::new()
                .generate(kind, "weather", &options())
                .unwrap();
            assert!(!t.file_content.contains("{{"), "{kind}: {}", t.file_content);
            assert!(t.file_content.contains(&format!("export class {}", t.type_name)));
            assert!(DomainValidator::validate_template(&t).is_ok(), "{kind}");
        }
    }

    #[test]
    fn description_is_escaped_in_string_literals() {
        let t = TypeScriptGenerator::new()
            .generate(ComponentKind::Prompt, "review", &options())
            .unwrap();
        assert!(t.file_content.contains("readonly description = 'Fetches the user\\'s weather';"));
        assert!(t.file_content.contains(" * Fetches the user's weather\n"));
        assert!(t.file_content.contains(" * @author Ada\n"));
    }

    #[test]
    fn description_cannot_close_the_doc_comment() {
        let opts = GenerateOptions {
            description: Some("Matches */ and {{NAME}}\nacross lines".into()),
            ..options()
        };
        let t = TypeScriptGenerator::new()
            .generate(ComponentKind::Tool, "grep", &opts)
            .unwrap();

        let header_end = t.file_content.find(" */").unwrap();
        let header = &t.file_content[..header_end];
        assert!(header.contains(" * Matches *\\/ and {{NAME}}\n * across lines\n"));
    }

    #[test]
    fn kinds_without_index_have_no_wiring() {
        let t = TypeScriptGenerator::new()
            .generate(ComponentKind::Transport, "websocket", &GenerateOptions::default())
            .unwrap();
        assert!(t.index_fragment.is_empty());
        assert!(t.registry_update.is_none());
        assert!(!t.file_content.contains("@author"));
    }
}
