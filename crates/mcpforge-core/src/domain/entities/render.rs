use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::Datelike;
use regex::{Captures, Regex};

use crate::domain::{
    entities::component::GenerateOptions, naming, value_objects::ComponentKind,
};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z0-9_]+)\}\}").expect("valid placeholder pattern"));

/// Context for component template rendering.
///
/// A **Value Object** holding every variable a built-in component template
/// may reference. Immutable after creation; `with_variable` returns a new
/// instance.
///
/// ## Built-in Variables
///
/// | Variable        | Example                  |
/// |-----------------|--------------------------|
/// | `NAME`          | "get-weather"            |
/// | `NAME_PASCAL`   | "GetWeather"             |
/// | `NAME_CAMEL`    | "getWeather"             |
/// | `TYPE_NAME`     | "GetWeatherTool"         |
/// | `INSTANCE_NAME` | "getWeatherTool"         |
/// | `FILE_STEM`     | "get-weather-tool"       |
/// | `KIND`          | "tool"                   |
/// | `DESCRIPTION`   | user text or a default   |
/// | `AUTHOR`        | user text or empty       |
/// | `PROJECT_NAME`  | from `package.json`      |
/// | `YEAR`          | current year             |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn for_component(kind: ComponentKind, name: &str, options: &GenerateOptions) -> Self {
        let mut vars = HashMap::new();

        vars.insert("NAME".to_string(), naming::to_kebab_case(name));
        vars.insert("NAME_PASCAL".to_string(), naming::to_pascal_case(name));
        vars.insert("NAME_CAMEL".to_string(), naming::to_camel_case(name));
        vars.insert("TYPE_NAME".to_string(), naming::type_name(kind, name));
        vars.insert("INSTANCE_NAME".to_string(), naming::instance_name(kind, name));
        vars.insert("FILE_STEM".to_string(), naming::file_stem(kind, name));
        vars.insert("KIND".to_string(), kind.as_str().to_string());
        vars.insert(
            "DESCRIPTION".to_string(),
            options
                .description
                .clone()
                .unwrap_or_else(|| format!("{} {}", naming::to_pascal_case(name), kind.as_str())),
        );
        vars.insert(
            "AUTHOR".to_string(),
            options.author.clone().unwrap_or_default(),
        );
        vars.insert("PROJECT_NAME".to_string(), options.project_name.clone());
        vars.insert("YEAR".to_string(), chrono::Local::now().year().to_string());

        Self { variables: vars }
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// A single pass over the template: substituted values are never
    /// scanned again. Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures<'_>| match self.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> GenerateOptions {
        GenerateOptions {
            description: None,
            author: Some("Ada".into()),
            project_name: "weather-server".into(),
        }
    }

    #[test]
    fn derives_identifier_variables() {
        let ctx = RenderContext::for_component(ComponentKind::Tool, "get weather", &options());
        assert_eq!(ctx.get("NAME"), Some("get-weather"));
        assert_eq!(ctx.get("TYPE_NAME"), Some("GetWeatherTool"));
        assert_eq!(ctx.get("INSTANCE_NAME"), Some("getWeatherTool"));
        assert_eq!(ctx.get("FILE_STEM"), Some("get-weather-tool"));
        assert_eq!(ctx.get("DESCRIPTION"), Some("GetWeather tool"));
    }

    #[test]
    fn renders_known_and_keeps_unknown_placeholders() {
        let ctx = RenderContext::for_component(ComponentKind::Prompt, "review", &options())
            .with_variable("EXTRA", "x");
        let out = ctx.render("class {{TYPE_NAME}} /* {{AUTHOR}} {{EXTRA}} {{MISSING}} */");
        assert_eq!(out, "class ReviewPrompt /* Ada x {{MISSING}} */");
    }

    #[test]
    fn placeholders_inside_values_are_not_expanded() {
        let opts = GenerateOptions {
            description: Some("Echoes {{NAME}} and {{TYPE_NAME}}".into()),
            ..options()
        };
        let ctx = RenderContext::for_component(ComponentKind::Tool, "echo", &opts);
        for _ in 0..8 {
            assert_eq!(
                ctx.render("{{TYPE_NAME}}: {{DESCRIPTION}}"),
                "EchoTool: Echoes {{NAME}} and {{TYPE_NAME}}"
            );
        }
    }
}
