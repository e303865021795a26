use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    entities::ComponentTemplate, error::DomainError, naming, value_objects::ComponentKind,
};

/// Longest accepted component name, after whitespace normalization.
pub const MAX_NAME_LENGTH: usize = 50;

/// Names that collide with files or keywords every generated project uses.
pub const RESERVED_NAMES: &[&str] = &[
    "index", "server", "config", "main", "default", "export", "import",
];

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("valid name pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a user-supplied component name for `kind`.
    ///
    /// On success returns the kebab-case form used for file names
    /// (`"My Thing"` → `"my-thing"`).
    pub fn validate_component_name(name: &str, kind: ComponentKind) -> Result<String, DomainError> {
        let reject = |reason: String| DomainError::InvalidComponentName {
            name: name.to_string(),
            reason,
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(reject("name cannot be empty".into()));
        }

        let normalized = WHITESPACE.replace_all(trimmed, "-");

        if !NAME_PATTERN.is_match(&normalized) {
            return Err(reject(
                "must start with a letter and contain only letters, digits, '-' or '_'".into(),
            ));
        }

        if normalized.len() > MAX_NAME_LENGTH {
            return Err(reject(format!(
                "must be at most {MAX_NAME_LENGTH} characters"
            )));
        }

        let lower = normalized.to_ascii_lowercase();
        if RESERVED_NAMES.contains(&lower.as_str()) {
            return Err(reject(format!("'{lower}' is a reserved word")));
        }

        if ends_with_suffix(&normalized, kind) {
            return Err(reject(format!(
                "the '{}' suffix is added automatically; drop it from the name",
                kind.suffix()
            )));
        }

        Ok(naming::to_kebab_case(&normalized))
    }

    pub fn validate_template(template: &ComponentTemplate) -> Result<(), DomainError> {
        template.validate()
    }
}

/// `true` when `name` already ends in the kind's suffix word, either as a
/// separate word (`weather-tool`, `weather_TOOL`) or case-joined
/// (`weatherTool`, `Tool`).
fn ends_with_suffix(name: &str, kind: ComponentKind) -> bool {
    let suffix = kind.suffix();
    let lower = name.to_ascii_lowercase();
    let lower_suffix = suffix.to_ascii_lowercase();

    let separate = lower.ends_with(&format!("-{lower_suffix}"))
        || lower.ends_with(&format!("_{lower_suffix}"));
    let joined = name.ends_with(suffix);

    separate || joined || lower == lower_suffix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(name: &str, kind: ComponentKind) -> Result<String, DomainError> {
        DomainValidator::validate_component_name(name, kind)
    }

    #[test]
    fn whitespace_is_normalized_to_kebab() {
        assert_eq!(validate("My Thing", ComponentKind::Tool).unwrap(), "my-thing");
        assert_eq!(validate("  fetch   url ", ComponentKind::Tool).unwrap(), "fetch-url");
    }

    #[test]
    fn suffix_is_rejected_in_both_spellings() {
        assert!(validate("my-tool", ComponentKind::Tool).is_err());
        assert!(validate("my_tool", ComponentKind::Tool).is_err());
        assert!(validate("myTool", ComponentKind::Tool).is_err());
        assert!(validate("My Tool", ComponentKind::Tool).is_err());
        assert!(validate("tool", ComponentKind::Tool).is_err());
        // The suffix of another kind is fine.
        assert!(validate("my-tool", ComponentKind::Resource).is_ok());
        assert!(validate("userResource", ComponentKind::Resource).is_err());
    }

    #[test]
    fn empty_and_malformed_names_are_rejected() {
        assert!(validate("", ComponentKind::Tool).is_err());
        assert!(validate("   ", ComponentKind::Tool).is_err());
        assert!(validate("1password", ComponentKind::Tool).is_err());
        assert!(validate("-leading", ComponentKind::Tool).is_err());
        assert!(validate("dots.not.allowed", ComponentKind::Tool).is_err());
    }

    #[test]
    fn length_limit_is_enforced() {
        let ok = "a".repeat(MAX_NAME_LENGTH);
        let too_long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate(&ok, ComponentKind::Service).is_ok());
        assert!(validate(&too_long, ComponentKind::Service).is_err());
    }

    #[test]
    fn reserved_words_are_rejected_case_insensitively() {
        for word in RESERVED_NAMES {
            assert!(validate(word, ComponentKind::Tool).is_err(), "{word}");
        }
        assert!(validate("Index", ComponentKind::Util).is_err());
    }

    #[test]
    fn rejection_reports_original_name() {
        let err = validate("weather-tool", ComponentKind::Tool).unwrap_err();
        match err {
            DomainError::InvalidComponentName { name, reason } => {
                assert_eq!(name, "weather-tool");
                assert!(reason.contains("Tool"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
