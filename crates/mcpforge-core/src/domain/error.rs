// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside reports and re-raised after rollback)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid component name '{name}': {reason}")]
    InvalidComponentName { name: String, reason: String },

    #[error("Unknown component kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("Invalid registry setting '{value}' for {setting}")]
    InvalidSetting { setting: &'static str, value: String },

    // ========================================================================
    // Contract Violations
    // ========================================================================
    #[error("Invalid component template: {0}")]
    InvalidTemplate(String),

    #[error("Malformed package manifest: {reason}")]
    MalformedManifest { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidComponentName { reason, .. } => vec![
                format!("Name rejected: {}", reason),
                "Start with a letter; use letters, digits, '-' and '_'".into(),
                "Do not repeat the kind in the name (use 'weather', not 'weather-tool')".into(),
                "Pass --skip-validation to bypass these checks".into(),
            ],
            Self::UnknownKind { .. } => vec![
                "Supported kinds:".into(),
                "  • tool       - callable tool registered with the server".into(),
                "  • resource   - readable resource registered with the server".into(),
                "  • prompt     - prompt template registered with the server".into(),
                "  • service    - shared service class".into(),
                "  • transport  - custom transport implementation".into(),
                "  • util       - helper module".into(),
            ],
            Self::InvalidSetting { setting, .. } => vec![format!(
                "Check the '{}' value in your configuration file",
                setting
            )],
            Self::MalformedManifest { .. } => vec![
                "package.json could not be parsed".into(),
                "Fix the JSON syntax and try again".into(),
            ],
            Self::InvalidTemplate(_) => vec![
                "The component generator produced inconsistent output".into(),
                "This is a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidComponentName { .. } | Self::UnknownKind { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidSetting { .. } => ErrorCategory::Validation,
            Self::MalformedManifest { .. } => ErrorCategory::NotFound,
            Self::InvalidTemplate(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
