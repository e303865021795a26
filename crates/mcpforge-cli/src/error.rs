//! Error handling for the mcpforge CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use mcpforge_core::error::CoreError;

// Re-export so callers only need `use crate::error::*`.
pub use mcpforge_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `config get` was asked for a key that does not exist.
    #[error("Unknown configuration key '{key}'")]
    UnknownConfigKey { key: String },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `mcpforge-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Run 'mcpforge config path' to see which file is read".into(),
                "Use 'mcpforge init --force' to rewrite a default config".into(),
            ],

            Self::UnknownConfigKey { .. } => vec![
                "Known keys:".into(),
                "  • defaults.author".into(),
                "  • output.no_color".into(),
                "  • registry.anchor    (end-of-statement | end-of-line)".into(),
                "  • registry.style     (auto | single | paired)".into(),
                "  • backup.dir_name".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every core failure exits with 1 whatever its category, so scripts
    /// driving `add` only need to check for non-zero.
    ///
    /// | Error            | Code |
    /// |------------------|------|
    /// | Core / I/O       |  1   |
    /// | Invalid input    |  2   |
    /// | Unknown key      |  3   |
    /// | Configuration    |  4   |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) | Self::IoError { .. } => 1,
            _ => match self.category() {
                ErrorCategory::UserError => 2,
                ErrorCategory::NotFound => 3,
                ErrorCategory::Configuration => 4,
                ErrorCategory::Internal => 1,
            },
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        if let Some(note) = self.rollback_note() {
            output.push_str(&format!("\n  {}\n", note.yellow()));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        if let Some(note) = self.rollback_note() {
            out.push_str(&format!("\n  {note}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Extra line for failures that happened after the project was touched.
    fn rollback_note(&self) -> Option<&'static str> {
        match self {
            Self::Core(core) if core.is_post_mutation() => Some(
                "Registry files were restored from the backup taken before this run; \
                 the new component file may remain.",
            ),
            _ => None,
        }
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
///
/// Two concrete impls are provided:
/// - `Result<T, std::io::Error>` → `CliError::IoError`
/// - `Result<T, anyhow::Error>`  → `CliError::ConfigError`
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for anyhow::Result<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {e:#}", f().into()),
            source: Some(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use mcpforge_core::{application::ApplicationError, domain::DomainError};

    fn unknown_kind() -> CliError {
        CliError::Core(CoreError::Domain(DomainError::UnknownKind {
            kind: "widget".into(),
        }))
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn unknown_kind_suggestions_list_kinds() {
        let suggestions = unknown_kind().suggestions();
        assert!(suggestions.iter().any(|s| s.contains("tool")));
        assert!(suggestions.iter().any(|s| s.contains("transport")));
    }

    #[test]
    fn unknown_config_key_lists_known_keys() {
        let err = CliError::UnknownConfigKey { key: "x.y".into() };
        assert!(err.suggestions().iter().any(|s| s.contains("registry.anchor")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn every_core_error_exits_with_one() {
        let errors = [
            unknown_kind(),
            CliError::Core(CoreError::Application(ApplicationError::ComponentExists {
                path: PathBuf::from("/p/src/tools/a-tool.ts"),
            })),
            CliError::Core(CoreError::Application(ApplicationError::NotAValidProject {
                path: PathBuf::from("/p"),
                issues: vec!["package.json not found".into()],
            })),
            CliError::Core(CoreError::Internal {
                message: "x".into(),
            }),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = unknown_kind().format_plain(false);
        assert!(s.contains("Error: Unknown component kind 'widget'"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = unknown_kind().format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn post_mutation_failure_mentions_restore() {
        let err = CliError::Core(CoreError::Application(ApplicationError::FilesystemError {
            path: PathBuf::from("/p/src/core/tool-registry.ts"),
            reason: "disk full".into(),
        }));
        assert!(err.format_plain(false).contains("restored from the backup"));
        assert!(!unknown_kind().format_plain(false).contains("restored"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_anyhow_error() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("bad toml"));
        let cli = result.with_cli_context(|| "serialising config");
        assert!(matches!(cli, Err(CliError::ConfigError { .. })));
    }
}
