//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`PatcherSettings`]
//! and backup directory derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags `--anchor` and `--style` ([`AppConfig::apply_overrides`])
//! 2. Environment variables, `MCPFORGE_<SECTION>__<KEY>`
//! 3. File given with `--config`
//! 4. `.mcpforge.toml` in the current directory
//! 5. User config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use mcpforge_core::{
    application::{PatcherSettings, DEFAULT_BACKUP_DIR},
    domain::{InsertAnchor, RegistrationStyle},
};
use serde::{Deserialize, Serialize};

use crate::cli::GlobalArgs;

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".mcpforge.toml";

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "MCPFORGE";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new components.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// How registries are patched.
    pub registry: RegistryConfig,
    /// Where snapshots are kept.
    pub backup: BackupConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Author recorded in generated files when `--author` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub anchor: InsertAnchor,
    pub style: RegistrationStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    /// Snapshot directory, relative to the project root.
    pub dir_name: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            dir_name: DEFAULT_BACKUP_DIR.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration by layering every source over the defaults.
    ///
    /// `config_file` is the path passed via `--config`; unlike the implicit
    /// locations it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(toml_file(&Self::config_path(), false))
            .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE), false));

        if let Some(path) = config_file {
            builder = builder.add_source(toml_file(path, true));
        }

        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mcpforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "mcpforge", "mcpforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Apply the per-invocation registry flags on top of the loaded layers.
    pub fn apply_overrides(&mut self, args: &GlobalArgs) {
        if let Some(anchor) = args.anchor {
            self.registry.anchor = anchor;
        }
        if let Some(style) = args.style {
            self.registry.style = style;
        }
    }

    /// Patch behaviour handed to the registry patcher.
    pub fn patcher_settings(&self) -> PatcherSettings {
        PatcherSettings {
            anchor: self.registry.anchor,
            style: self.registry.style,
        }
    }

    /// Render as TOML, the format `init` writes.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }
}

fn toml_file(path: &Path, required: bool) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path.to_path_buf())
        .format(config::FileFormat::Toml)
        .required(required)
}
