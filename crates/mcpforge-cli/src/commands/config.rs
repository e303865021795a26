//! `mcpforge config` - inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = config
                .to_toml()
                .with_cli_context(|| "Failed to render configuration")?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.author" => Ok(config.defaults.author.clone().unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "registry.anchor" => Ok(config.registry.anchor.to_string()),
        "registry.style" => Ok(config.registry.style.to_string()),
        "backup.dir_name" => Ok(config.backup.dir_name.clone()),
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mcpforge_core::domain::InsertAnchor;

    #[test]
    fn get_registry_anchor() {
        let mut cfg = AppConfig::default();
        cfg.registry.anchor = InsertAnchor::EndOfLine;
        assert_eq!(get_config_value(&cfg, "registry.anchor").unwrap(), "end-of-line");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "defaults.lang"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn get_backup_dir_default() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "backup.dir_name").unwrap(),
            ".mcpforge/backups"
        );
    }
}
