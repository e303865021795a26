//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mcpforge",
    bin_name = "mcpforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Extend generated MCP servers with new components",
    long_about = "mcpforge adds tools, resources, prompts and supporting modules \
                  to a generated TypeScript MCP server, wiring each one into its \
                  registry with a backup taken first.",
    after_help = "EXAMPLES:\n\
        \x20 mcpforge add tool get-weather --description \"Current weather\"\n\
        \x20 mcpforge add resource forecast --path ./weather-server\n\
        \x20 mcpforge list\n\
        \x20 mcpforge completions bash > /usr/share/bash-completion/completions/mcpforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a component to an existing project.
    #[command(
        visible_alias = "a",
        about = "Add a component to the project",
        after_help = "KINDS:\n\
            \x20 tool, resource, prompt    wired into their registry and index\n\
            \x20 service, transport, util  file only\n\n\
            EXAMPLES:\n\
            \x20 mcpforge add tool get-weather\n\
            \x20 mcpforge add prompt \"code review\" --author \"Ada\"\n\
            \x20 mcpforge add service cache --dry-run"
    )]
    Add(AddArgs),

    /// List the components of a project.
    #[command(
        visible_alias = "ls",
        about = "List existing components",
        after_help = "EXAMPLES:\n\
            \x20 mcpforge list\n\
            \x20 mcpforge list --path ./weather-server --output-format json"
    )]
    List(ListArgs),

    /// List registry backups taken before earlier additions.
    #[command(about = "List registry backups")]
    Backups(BackupsArgs),

    /// Initialise an mcpforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 mcpforge init           # default location\n\
            \x20 mcpforge init --local   # .mcpforge.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mcpforge completions bash > ~/.local/share/bash-completion/completions/mcpforge\n\
            \x20 mcpforge completions zsh  > ~/.zfunc/_mcpforge\n\
            \x20 mcpforge completions fish > ~/.config/fish/completions/mcpforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the mcpforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mcpforge config get registry.anchor\n\
            \x20 mcpforge config list"
    )]
    Config(ConfigCommands),
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `mcpforge add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Component kind.  Parsed by the core so that an unknown kind is
    /// reported with the list of valid ones.
    #[arg(value_name = "KIND", help = "tool | resource | prompt | service | transport | util")]
    pub kind: String,

    /// Component name, without the kind suffix.
    #[arg(value_name = "NAME", help = "Component name, e.g. get-weather")]
    pub name: String,

    #[arg(short = 'd', long = "description", value_name = "TEXT", help = "Component description")]
    pub description: Option<String>,

    #[arg(
        short = 'a',
        long = "author",
        value_name = "TEXT",
        help = "Author (defaults to defaults.author in the config)"
    )]
    pub author: Option<String>,

    /// Accept the name as given; it is still converted to kebab-case.
    #[arg(long = "skip-validation", help = "Skip name validation")]
    pub skip_validation: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "Project directory"
    )]
    pub path: PathBuf,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `mcpforge list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "Project directory"
    )]
    pub path: PathBuf,
}

// ── backups ───────────────────────────────────────────────────────────────────

/// Arguments for `mcpforge backups`.
#[derive(Debug, Args)]
pub struct BackupsArgs {
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "Project directory"
    )]
    pub path: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `mcpforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.mcpforge.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mcpforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `mcpforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `registry.anchor`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_add_command() {
        let cli = Cli::parse_from([
            "mcpforge",
            "add",
            "tool",
            "get-weather",
            "--description",
            "Current weather",
            "--dry-run",
        ]);
        let Commands::Add(args) = cli.command else {
            panic!("expected Add command");
        };
        assert_eq!(args.kind, "tool");
        assert_eq!(args.name, "get-weather");
        assert_eq!(args.description.as_deref(), Some("Current weather"));
        assert!(args.dry_run);
        assert!(!args.skip_validation);
        assert_eq!(args.path, PathBuf::from("."));
    }

    #[test]
    fn unknown_kind_reaches_the_core() {
        // Kind is a free string at this layer.
        let cli = Cli::try_parse_from(["mcpforge", "add", "widget", "x"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mcpforge", "list", "--path", "/tmp/p", "-vv"]);
        assert_eq!(cli.global.verbose, 2);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.path, PathBuf::from("/tmp/p"));
    }

    #[test]
    fn add_requires_name() {
        assert!(Cli::try_parse_from(["mcpforge", "add", "tool"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["mcpforge", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
