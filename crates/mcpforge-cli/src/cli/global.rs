//! Flags accepted by every subcommand.
//!
//! Besides verbosity and presentation, `--anchor` and `--style` override the
//! `[registry]` section of the loaded configuration for one invocation.

use std::path::PathBuf;

use clap::Args;
use mcpforge_core::domain::{DomainError, InsertAnchor, RegistrationStyle};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Skipped patch steps, warnings and errors
    -v      - Files written, snapshots taken and restored
    -vv     - Every patch step and snapshot entry
    -vvv    - Spans of every service call"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// `NO_COLOR=1` works too; an empty or falsey value is ignored.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE (must exist)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,

    #[arg(
        long = "anchor",
        global = true,
        value_name = "ANCHOR",
        value_parser = parse_anchor,
        help = "Where registrations go after the last call: end-of-statement or end-of-line"
    )]
    pub anchor: Option<InsertAnchor>,

    #[arg(
        long = "style",
        global = true,
        value_name = "STYLE",
        value_parser = parse_style,
        help = "Registration style: auto, single or paired"
    )]
    pub style: Option<RegistrationStyle>,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colors when stdout is a terminal.
    #[default]
    Auto,
    Human,
    Plain,
    /// One JSON document on stdout.
    Json,
}

fn parse_anchor(value: &str) -> Result<InsertAnchor, String> {
    value.parse().map_err(|e: DomainError| e.to_string())
}

fn parse_style(value: &str) -> Result<RegistrationStyle, String> {
    value.parse().map_err(|e: DomainError| e.to_string())
}
