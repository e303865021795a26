//! Tracing subscriber for the `mcpforge` binary.
//!
//! Events come from three crates. The core logs each patch step and snapshot,
//! the adapters log rendering and filesystem work, and the CLI logs dispatch.
//! All three share one level:
//!
//! | Flag(s)   | Level | What shows up                                   |
//! |-----------|-------|-------------------------------------------------|
//! | `--quiet` | error | failures only                                   |
//! | (none)    | warn  | skipped import/registration steps, restore warnings |
//! | `-v`      | info  | files written, index updated, snapshot taken    |
//! | `-vv`     | debug | every patch step and every restored entry       |
//! | `-vvv`    | trace | service spans with their kind/name/project      |
//!
//! `RUST_LOG` replaces the whole directive set when it is set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Targets that receive the verbosity level. Everything else stays at the
/// `EnvFilter` default (off).
const LOG_TARGETS: [&str; 3] = ["mcpforge", "mcpforge_core", "mcpforge_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(derive_level(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(args.verbose >= 2)
        .without_time()
        .with_ansi(use_ansi(args, std::io::stderr().is_terminal()))
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `target=level` for every workspace crate, comma separated.
fn directives(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Plain and JSON output keep stderr free of escape codes as well.
fn use_ansi(args: &GlobalArgs, stderr_is_terminal: bool) -> bool {
    let plain_format = matches!(args.output_format, OutputFormat::Plain | OutputFormat::Json);
    stderr_is_terminal && !args.no_color && !plain_format
}
