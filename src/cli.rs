// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `certseq`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "certseq",
    version,
    about = "Step through certification checks in dependency order.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    ///
    /// Default: `Plan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Plan.toml")]
    pub plan: String,

    /// Only present items tagged with this category (e.g. "laptop").
    #[arg(long, value_name = "TAG")]
    pub category: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CERTSEQ_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the resolved order, but don't prompt.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
