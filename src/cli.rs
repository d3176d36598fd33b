// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `release`.
///
/// Every flag is optional: with no arguments the built-in
/// `apibuilder-commons` plan is run in the current directory.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "release",
    version,
    about = "Tag and publish apibuilder-commons.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a release plan (TOML) that replaces the built-in plan.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory the release steps run in.
    ///
    /// Default: the current working directory.
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RELEASE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the steps that would run, but don't execute any commands.
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
