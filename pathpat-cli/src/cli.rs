//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, PathsCommand, StringsCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for summarizing the common structure of paths and strings.
#[derive(Parser)]
#[command(name = "pathpat")]
#[command(version, about = "Summarize common structure across paths or strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "PATHPAT_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Skip configuration files entirely
    #[arg(long, global = true, env = "PATHPAT_NO_CONFIG")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Summarize a set of filesystem paths
    Paths(PathsCommand),

    /// Summarize a set of raw strings
    Strings(StringsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
