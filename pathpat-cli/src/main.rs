//! Main entry point for the pathpat CLI.
//!
//! This is the command-line interface for the pathpat pattern summarizer.
//! It provides commands for summarizing inputs:
//! - `paths`: infer the pattern common to a set of filesystem paths
//! - `strings`: infer the pattern common to a set of raw strings
//! - `completions`: generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = pathpat::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        no_config: cli.no_config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Paths(cmd) => cmd.execute(&global),
        cli::Command::Strings(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
