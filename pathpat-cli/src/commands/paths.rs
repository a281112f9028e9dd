//! Paths command implementation.
//!
//! This module implements the `paths` command, which infers and prints the
//! pattern common to a set of filesystem paths.

use crate::commands::{render_pattern, CaseMode, OutputFormat};
use crate::error::CliError;
use crate::utils::{collect_paths, load_configuration, resolve_width, GlobalOptions};
use clap::Args;
use pathpat::find_pattern_in_paths;
use std::path::PathBuf;

/// Summarize a set of filesystem paths.
#[derive(Args)]
pub struct PathsCommand {
    /// Paths to summarize; directory arguments expand to their entries.
    /// With no arguments, one path per line is read from stdin.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Recurse into directories when expanding them
    #[arg(long)]
    pub recursive: bool,

    /// Case sensitivity for comparisons
    #[arg(long, value_enum, ignore_case = true)]
    pub case: Option<CaseMode>,

    /// Maximum output width in columns
    #[arg(long, value_name = "COLS", env = "PATHPAT_WIDTH")]
    pub width: Option<usize>,

    /// Print only the single-line pattern
    #[arg(long)]
    pub short: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl PathsCommand {
    /// Execute the paths command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = pathpat::init_logger(global.verbose, global.quiet);

        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Collect inputs
        let inputs = collect_paths(&self.paths, self.recursive)?;
        logger.info(&format!("collected {} path(s)", inputs.len()));

        // 3. Infer the pattern
        let case = self
            .case
            .map_or_else(|| config.effective_case_sensitivity(), Into::into);
        let pattern = find_pattern_in_paths(&inputs, case).map_err(CliError::from)?;

        // 4. Render within the width budget
        let width = resolve_width(self.width, &config);
        let detailed = !self.short && config.effective_detailed();
        println!(
            "{}",
            render_pattern(&pattern, self.format, width, detailed)
        );

        Ok(())
    }
}
