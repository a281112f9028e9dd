//! Strings command implementation.
//!
//! This module implements the `strings` command, which infers and prints
//! the pattern common to a set of raw strings.

use crate::commands::{render_pattern, CaseMode, OutputFormat};
use crate::error::CliError;
use crate::utils::{collect_strings, load_configuration, resolve_width, GlobalOptions};
use clap::Args;
use pathpat::find_pattern_in_strings;

/// Summarize a set of raw strings.
#[derive(Args)]
pub struct StringsCommand {
    /// Values to summarize. With no arguments, one value per line is read
    /// from stdin.
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

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

impl StringsCommand {
    /// Execute the strings command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = pathpat::init_logger(global.verbose, global.quiet);

        let config = load_configuration(global)?;

        let inputs = collect_strings(&self.values)?;
        logger.info(&format!("collected {} value(s)", inputs.len()));

        let case = self
            .case
            .map_or_else(|| config.effective_case_sensitivity(), Into::into);
        let pattern = find_pattern_in_strings(&inputs, case).map_err(CliError::from)?;

        let width = resolve_width(self.width, &config);
        let detailed = !self.short && config.effective_detailed();
        println!(
            "{}",
            render_pattern(&pattern, self.format, width, detailed)
        );

        Ok(())
    }
}
