//! Command implementations.
//!
//! Each subcommand lives in its own module with a clap `Args` struct and an
//! `execute` method taking the global options.

mod completions;
mod paths;
mod strings;

pub use completions::CompletionsCommand;
pub use paths::PathsCommand;
pub use strings::StringsCommand;

use clap::ValueEnum;
use pathpat::{CaseSensitivity, Pattern};

/// Case sensitivity mode exposed on the command line.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CaseMode {
    /// Characters compare equal only when identical
    Sensitive,
    /// Characters compare equal ignoring case
    Insensitive,
    /// Use the host platform's filesystem convention
    Auto,
}

impl From<CaseMode> for CaseSensitivity {
    fn from(mode: CaseMode) -> Self {
        match mode {
            CaseMode::Sensitive => CaseSensitivity::Sensitive,
            CaseMode::Insensitive => CaseSensitivity::Insensitive,
            CaseMode::Auto => CaseSensitivity::SystemDefault,
        }
    }
}

/// Output format for pattern descriptions.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text (human-readable)
    Text,
    /// JSON object with the pattern and its detail lines
    Json,
}

/// Render a resolved pattern in the requested format.
pub(crate) fn render_pattern(
    pattern: &Pattern,
    format: OutputFormat,
    width: usize,
    detailed: bool,
) -> String {
    let description = if detailed {
        pattern.describe_detailed(width)
    } else {
        pattern.describe_short()
    };
    match format {
        OutputFormat::Text => description,
        OutputFormat::Json => {
            let mut lines = description.lines();
            let short = lines.next().unwrap_or_default();
            let details: Vec<&str> = lines.collect();
            serde_json::json!({
                "pattern": short,
                "details": details,
            })
            .to_string()
        }
    }
}
