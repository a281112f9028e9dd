//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, input collection, and width resolution.

use crate::error::CliError;
use pathpat::{Config, ConfigBuilder};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,

    /// Skip configuration files entirely.
    pub no_config: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from files and environment variables with the
/// precedence documented in [`pathpat::config`]. `--no-config` restricts
/// the sources to environment variables and defaults.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_user_dir(dir);
    }
    if global.no_config {
        builder = builder.skip_files();
    }
    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the rendering width: flag (or `PATHPAT_WIDTH`) over config over
/// the built-in default.
pub fn resolve_width(flag: Option<usize>, config: &Config) -> usize {
    flag.unwrap_or_else(|| config.effective_max_width())
}

/// Collect the input path list for the `paths` command.
///
/// Each argument that names a directory expands to the entries below it:
/// one level by default, the whole tree with `recursive`. Everything else
/// (existing files and paths that do not exist at all) is used literally,
/// so a path list can be summarized without touching the filesystem. With
/// no arguments, one path per line is read from stdin.
pub fn collect_paths(args: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, CliError> {
    let mut paths = Vec::new();

    if args.is_empty() {
        for line in read_stdin_lines()? {
            paths.push(PathBuf::from(line));
        }
    } else {
        for arg in args {
            if arg.is_dir() {
                expand_directory(arg, recursive, &mut paths);
            } else {
                paths.push(arg.clone());
            }
        }
    }

    if paths.is_empty() {
        return Err(CliError::InvalidArguments(
            "no input paths (pass paths as arguments or one per line on stdin)".to_string(),
        ));
    }
    Ok(paths)
}

/// Expand a directory argument into the paths below it.
fn expand_directory(dir: &Path, recursive: bool, out: &mut Vec<PathBuf>) {
    let mut entries: Vec<PathBuf> = if recursive {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .collect()
    } else {
        match std::fs::read_dir(dir) {
            Ok(read) => read.filter_map(Result::ok).map(|e| e.path()).collect(),
            Err(_) => Vec::new(),
        }
    };
    // Directory iteration order is platform-defined; sort for stable output.
    entries.sort();
    out.extend(entries);
}

/// Collect the input value list for the `strings` command.
pub fn collect_strings(args: &[String]) -> Result<Vec<String>, CliError> {
    let values = if args.is_empty() {
        read_stdin_lines()?
    } else {
        args.to_vec()
    };

    if values.is_empty() {
        return Err(CliError::InvalidArguments(
            "no input strings (pass values as arguments or one per line on stdin)".to_string(),
        ));
    }
    Ok(values)
}

/// Read non-empty lines from stdin.
fn read_stdin_lines() -> Result<Vec<String>, CliError> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
