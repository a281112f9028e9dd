//! Build script for pathpat-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathpat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Summarize common structure across paths or strings")
        .long_about(
            "Command-line tool for inferring a compact pattern describing the common \
             structure and variation across a set of file paths or strings",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("PATHPAT_CONFIG_DIR"),
        )
        .arg(
            Arg::new("no-config")
                .long("no-config")
                .help("Skip configuration files entirely")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("PATHPAT_NO_CONFIG"),
        )
        .subcommands(vec![
            Command::new("paths")
                .about("Summarize a set of filesystem paths")
                .long_about(
                    "Infer and print the pattern common to a set of filesystem paths; \
                     directory arguments expand to their entries",
                ),
            Command::new("strings")
                .about("Summarize a set of raw strings")
                .long_about("Infer and print the pattern common to a set of raw strings"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main pathpat.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathpat.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
