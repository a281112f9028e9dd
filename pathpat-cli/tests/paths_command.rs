//! Integration tests for the `paths` command.
//!
//! These tests verify pattern inference over path arguments, including:
//! - The full detailed output for a mixed constant/integer/string listing
//! - stdin input and directory expansion
//! - Case sensitivity flags
//! - Width-budgeted rendering
//! - JSON output

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// End-to-end output
// ============================================================================

/// The canonical mixed listing: shared directory, constant prefix, integer
/// run, varying names, shared extension.
#[test]
#[cfg(unix)]
fn test_detailed_output_for_mixed_listing() {
    let env = TestEnv::new();

    env.command()
        .arg("paths")
        .arg("commonFirst/PREFIX_5671_aaaa/file21.txt")
        .arg("commonFirst/PREFIX_2991_bbb/file23.txt")
        .arg("commonFirst/PREFIX_43_ccc/VERYDIFFERENTNAME.txt")
        .assert()
        .success()
        .stdout(predicate::eq(concat!(
            "commonFirst/PREFIX_${0}_${1}/${2}.txt\n",
            "${0} = 3 unique integers between 43 and 5671 inclusive\n",
            "${1} = \"ccc\" (1) | \"bbb\" (1) | \"aaaa\" (1)\n",
            "${2} = \"file23\" (1) | \"file21\" (1) | \"VERYDIFFERENTNAME\" (1)\n",
        )));
}

/// `--short` prints only the single-line pattern.
#[test]
#[cfg(unix)]
fn test_short_output() {
    let env = TestEnv::new();

    env.command()
        .arg("paths")
        .arg("--short")
        .arg("commonFirst/PREFIX_5671_aaaa/file21.txt")
        .arg("commonFirst/PREFIX_2991_bbb/file23.txt")
        .arg("commonFirst/PREFIX_43_ccc/VERYDIFFERENTNAME.txt")
        .assert()
        .success()
        .stdout(predicate::eq("commonFirst/PREFIX_${0}_${1}/${2}.txt\n"));
}

// ============================================================================
// Input collection
// ============================================================================

/// With no arguments, one path per line is read from stdin.
#[test]
#[cfg(unix)]
fn test_paths_from_stdin() {
    let env = TestEnv::new();

    env.command()
        .arg("paths")
        .arg("--short")
        .write_stdin("runs/a_1.log\nruns/b_2.log\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("runs/"));
}

/// A directory argument expands to its (sorted) entries.
#[test]
fn test_directory_expansion() {
    let env = TestEnv::new();
    env.create_file("data/shot_1.txt");
    env.create_file("data/shot_2.txt");
    let dir = env.path().join("data");

    env.command()
        .arg("paths")
        .arg("--short")
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("shot_${0}"));
}

/// `--recursive` walks the whole tree and only collects files.
#[test]
fn test_recursive_directory_expansion() {
    let env = TestEnv::new();
    env.create_file("tree/sub1/item_1.dat");
    env.create_file("tree/sub2/item_2.dat");
    let dir = env.path().join("tree");

    env.command()
        .arg("paths")
        .arg("--short")
        .arg("--recursive")
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("item_${1}"));
}

/// Nonexistent paths are summarized literally; the filesystem is optional.
#[test]
#[cfg(unix)]
fn test_literal_paths_need_not_exist() {
    let env = TestEnv::new();

    env.command()
        .arg("paths")
        .arg("--short")
        .arg("ghost/run-1.tmp")
        .arg("ghost/run-2.tmp")
        .assert()
        .success()
        .stdout(predicate::eq("ghost/run-${0}${1}\n"));
}

/// Empty stdin is invalid arguments, exit code 4.
#[test]
fn test_no_input_fails_with_exit_code_4() {
    let env = TestEnv::new();

    env.command()
        .arg("paths")
        .write_stdin("")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

// ============================================================================
// Case sensitivity
// ============================================================================

/// Insensitive comparison folds directories that differ only in case.
#[test]
#[cfg(unix)]
fn test_case_insensitive_folds_directories() {
    let env = TestEnv::new();

    env.command()
        .arg("paths")
        .arg("--short")
        .arg("--case")
        .arg("insensitive")
        .arg("DIR/a")
        .arg("dir/a")
        .assert()
        .success()
        .stdout(predicate::eq("DIR/${0}\n"));
}

/// Sensitive comparison keeps them apart.
#[test]
#[cfg(unix)]
fn test_case_sensitive_keeps_directories_apart() {
    let env = TestEnv::new();

    env.command()
        .arg("paths")
        .arg("--short")
        .arg("--case")
        .arg("sensitive")
        .arg("DIR/a")
        .arg("dir/a")
        .assert()
        .success()
        .stdout(predicate::eq("${0}/a\n"));
}

// ============================================================================
// Width budget and formats
// ============================================================================

/// Every output line stays within the requested width.
#[test]
fn test_width_budget_is_respected() {
    let env = TestEnv::new();
    let width = 30;

    let output = env
        .command()
        .arg("paths")
        .arg("--width")
        .arg(width.to_string())
        .arg("box/alpha-omega-item.txt")
        .arg("box/beta-gamma-object.txt")
        .arg("box/delta-epsilon-artifact.txt")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for line in stdout.lines() {
        assert!(
            line.chars().count() <= width,
            "line exceeds width {width}: {line:?}"
        );
    }
}

/// JSON output carries the pattern and its detail lines.
#[test]
#[cfg(unix)]
fn test_json_output() {
    let env = TestEnv::new();

    let output = env
        .command()
        .arg("paths")
        .arg("--format")
        .arg("json")
        .arg("logs/a_1.log")
        .arg("logs/b_2.log")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(value["pattern"].as_str().unwrap().starts_with("logs/"));
    assert!(value["details"].as_array().is_some());
}
