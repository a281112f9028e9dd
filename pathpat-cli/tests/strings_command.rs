//! Integration tests for the `strings` command.
//!
//! These tests verify pattern inference over raw string values, including:
//! - Split priority (underscore before hyphen)
//! - Integer sequence and non-sequence wording
//! - Frequency ordering in detail lines
//! - stdin input and JSON output

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Decomposition behavior
// ============================================================================

/// Underscore splits win over hyphen splits.
#[test]
fn test_split_priority_underscore_before_hyphen() {
    let env = TestEnv::new();
    let output = env.strings_output(
        &["aaa_bbb_ccc_dddd-eeee", "four_three_two-one"],
        &["--short"],
    );
    assert_eq!(output, "${0}_${1}_${2}-${3}e\n");
}

/// Leading digit runs are peeled before constant prefixes.
#[test]
fn test_integer_peeled_before_prefix() {
    let env = TestEnv::new();
    // The shared trailing "a" of alpha/beta is still peeled by symmetry.
    let output = env.strings_output(&["12alpha", "7beta"], &["--short"]);
    assert_eq!(output, "${0}${1}a\n");
}

/// A shared textual prefix becomes a constant.
#[test]
fn test_constant_prefix() {
    let env = TestEnv::new();
    let output = env.strings_output(&["run-07", "run-23"], &["--short"]);
    assert_eq!(output, "run-${0}\n");
}

// ============================================================================
// Detail wording
// ============================================================================

/// Contiguous, duplicate-free digit sets describe as a sequence.
#[test]
fn test_integer_sequence_wording() {
    let env = TestEnv::new();
    let output = env.strings_output(&["f2", "f3", "f4", "f5"], &[]);
    assert!(output.contains("${0} = an integer sequence from 2 to 5 inclusive"));
}

/// A gap in the digit set must not be called a sequence.
#[test]
fn test_integer_gap_not_a_sequence() {
    let env = TestEnv::new();
    let output = env.strings_output(&["f2", "f3", "f4", "f6"], &[]);
    assert!(!output.contains("sequence"));
    assert!(output.contains("${0} = 4 unique integers between 2 and 6 inclusive"));
}

/// Equal counts are listed most-frequent first with descending-value ties.
#[test]
fn test_string_detail_frequency_order() {
    let env = TestEnv::new();
    let output = env.strings_output(&["x-aaaa", "x-bbb", "x-ccc"], &[]);
    assert!(output.contains("\"ccc\" (1) | \"bbb\" (1) | \"aaaa\" (1)"));
}

/// Repeated values aggregate into one entry with a count.
#[test]
fn test_string_detail_counts() {
    let env = TestEnv::new();
    let output = env.strings_output(&["k-abc", "k-abc", "k-xyz"], &[]);
    assert!(output.contains("\"abc\" (2) | \"xyz\" (1)"));
}

/// Detail lines degrade to the count form inside a narrow budget.
#[test]
fn test_narrow_width_degrades_listing() {
    let env = TestEnv::new();
    let output = env.strings_output(
        &["x-firstvalue", "x-secondvalue", "x-thirdvalue"],
        &["--width", "32"],
    );
    assert!(output.contains("3 unique strings"));
    for line in output.lines() {
        assert!(line.chars().count() <= 32, "too wide: {line:?}");
    }
}

// ============================================================================
// Input and output plumbing
// ============================================================================

/// With no arguments, one value per line is read from stdin.
#[test]
fn test_values_from_stdin() {
    let env = TestEnv::new();

    env.command()
        .arg("strings")
        .arg("--short")
        .write_stdin("item1\nitem2\nitem3\n")
        .assert()
        .success()
        .stdout(predicate::eq("item${0}\n"));
}

/// Empty stdin is invalid arguments, exit code 4.
#[test]
fn test_no_input_fails_with_exit_code_4() {
    let env = TestEnv::new();

    env.command()
        .arg("strings")
        .write_stdin("")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

/// JSON output carries the pattern and its detail lines.
#[test]
fn test_json_output() {
    let env = TestEnv::new();

    let output = env
        .command()
        .arg("strings")
        .arg("--format")
        .arg("json")
        .arg("f2")
        .arg("f3")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["pattern"], "f${0}");
    assert_eq!(
        value["details"][0],
        "${0} = an integer sequence from 2 to 3 inclusive"
    );
}

/// Case-insensitive comparison folds values that differ only in case.
#[test]
fn test_case_flag() {
    let env = TestEnv::new();

    let insensitive = env.strings_output(&["Task9", "task3"], &["--case", "insensitive", "--short"]);
    assert_eq!(insensitive, "Task${0}\n");

    // Sensitive comparison still finds the shared "ask" run at offset 1.
    let sensitive = env.strings_output(&["Task9", "task3"], &["--case", "sensitive", "--short"]);
    assert_eq!(sensitive, "${0}ask${1}\n");
}
