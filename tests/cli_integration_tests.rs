//! CLI Integration Tests
//!
//! Tests the CLI binary directly using assert_cmd to exercise main.rs code paths.

// The binary is not run during coverage builds
#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn xl() -> Command {
    let mut cmd = Command::cargo_bin("xl").unwrap();
    cmd.env_remove("XL_SEPARATOR")
        .env_remove("XL_SHEET")
        .env_remove("RUST_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    xl().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Row oriented Excel"))
        .stdout(predicate::str::contains("MODES"));
}

#[test]
fn test_cli_version() {
    xl().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xl"));
}

// ═══════════════════════════════════════════════════════════════════════════
// USAGE ERRORS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_no_mode_is_usage_error() {
    xl().assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_both_modes_is_usage_error() {
    xl().args(["-in", "a.xlsx", "-out", "b.xlsx"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_bad_base_option() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.xlsx");

    xl().args(["-out", path.to_str().unwrap(), "-b", "B"])
        .write_stdin("a\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid option: B"));
    assert!(!path.exists());
}

#[test]
fn test_base_past_sheet_end_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.xlsx");

    xl().args(["-out", path.to_str().unwrap(), "-b", "A,100000000000"])
        .write_stdin("a\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("past the last sheet row"));
    assert!(!path.exists());
}

#[test]
fn test_bad_column_label() {
    xl().args(["-in", "whatever.xlsx", "-b", "A1,2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not an alphabet"));
}

// ═══════════════════════════════════════════════════════════════════════════
// IMPORT / EXPORT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_import_then_export() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.xlsx");
    let file = path.to_str().unwrap();

    xl().args(["-out", file])
        .write_stdin("x y\nz w\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(path.exists());

    xl().args(["-in", file])
        .assert()
        .success()
        .stdout("x y\nz w\n");
}

#[test]
fn test_double_dash_flags() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.xlsx");
    let file = path.to_str().unwrap();

    xl().args(["--out", file, "--sep", ","])
        .write_stdin("1,2,3\n")
        .assert()
        .success();

    xl().args(["--in", file, "--sep", ";"])
        .assert()
        .success()
        .stdout("1;2;3\n");
}

#[test]
fn test_base_offset_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("offset.xlsx");
    let file = path.to_str().unwrap();

    xl().args(["-out", file, "-s", ",", "-b", "C,4"])
        .write_stdin("a,b\nc,d\n")
        .assert()
        .success();

    // Reading from A1 finds empty rows first and prints nothing
    xl().args(["-in", file, "-s", ","])
        .assert()
        .success()
        .stdout("");

    xl().args(["-in", file, "-s", ",", "-b", "c,4"])
        .assert()
        .success()
        .stdout("a,b\nc,d\n");

    // Numeric column labels are zero-based
    xl().args(["-in", file, "-s", ",", "-b", "3,4"])
        .assert()
        .success()
        .stdout("b\nd\n");
}

#[test]
fn test_separator_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("env.xlsx");
    let file = path.to_str().unwrap();

    xl().args(["-out", file])
        .env("XL_SEPARATOR", "|")
        .write_stdin("a|b\n")
        .assert()
        .success();

    xl().args(["-in", file, "-s", "-"])
        .assert()
        .success()
        .stdout("a-b\n");
}

#[test]
fn test_export_missing_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sheet.xlsx");
    let file = path.to_str().unwrap();

    xl().args(["-out", file]).write_stdin("a\n").assert().success();

    xl().args(["-in", file, "-S", "Nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("There is no sheet of 'Nope'"));

    xl().args(["-in", file, "-S", "sheet1"])
        .assert()
        .success()
        .stdout("a\n");
}

#[test]
fn test_export_nonexistent_file() {
    xl().args(["-in", "definitely-not-here.xlsx"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to open Excel file"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("verbose.xlsx");
    let file = path.to_str().unwrap();

    xl().args(["-out", file]).write_stdin("a b\n").assert().success();

    xl().args(["-in", file, "-v"])
        .assert()
        .success()
        .stdout("a b\n")
        .stderr(predicate::str::contains("exporting sheet"));
}
