//! End-to-end CLI tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn csvgap() -> Command {
    Command::cargo_bin("csvgap").unwrap()
}

#[test]
fn finds_rows_missing_from_reference() {
    let dir = TempDir::new().unwrap();
    let reference = write_csv(&dir, "contacted.csv", "name\nJohn\nMary\nBob\n");
    let target = write_csv(&dir, "leads.csv", "name\nJohn\nMary\nSarah\nMike\n");

    csvgap()
        .arg("--reference")
        .arg(&reference)
        .arg("--target")
        .arg(&target)
        .args(["--reference-column", "name"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 2 rows missing"))
        .stdout(predicate::str::contains("Match rate: 50.0%"))
        .stdout(predicate::str::contains("Sarah"))
        .stdout(predicate::str::contains("Mike"));
}

#[test]
fn all_rows_matched_exits_zero() {
    let dir = TempDir::new().unwrap();
    let reference = write_csv(&dir, "a.csv", "name\nJohn\nMary\n");
    let target = write_csv(&dir, "b.csv", "name\nMary\nJohn\n");

    csvgap()
        .arg("--reference")
        .arg(&reference)
        .arg("--target")
        .arg(&target)
        .args(["--reference-column", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All 2 target rows were found in the reference group.",
        ));
}

#[test]
fn csv_format_emits_the_artifact() {
    let dir = TempDir::new().unwrap();
    let reference = write_csv(&dir, "a.csv", "name\nJohn\n");
    let target = write_csv(&dir, "b.csv", "name,age\nJohn,30\nJohn,31\nSarah,22\n");

    csvgap()
        .arg("--reference")
        .arg(&reference)
        .arg("--target")
        .arg(&target)
        .args(["--reference-column", "name", "--format", "csv"])
        .assert()
        .code(1)
        .stdout("name,age\nSarah,22\n");
}

#[test]
fn output_flag_writes_result_file() {
    let dir = TempDir::new().unwrap();
    let reference = write_csv(&dir, "a.csv", "name\nJohn\n");
    let target = write_csv(&dir, "b.csv", "name\nJohn\nSarah\nMike\n");
    let out = dir.path().join("rows_not_in_group_a.csv");

    csvgap()
        .arg("--reference")
        .arg(&reference)
        .arg("--target")
        .arg(&target)
        .args(["--reference-column", "name"])
        .arg("--output")
        .arg(&out)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Wrote 2 rows"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "name\nSarah\nMike\n");
}

#[test]
fn output_directory_gets_default_artifact_name() {
    use csvgap::output::{CSV_MIME_TYPE, DEFAULT_ARTIFACT_NAME};

    let dir = TempDir::new().unwrap();
    let reference = write_csv(&dir, "a.csv", "name\nJohn\n");
    let target = write_csv(&dir, "b.csv", "name\nJohn\nSarah\n");

    csvgap()
        .arg("--reference")
        .arg(&reference)
        .arg("--target")
        .arg(&target)
        .args(["--reference-column", "name"])
        .arg("--output")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(DEFAULT_ARTIFACT_NAME));

    let artifact = dir.path().join(DEFAULT_ARTIFACT_NAME);
    assert_eq!(fs::read_to_string(&artifact).unwrap(), "name\nSarah\n");
    assert_eq!(CSV_MIME_TYPE, "text/csv");
}

#[test]
fn multiple_files_per_group_are_concatenated() {
    let dir = TempDir::new().unwrap();
    let ref_a = write_csv(&dir, "ref_a.csv", "name\nJohn\n");
    let ref_b = write_csv(&dir, "ref_b.csv", "name\nMary\n");
    let target = write_csv(&dir, "leads.csv", "name\nJohn\nMary\nSarah\n");

    csvgap()
        .arg("--reference")
        .arg(&ref_a)
        .arg(&ref_b)
        .arg("--target")
        .arg(&target)
        .args(["--reference-column", "name", "--format", "csv"])
        .assert()
        .code(1)
        .stdout("name\nSarah\n");
}

#[test]
fn differing_columns_within_a_group_fail() {
    let dir = TempDir::new().unwrap();
    let ref_a = write_csv(&dir, "ref_a.csv", "name\nJohn\n");
    let ref_b = write_csv(&dir, "ref_b.csv", "city\nBerlin\n");
    let target = write_csv(&dir, "leads.csv", "name\nSarah\n");

    csvgap()
        .arg("--reference")
        .arg(&ref_a)
        .arg(&ref_b)
        .arg("--target")
        .arg(&target)
        .args(["--reference-column", "name"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("schema mismatch"))
        .stderr(predicate::str::contains("ref_b.csv"));
}

#[test]
fn unknown_comparison_column_fails() {
    let dir = TempDir::new().unwrap();
    let reference = write_csv(&dir, "a.csv", "name\nJohn\n");
    let target = write_csv(&dir, "b.csv", "name\nSarah\n");

    csvgap()
        .arg("--reference")
        .arg(&reference)
        .arg("--target")
        .arg(&target)
        .args(["--reference-column", "email"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("column 'email' not found"));
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let target = write_csv(&dir, "b.csv", "name\nSarah\n");

    csvgap()
        .arg("--reference")
        .arg(dir.path().join("nope.csv"))
        .arg("--target")
        .arg(&target)
        .args(["--reference-column", "name"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn target_column_can_differ_from_reference_column() {
    let dir = TempDir::new().unwrap();
    let reference = write_csv(&dir, "a.csv", "contacted\nJohn\n");
    let target = write_csv(&dir, "b.csv", "lead\nJohn\nSarah\n");

    csvgap()
        .arg("--reference")
        .arg(&reference)
        .arg("--target")
        .arg(&target)
        .args(["--reference-column", "contacted"])
        .args(["--target-column", "lead"])
        .args(["--format", "csv"])
        .assert()
        .code(1)
        .stdout("lead\nSarah\n");
}

#[test]
fn stats_only_prints_counts() {
    let dir = TempDir::new().unwrap();
    let reference = write_csv(&dir, "a.csv", "name\nJohn\nMary\nBob\n");
    let target = write_csv(&dir, "b.csv", "name\nJohn\nMary\nSarah\nMike\n");

    csvgap()
        .arg("--reference")
        .arg(&reference)
        .arg("--target")
        .arg(&target)
        .args(["--reference-column", "name", "--stats-only"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Reference rows: 3"))
        .stdout(predicate::str::contains("Target rows:    4"))
        .stdout(predicate::str::contains("Missing rows:   2"))
        .stdout(predicate::str::contains("Match rate:     50.0%"));
}
