//! End-to-end CLI tests for wagroup.
//!
//! These tests run the actual binary against transcript fixtures written to a
//! temporary directory and check its output, exit status and diagnostics.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const TRANSCRIPT: &str = "\
[01.02.23, 14:00:00] Family: \u{200e}Messages and calls are end-to-end encrypted.
[01.02.23, 14:00:01] Alice: \u{200e}Alice added Bob
[01.02.23, 14:05:00] Alice: Hello; everyone
[01.02.23, 14:06:00] Bob: \u{200e}image omitted
[01.02.23, 14:07:00] Bob: Long message
that wraps <This message was edited>
[01.02.23, 14:08:00] Carol: POLL:
Lunch?
OPTION:Soup(2 votes)
OPTION:Salad(1 vote)
";

fn setup_fixture() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("_chat.txt");
    fs::write(&path, TRANSCRIPT).unwrap();
    (dir, path)
}

fn wagroup() -> Command {
    Command::cargo_bin("wagroup").unwrap()
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_json_to_stdout() {
    let (_dir, input) = setup_fixture();

    let output = wagroup()
        .arg(&input)
        .args(["--group", "Family", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let messages = json.as_array().unwrap();
    assert_eq!(messages.len(), 4);

    assert_eq!(messages[0]["author"], "Alice");
    assert_eq!(messages[0]["date"], "2023-02-01T14:05:00");
    assert_eq!(messages[0]["content"], "Hello; everyone");
    assert!(messages[0]["media"].is_null());

    assert_eq!(messages[1]["media"], "image");
    assert!(messages[1]["content"].is_null());

    assert_eq!(messages[2]["edited"], true);
    assert_eq!(messages[2]["content"], "Long message\nthat wraps");

    assert_eq!(messages[3]["content"], "Lunch?");
    assert_eq!(messages[3]["poll"][0]["option"], "Soup");
    assert_eq!(messages[3]["poll"][0]["votes"], 2);
}

#[test]
fn test_summary_on_stderr() {
    let (_dir, input) = setup_fixture();

    wagroup()
        .arg(&input)
        .args(["-g", "Family"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Messages:  4"))
        .stderr(predicate::str::contains("Polls:     1"));
}

#[test]
fn test_quiet_suppresses_summary() {
    let (_dir, input) = setup_fixture();

    wagroup()
        .arg(&input)
        .args(["-g", "Family", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_csv_output_by_extension() {
    let (dir, input) = setup_fixture();
    let out = dir.path().join("messages.csv");

    wagroup()
        .arg(&input)
        .args(["-g", "Family", "-q", "-o"])
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Date;Author;Content;Edited;Deleted;Media;Call;Poll")
    );
    assert_eq!(
        lines.next(),
        Some("2023-02-01 14:05:00;Alice;\"Hello; everyone\";false;false;;;")
    );
    assert!(csv.contains("Soup=2 | Salad=1"));
}

#[test]
fn test_jsonl_output_by_extension() {
    let (dir, input) = setup_fixture();
    let out = dir.path().join("messages.jsonl");

    wagroup()
        .arg(&input)
        .args(["-g", "Family", "-q", "-o"])
        .arg(&out)
        .assert()
        .success();

    let jsonl = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = jsonl.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("author").is_some());
    }
}

#[test]
fn test_format_flag_overrides_extension() {
    let (dir, input) = setup_fixture();
    let out = dir.path().join("messages.txt");

    wagroup()
        .arg(&input)
        .args(["-g", "Family", "-q", "-f", "csv", "-o"])
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("Date;Author;"));
}

#[test]
fn test_keep_membership() {
    let (_dir, input) = setup_fixture();

    wagroup()
        .arg(&input)
        .args(["-g", "Family", "-q", "--keep-membership"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice added Bob"));
}

#[test]
fn test_group_banner_not_in_output() {
    let (_dir, input) = setup_fixture();

    wagroup()
        .arg(&input)
        .args(["-g", "Family", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("end-to-end").not())
        .stdout(predicate::str::contains("added").not());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_group_argument() {
    let (_dir, input) = setup_fixture();

    wagroup()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--group"));
}

#[test]
fn test_blank_group_name_rejected() {
    let (_dir, input) = setup_fixture();

    wagroup()
        .arg(&input)
        .args(["-g", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();

    wagroup()
        .arg(dir.path().join("nope.txt"))
        .args(["-g", "Family"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_empty_input_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    fs::write(&input, "\n\n").unwrap();

    wagroup()
        .arg(&input)
        .args(["-g", "Family"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_invalid_format_value() {
    let (_dir, input) = setup_fixture();

    wagroup()
        .arg(&input)
        .args(["-g", "Family", "-f", "xml"])
        .assert()
        .failure();
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_orphan_lines_logged_as_warning() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("_chat.txt");
    fs::write(
        &input,
        "exported from my phone\n[01.02.23, 14:05:00] Alice: Hello",
    )
    .unwrap();

    wagroup()
        .arg(&input)
        .args(["-g", "Family", "-q"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("found content without message header"));
}

#[test]
fn test_help_and_version() {
    wagroup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--group"));

    wagroup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
