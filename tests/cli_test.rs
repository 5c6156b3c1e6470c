/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{BackupFileBuilder, RecordBuilder, realistic_backup};
use predicates::prelude::*;

fn nbu_explorer() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nbu-explorer"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_stats_command() {
    let (_dir, path) = realistic_backup();

    nbu_explorer()
        .arg(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone Backup Statistics"))
        .stdout(predicate::str::contains("Total messages: 5"))
        .stdout(predicate::str::contains("Sent: 2"))
        .stdout(predicate::str::contains("Received: 3"))
        .stdout(predicate::str::contains("Oldest message: 2021-01-05 08:15:00"))
        .stdout(predicate::str::contains("Newest message: 2021-03-02 11:00:00"));
}

#[test]
fn test_cli_stats_json() {
    let (_dir, path) = realistic_backup();

    let output = nbu_explorer().arg(&path).arg("stats").arg("--json").output().unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total"], 5);
    assert_eq!(stats["sent"], 2);
    assert_eq!(stats["received"], 3);
}

#[test]
fn test_cli_search_buckets() {
    let (_dir, path) = realistic_backup();

    nbu_explorer()
        .arg(&path)
        .args(["search", "dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches for /dinner/ in received messages"))
        .stdout(predicate::str::contains("2021-01: 1 matches in 1 messages"))
        .stdout(predicate::str::contains("2021-02: 0 matches in 0 messages"))
        .stdout(predicate::str::contains("Total: 2 matches in 2 messages"));
}

#[test]
fn test_cli_search_sent_case_sensitive_with_messages() {
    let (_dir, path) = realistic_backup();

    nbu_explorer()
        .arg(&path)
        .args(["search", "call", "--direction", "sent", "--case-sensitive", "--show-messages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2021-03: 2 matches in 1 messages"))
        .stdout(predicate::str::contains("+447700900003: call call CALL"))
        .stdout(predicate::str::contains("Total: 2 matches in 1 messages"));
}

#[test]
fn test_cli_search_json() {
    let (_dir, path) = BackupFileBuilder::new()
        .with_record(RecordBuilder::submit().text("Call me"))
        .build();

    let output = nbu_explorer()
        .arg(&path)
        .args(["--json", "search", "call", "-d", "sent"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let buckets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(buckets["2021-01"]["count"], 1);
    assert_eq!(buckets["2021-01"]["messages"][0]["content"], "Call me");
    assert_eq!(buckets["2021-01"]["messages"][0]["direction"], "sent");
}

#[test]
fn test_cli_search_invalid_pattern() {
    let (_dir, path) = realistic_backup();

    nbu_explorer()
        .arg(&path)
        .args(["search", "(unclosed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid search pattern"));
}

#[test]
fn test_cli_search_timezone_bucket_format_fails_cleanly() {
    let (_dir, path) = realistic_backup();

    nbu_explorer()
        .arg(&path)
        .args(["search", "dinner", "--bucket-format", "%Y %z"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid bucket format '%Y %z'"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_cli_phone_search() {
    let (_dir, path) = realistic_backup();

    nbu_explorer()
        .arg(&path)
        .args(["phone", "07700"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Happy Valentine's"))
        .stdout(predicate::str::contains("Total: 1 messages"));
}

#[test]
fn test_cli_malformed_backup_fails() {
    let (_dir, path) = BackupFileBuilder::new()
        .with_record(RecordBuilder::deliver().without_message_type())
        .build();

    nbu_explorer()
        .arg(&path)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load backup"))
        .stderr(predicate::str::contains("Malformed record #1"));
}

#[test]
fn test_cli_missing_file_fails() {
    nbu_explorer()
        .args(["/nonexistent/backup.nbu", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load backup"));
}

#[test]
fn test_cli_no_subcommand() {
    let (_dir, path) = realistic_backup();

    nbu_explorer()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help() {
    nbu_explorer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search SMS messages in legacy phone backup files"));
}
