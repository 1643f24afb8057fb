//! End-to-end tests for `farescan watch` snapshot streaming.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn farescan(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("farescan").expect("binary builds");
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn watch_processes_separated_snapshots() {
    let home = TempDir::new().unwrap();
    let stream = "UberX\nARS15,200\nViaje: 28 min (12,3 km)\n---\nhome screen\n";

    // The second snapshot arrives immediately and lands inside the
    // debounce window, so it is dropped rather than reported as a loss.
    farescan(&home)
        .arg("watch")
        .write_stdin(stream)
        .assert()
        .success()
        .stdout(predicate::str::contains("new trip"))
        .stdout(predicate::str::contains("skipped"));
}

#[test]
fn watch_single_snapshot_without_separator() {
    let home = TempDir::new().unwrap();
    farescan(&home)
        .arg("watch")
        .write_stdin("UberX\nARS15,200\nViaje: 28 min (12,3 km)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("new trip"));
}

#[test]
fn watch_json_lines() {
    let home = TempDir::new().unwrap();
    farescan(&home)
        .arg("watch")
        .arg("--json")
        .write_stdin("UberX\nARS15,200\nViaje: 28 min (12,3 km)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"platform\":\"Uber\""));
}

#[test]
fn watch_empty_input_produces_nothing() {
    let home = TempDir::new().unwrap();
    farescan(&home)
        .arg("watch")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
