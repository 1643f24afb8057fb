//! End-to-end tests for `farescan analyze` and `farescan config`.
//!
//! Every command runs with HOME pointed at a temp directory so the tests
//! never touch the user's real config.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const OFFER: &str = "UberX\nARS15,200\nA 12 min (5,2 km)\nViaje: 28 min (12,3 km)\n4.85 (312)\n";

fn farescan(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("farescan").expect("binary builds");
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn analyze_profitable_offer_from_stdin() {
    let home = TempDir::new().unwrap();
    farescan(&home)
        .arg("analyze")
        .write_stdin(OFFER)
        .assert()
        .success()
        .stdout(predicate::str::contains("Uber"))
        .stdout(predicate::str::contains("PROFITABLE"));
}

#[test]
fn analyze_from_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("offer.txt");
    std::fs::write(&path, OFFER).unwrap();

    farescan(&home)
        .arg("analyze")
        .arg(path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("new trip"));
}

#[test]
fn analyze_json_output_contains_fields() {
    let home = TempDir::new().unwrap();
    farescan(&home)
        .arg("analyze")
        .arg("--json")
        .write_stdin(OFFER)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"price\":15200"))
        .stdout(predicate::str::contains("\"is_profitable\":true"));
}

#[test]
fn analyze_reports_no_trip() {
    let home = TempDir::new().unwrap();
    farescan(&home)
        .arg("analyze")
        .write_stdin("nothing ride-related here\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no trip detected"));
}

#[test]
fn analyze_rate_override_flips_verdict() {
    let home = TempDir::new().unwrap();
    // 380/min cannot clear a 30000/h target (500/min required).
    farescan(&home)
        .arg("analyze")
        .arg("--rate")
        .arg("30000")
        .write_stdin(OFFER)
        .assert()
        .success()
        .stdout(predicate::str::contains("not profitable"));
}

#[test]
fn analyze_raw_flag_echoes_text() {
    let home = TempDir::new().unwrap();
    farescan(&home)
        .arg("analyze")
        .arg("--raw")
        .write_stdin("some raw capture\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("some raw capture"));
}

#[test]
fn analyze_missing_file_fails() {
    let home = TempDir::new().unwrap();
    farescan(&home)
        .arg("analyze")
        .arg("/definitely/not/here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn config_set_then_show_roundtrip() {
    let home = TempDir::new().unwrap();
    farescan(&home)
        .args(["config", "set", "--hourly-rate", "12500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved"));

    farescan(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("desired_hourly_rate = 12500"));
}

#[test]
fn config_show_defaults_without_file() {
    let home = TempDir::new().unwrap();
    farescan(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("desired_hourly_rate = 10000"))
        .stdout(predicate::str::contains("ocr_interval_ms = 900"));
}

#[test]
fn saved_rate_drives_the_verdict() {
    let home = TempDir::new().unwrap();
    farescan(&home)
        .args(["config", "set", "--hourly-rate", "30000"])
        .assert()
        .success();

    farescan(&home)
        .arg("analyze")
        .write_stdin(OFFER)
        .assert()
        .success()
        .stdout(predicate::str::contains("not profitable"));
}
