//! End-to-end CLI tests through the real binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::path::Path;

fn tt_core() -> Command {
    Command::cargo_bin("tt-core").expect("binary builds")
}

fn write_reference(path: &Path, rows: &[(&str, &str)]) {
    let agreement: Vec<Value> = rows
        .iter()
        .map(|(id, decision)| json!({ "id": id, "ash_decision": decision }))
        .collect();
    let doc = json!({ "schema_version": "1", "agreement": agreement });
    std::fs::write(path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
}

fn artifact_ids(path: &Path) -> Vec<String> {
    let doc: Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    doc["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn build_writes_full_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("reference.json");
    let catalog = dir.path().join("catalog.json");
    write_reference(&reference, &[("R1 low", "Rx")]);

    tt_core()
        .args(["build", "--reference"])
        .arg(&reference)
        .arg("-o")
        .arg(&catalog)
        .args(["-f", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("69 records (68 unresolved)"));

    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&catalog).unwrap()).unwrap();
    assert_eq!(doc["counts"]["total"], 69);
    assert_eq!(doc["counts"]["R1-R10"], 20);
    assert_eq!(doc["counts"]["R15-R20"], 21);
    assert_eq!(doc["schema_version"], "1");
}

#[test]
fn full_cycle_with_complete_reference_verifies_clean() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("reference.json");
    let catalog = dir.path().join("catalog.json");

    // First pass just to learn the full id set.
    write_reference(&reference, &[("R1 low", "Rx")]);
    tt_core()
        .args(["build", "--reference"])
        .arg(&reference)
        .arg("-o")
        .arg(&catalog)
        .assert()
        .success();

    // A reference covering every id makes build and verify agree fully.
    let ids = artifact_ids(&catalog);
    assert_eq!(ids.len(), 69);
    let rows: Vec<(&str, &str)> = ids.iter().map(|id| (id.as_str(), "Test")).collect();
    write_reference(&reference, &rows);

    tt_core()
        .args(["build", "--reference"])
        .arg(&reference)
        .arg("-o")
        .arg(&catalog)
        .args(["-f", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 unresolved)"));

    tt_core()
        .args(["verify", "--catalog"])
        .arg(&catalog)
        .arg("--reference")
        .arg(&reference)
        .args(["-f", "summary"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "69 comparisons: 69 matched, 0 mismatched (100.0%)",
        ));
}

#[test]
fn verify_reports_mismatches_with_exit_1() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("reference.json");
    let catalog = dir.path().join("catalog.json");

    write_reference(&reference, &[("R1 low", "Rx")]);
    tt_core()
        .args(["build", "--reference"])
        .arg(&reference)
        .arg("-o")
        .arg(&catalog)
        .assert()
        .success();
    let ids = artifact_ids(&catalog);
    let rows: Vec<(&str, &str)> = ids.iter().map(|id| (id.as_str(), "Test")).collect();
    write_reference(&reference, &rows);
    tt_core()
        .args(["build", "--reference"])
        .arg(&reference)
        .arg("-o")
        .arg(&catalog)
        .assert()
        .success();

    // Flip one reference decision after the build: one mismatch.
    let mut rows: Vec<(&str, &str)> = ids.iter().map(|id| (id.as_str(), "Test")).collect();
    rows[0] = (ids[0].as_str(), "NoRx");
    write_reference(&reference, &rows);

    let report = dir.path().join("verification_report.html");
    tt_core()
        .args(["verify", "--catalog"])
        .arg(&catalog)
        .arg("--reference")
        .arg(&reference)
        .arg("--report")
        .arg(&report)
        .args(["-f", "md"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Mismatches:"))
        .stdout(predicate::str::contains(&ids[0]));

    let html = std::fs::read_to_string(&report).unwrap();
    assert!(html.contains("Mismatch"));
    assert!(html.contains("Thrombophilia Threshold Verification Report"));
}

#[test]
fn build_without_reference_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    tt_core()
        .current_dir(dir.path())
        .args(["build", "--reference", "missing.json"])
        .assert()
        .code(11)
        .stderr(predicate::str::contains("Configuration Error"));
}

#[test]
fn verify_with_missing_catalog_still_reports() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("reference.json");
    write_reference(&reference, &[("R1 low", "Rx")]);

    let report = dir.path().join("verification_report.html");
    tt_core()
        .args(["verify", "--catalog", "/nonexistent/catalog.json", "--reference"])
        .arg(&reference)
        .arg("--report")
        .arg(&report)
        .args(["-f", "summary"])
        .assert()
        .code(11)
        .stdout(predicate::str::contains(
            "0 comparisons: 0 matched, 0 mismatched",
        ));

    // The report still exists and names the load failure.
    let html = std::fs::read_to_string(&report).unwrap();
    assert!(html.contains("cannot read catalog artifact"));
}

#[test]
fn check_accepts_valid_and_rejects_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("reference.json");

    write_reference(&reference, &[("R1 low", "Rx"), ("R13", "Test")]);
    tt_core()
        .args(["check", "--reference"])
        .arg(&reference)
        .args(["-f", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reference valid: 2 agreement rows"));

    // A decision outside {NoRx, Test, Rx} must be rejected.
    write_reference(&reference, &[("R1 low", "Maybe")]);
    tt_core()
        .args(["check", "--reference"])
        .arg(&reference)
        .assert()
        .code(11)
        .stderr(predicate::str::contains("Invalid Reference Workbook"));
}

#[test]
fn version_prints_and_exits_clean() {
    tt_core()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tt-core "));
}
