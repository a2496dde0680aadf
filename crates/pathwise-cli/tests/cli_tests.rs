//! CLI integration tests using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pathwise() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("pathwise").unwrap();
    cmd.env_remove("PATHWISE_CATALOG");
    cmd
}

fn catalogs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../catalogs")
}

/// A temp dir populated by `pathwise init`.
fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    pathwise()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

fn read_path(dir: &TempDir) -> serde_json::Value {
    let content = std::fs::read_to_string(dir.path().join("path.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn validate_starter_catalog() {
    pathwise()
        .arg("validate")
        .arg("--catalog")
        .arg(catalogs_dir().join("starter.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("9 assets"))
        .stdout(predicate::str::contains("All files valid"));
}

#[test]
fn validate_catalog_directory() {
    pathwise()
        .arg("validate")
        .arg("--catalog")
        .arg(catalogs_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Engineering Starter Catalog"));
}

#[test]
fn validate_nonexistent_file() {
    pathwise()
        .arg("validate")
        .arg("--catalog")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    pathwise()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created pathwise.toml"))
        .stdout(predicate::str::contains("Created catalog.toml"))
        .stdout(predicate::str::contains("Created path.json"));

    assert!(dir.path().join("pathwise.toml").exists());
    assert!(dir.path().join("catalog.toml").exists());
    assert!(dir.path().join("path.json").exists());
}

#[test]
fn init_skips_existing_files() {
    let dir = initialized();
    pathwise()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathwise.toml already exists"));
}

#[test]
fn init_output_validates() {
    let dir = initialized();
    pathwise()
        .current_dir(dir.path())
        .args(["validate", "--catalog", "catalog.toml", "--path", "path.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 assets"))
        .stdout(predicate::str::contains("3 items"))
        .stdout(predicate::str::contains("All files valid"));
}

#[test]
fn record_low_score_inserts_remedial_and_fails_item() {
    let dir = initialized();
    pathwise()
        .current_dir(dir.path())
        .args(["record", "--path", "path.json", "--item", "p1", "--score", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[negative]"))
        .stdout(predicate::str::contains("Introduction to HTML & DOM"));

    let path = read_path(&dir);
    let items = path["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["status"], "failed");
    assert_eq!(items[0]["score"], 45);
    assert_eq!(items[0]["attempts"], 1);
    assert_eq!(items[1]["asset_id"], "html-dom");
    assert_eq!(items[1]["provenance"], "engine");
    assert_eq!(items[1]["learner_id"], "learner-1");
    // The locked item after the completed one is opened up.
    assert_eq!(items[3]["status"], "pending");
}

#[test]
fn evaluate_high_score_skips_next_intermediate() {
    let dir = initialized();
    pathwise()
        .current_dir(dir.path())
        .args(["evaluate", "--path", "path.json", "--item", "p1", "--score", "95"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[positive]"))
        .stdout(predicate::str::contains("Full Stack Web Architecture"));

    let path = read_path(&dir);
    let items = path["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["status"], "completed");
    assert_eq!(items[0]["fast_tracked"], true);
    assert_eq!(items[1]["id"], "p3");
    // The pure engine does not unlock anything.
    assert_eq!(items[1]["status"], "locked");
}

#[test]
fn evaluate_json_output() {
    let dir = initialized();
    let output = pathwise()
        .current_dir(dir.path())
        .args([
            "evaluate", "--path", "path.json", "--item", "p1", "--score", "75", "--format",
            "json", "--output", "out/next.json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["outcome"], "neutral");
    assert_eq!(report["adjustment"]["kind"], "advanced");

    // Written to --output; the input file is untouched.
    assert!(dir.path().join("out/next.json").exists());
    assert_eq!(read_path(&dir)["items"][0]["status"], "in-progress");
}

#[test]
fn evaluate_unknown_item_leaves_path_unchanged() {
    let dir = initialized();
    let before = std::fs::read_to_string(dir.path().join("path.json")).unwrap();

    pathwise()
        .current_dir(dir.path())
        .args(["evaluate", "--path", "path.json", "--item", "p99", "--score", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[neutral] Error updating path"))
        .stderr(predicate::str::contains("assignment not found"));

    let after = std::fs::read_to_string(dir.path().join("path.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn evaluate_rejects_out_of_range_score() {
    let dir = initialized();
    pathwise()
        .current_dir(dir.path())
        .args(["evaluate", "--path", "path.json", "--item", "p1", "--score", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("score out of range"));
}

#[test]
fn evaluate_without_catalog_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("path.json"),
        r#"{"learner_id": "u1", "preference": "text", "items": []}"#,
    )
    .unwrap();

    pathwise()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .args(["evaluate", "--path", "path.json", "--item", "p1", "--score", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no catalog given"));
}

#[test]
fn reorder_for_text_preference() {
    let dir = initialized();
    pathwise()
        .current_dir(dir.path())
        .args(["reorder", "--path", "path.json", "--preference", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reordered for text preference"))
        .stdout(predicate::str::contains("1. web-architecture"));

    let path = read_path(&dir);
    let order: Vec<&str> = path["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["p2", "p1", "p3"]);
}

#[test]
fn assign_skips_unknown_and_duplicate_assets() {
    let dir = initialized();
    pathwise()
        .current_dir(dir.path())
        .args([
            "assign",
            "--path",
            "path.json",
            "--assets",
            "html-dom,ghost,react-basics",
            "--self-assigned",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned 1 item(s)"))
        .stdout(predicate::str::contains("skipped ghost: not in catalog"))
        .stdout(predicate::str::contains("skipped react-basics: already assigned"));

    let path = read_path(&dir);
    let items = path["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[3]["status"], "in-progress");
    assert_eq!(items[3]["provenance"], "self");
}

#[test]
fn summary_text_and_json() {
    let dir = initialized();
    pathwise()
        .current_dir(dir.path())
        .args(["summary", "--path", "path.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Learner: learner-1 (visual)"))
        .stdout(predicate::str::contains("React for Beginners"))
        .stdout(predicate::str::contains("0/3 completed"));

    let output = pathwise()
        .current_dir(dir.path())
        .args(["summary", "--path", "path.json", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["total"], 3);
    assert_eq!(summary["locked"], 1);
    assert_eq!(summary["in_progress"], 1);
}
