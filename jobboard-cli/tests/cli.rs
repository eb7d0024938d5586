//! End-to-end tests for the jobboard binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SCRIPT: &str = r#"
cards:
  - { id: "1", company: Acme, position: Backend Engineer, category: Applied }
  - { id: "2", company: Globex, position: SRE, category: Interview }
steps:
  - drag: { type: start, active: "1" }
  - drag: { type: over, active: "1", over: { kind: card, id: "2" } }
  - drag: { type: end, active: "1", over: { kind: card, id: "2" } }
  - drag: { type: start, active: Offer }
  - drag: { type: end, active: Offer, over: { kind: column, id: Applied } }
  - command: { op: create, card: { id: "3", company: Hooli, position: PM, category: Offer } }
"#;

fn jobboard() -> Command {
    let mut cmd = Command::cargo_bin("jobboard").unwrap();
    cmd.env_remove("JOBBOARD_CATEGORIES")
        .env_remove("JOBBOARD_FILTER_FIELD")
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_categories_defaults() {
    jobboard()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied"))
        .stdout(predicate::str::contains("Rejected"));
}

#[test]
fn test_categories_from_config_file_as_json() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "board.yaml", "categories: [Wishlist, Applied]\n");

    let output = jobboard()
        .args(["categories", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["categories"], serde_json::json!(["Wishlist", "Applied"]));
    assert_eq!(json["filter_field"], "company");
}

#[test]
fn test_categories_from_env_comma_list() {
    jobboard()
        .env("JOBBOARD_CATEGORIES", "Wishlist, Applied,Offer")
        .args(["categories", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""Wishlist""#))
        .stdout(predicate::str::contains(r#""Offer""#))
        .stdout(predicate::str::contains("Rejected").not());
}

#[test]
fn test_replay_json_reports_final_board() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "script.yaml", SCRIPT);

    let output = jobboard()
        .args(["replay", "--json"])
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let columns = report["board"]["columns"].as_array().unwrap();
    let order: Vec<&str> = columns.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(order, vec!["Offer", "Applied", "Interview", "Rejected"]);

    let interview: Vec<&str> = columns[2]["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(interview, vec!["2", "1"]);
    assert_eq!(columns[0]["cards"][0]["company"], "Hooli");

    let steps = report["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[5]["ack"]["outcome"], "created");
    assert_eq!(steps[5]["ack"]["seq"], 1);
}

#[test]
fn test_replay_table_output() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "script.yaml", SCRIPT);

    jobboard()
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Interview (2)"))
        .stdout(predicate::str::contains("Hooli"))
        .stdout(predicate::str::contains("column moved 2 -> 0"));
}

#[test]
fn test_replay_with_filter_prints_summary() {
    let dir = TempDir::new().unwrap();
    let script = write(
        &dir,
        "script.yaml",
        &format!("{SCRIPT}  - filter: {{ pattern: glob }}\n"),
    );

    jobboard()
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: 1 matching card"));
}

#[test]
fn test_replay_missing_script_fails() {
    jobboard()
        .args(["replay", "/definitely/not/here.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read script"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "board.yaml", "categories: []\n");

    jobboard()
        .args(["categories", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load board configuration"));
}
