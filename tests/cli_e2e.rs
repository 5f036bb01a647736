use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn inno(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inno").unwrap();
    cmd.env("INNO_DATA_DIR", data_dir.path())
        .env("NO_COLOR", "1")
        .env_remove("INNO_LOG");
    cmd
}

#[test]
fn test_idea_lifecycle() {
    let temp = TempDir::new().unwrap();

    // 1. Create
    inno(&temp)
        .args(["create", "Solar Roof", "-d", "Panels on every roof"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Idea created (1): Solar Roof"));

    // 2. The blob is on disk as a JSON array
    let blob = fs::read_to_string(temp.path().join("ideas.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["rank"], 0);
    assert_eq!(parsed[0]["traits"].as_array().unwrap().len(), 11);
    assert!(parsed[0]["createdAt"].is_string());

    // 3. Rank up three times
    for _ in 0..3 {
        inno(&temp).args(["up", "1"]).assert().success();
    }
    inno(&temp)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rank 3"))
        .stdout(predicate::str::contains("Panels on every roof"));

    // 4. Stats
    inno(&temp)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("5.00"))
        .stdout(predicate::str::contains("Top Ranked"));

    // 5. Delete
    inno(&temp)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Idea deleted (1): Solar Roof"));
    inno(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No ideas yet."));
}

#[test]
fn test_stats_on_empty_store() {
    let temp = TempDir::new().unwrap();
    inno(&temp)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00"))
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn test_trait_out_of_range_is_rejected() {
    let temp = TempDir::new().unwrap();
    inno(&temp)
        .args(["create", "Bad", "--trait", "Scalability=11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid traits"));
    assert!(!temp.path().join("ideas.json").exists());
}

#[test]
fn test_edit_resources_and_steps() {
    let temp = TempDir::new().unwrap();
    inno(&temp).args(["create", "Drone Delivery"]).assert().success();

    inno(&temp)
        .args(["edit", "1", "--title", "Drone Logistics", "-t", "Time to MVP=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Idea updated (1): Drone Logistics"));

    inno(&temp)
        .args([
            "resource",
            "add",
            "1",
            "FAA rules",
            "https://faa.gov",
            "-d",
            "regulation",
        ])
        .assert()
        .success();
    inno(&temp)
        .args(["step", "add", "1", "Talk to couriers"])
        .assert()
        .success();

    inno(&temp)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drone Logistics"))
        .stdout(predicate::str::contains("FAA rules"))
        .stdout(predicate::str::contains("Talk to couriers"));

    inno(&temp)
        .args(["resource", "rm", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resource removed (1): FAA rules"));
}

#[test]
fn test_unknown_selector_fails() {
    let temp = TempDir::new().unwrap();
    inno(&temp)
        .args(["up", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Idea 4 not found"));
}

#[test]
fn test_corrupt_blob_fails_loudly() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("ideas.json"), "{ not json").unwrap();

    inno(&temp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
    assert_eq!(
        fs::read_to_string(temp.path().join("ideas.json")).unwrap(),
        "{ not json"
    );
}

#[test]
fn test_config_and_traits_work_with_corrupt_blob() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("ideas.json"), "{ not json").unwrap();

    inno(&temp)
        .arg("traits")
        .assert()
        .success()
        .stdout(predicate::str::contains("Adjacency to Users"));

    inno(&temp)
        .args(["config", "storage-key", "fresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key set to fresh"));

    inno(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No ideas yet."));
}

#[test]
fn test_invalid_config_value_fails() {
    let temp = TempDir::new().unwrap();
    inno(&temp)
        .args(["config", "recent-limit", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("recent-limit must be a whole number"));
    assert!(!temp.path().join("config.json").exists());

    inno(&temp)
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_config_storage_key() {
    let temp = TempDir::new().unwrap();
    inno(&temp)
        .args(["config", "storage-key", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key set to work"));

    inno(&temp).args(["create", "Side project"]).assert().success();
    assert!(temp.path().join("work.json").exists());
    assert!(!temp.path().join("ideas.json").exists());
}
