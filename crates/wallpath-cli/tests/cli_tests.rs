use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command bound to a test database
fn wallpath_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wallpath").expect("Failed to find wallpath binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn generate_and_save(db_path: &Path) {
    wallpath_cmd(db_path)
        .args(["generate", "--width", "5", "--height", "3", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved as trajectory ID: 1"));
}

#[test]
fn test_cli_generate_plain_wall() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wallpath_cmd(&db_path)
        .args(["generate", "--width", "5", "--height", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generated trajectory with 189 points over 63 lanes",
        ))
        .stdout(predicate::str::contains("- Wall: 5x3m"))
        .stdout(predicate::str::contains("Saved as").not());
}

#[test]
fn test_cli_generate_json_with_obstacle() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let output = wallpath_cmd(&db_path)
        .args([
            "generate",
            "--width",
            "4",
            "--height",
            "2.5",
            "--safety-margin",
            "0.1",
            "--obstacle",
            "1.0,0.5,0.5,0.3",
            "--json",
        ])
        .output()
        .expect("Failed to run wallpath");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["metadata"]["obstacles_count"], 1);
    assert!(report["points"]
        .as_array()
        .expect("points array")
        .iter()
        .any(|p| {
            p["tool_active"] == false && p["y"].as_f64().is_some_and(|y| (y - 0.9).abs() < 1e-9)
        }));
}

#[test]
fn test_cli_generate_rejects_overlap_equal_to_tool_width() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wallpath_cmd(&db_path)
        .args([
            "generate",
            "--width",
            "1",
            "--height",
            "1",
            "--tool-width",
            "0.1",
            "--overlap",
            "0.1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tool configuration 'overlap'"));
}

#[test]
fn test_cli_generate_rejects_malformed_obstacle() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wallpath_cmd(&db_path)
        .args([
            "generate", "--width", "1", "--height", "1", "--obstacle", "1,2,3",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected x,y,width,height"));
}

#[test]
fn test_cli_list_show_delete() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wallpath_cmd(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No trajectories found."));

    generate_and_save(&db_path);

    wallpath_cmd(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("**1** 5 x 3 m, 189 points"));

    wallpath_cmd(&db_path)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Trajectory 1"))
        .stdout(predicate::str::contains("| # | x | y | angle | speed | tool |"));

    wallpath_cmd(&db_path)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted trajectory 1"));

    wallpath_cmd(&db_path)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trajectory with ID 1 not found"));
}

#[test]
fn test_cli_delete_missing_trajectory() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wallpath_cmd(&db_path)
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trajectory with ID 5 not found"));
}

#[test]
fn test_cli_save_document() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let document = temp_dir.path().join("trajectory.json");
    std::fs::write(
        &document,
        r#"{
            "wall_width": 2.0,
            "wall_height": 1.0,
            "obstacles": [],
            "trajectory": [
                {"x": 0.0, "y": 0.0, "angle": 90.0, "speed": 0.1, "tool_active": true},
                {"x": 0.0, "y": 1.0, "angle": 90.0, "speed": 0.1, "tool_active": true}
            ]
        }"#,
    )
    .expect("Failed to write document");

    wallpath_cmd(&db_path)
        .arg("save")
        .arg(&document)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved trajectory with ID: 1 (2 points)"));

    wallpath_cmd(&db_path)
        .arg("save")
        .arg(temp_dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_cli_execute_and_actions() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    generate_and_save(&db_path);

    let output = wallpath_cmd(&db_path)
        .args(["execute", "1", "--json"])
        .output()
        .expect("Failed to run wallpath");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["points_executed"], 189);
    let session_id = report["session_id"].as_str().expect("session id").to_string();

    wallpath_cmd(&db_path)
        .args(["actions", &session_id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("# Session {session_id}")))
        .stdout(predicate::str::contains(
            "`SESSION_START` Started trajectory execution for ID: 1",
        ));

    wallpath_cmd(&db_path)
        .args(["messages", "robot_status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed execution of trajectory 1"))
        .stdout(predicate::str::contains("processed"));
}

#[test]
fn test_cli_execute_missing_trajectory() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wallpath_cmd(&db_path)
        .args(["execute", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trajectory with ID 3 not found"));
}

#[test]
fn test_cli_publish_and_process() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wallpath_cmd(&db_path)
        .args(["publish", "trajectory_commands", "start", "--priority", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Published message 1 to 'trajectory_commands' with priority 2",
        ));

    wallpath_cmd(&db_path)
        .args(["messages", "trajectory_commands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pending"));

    wallpath_cmd(&db_path)
        .args(["process", "--topic", "trajectory_commands"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Processed 1 messages on 'trajectory_commands'",
        ));

    wallpath_cmd(&db_path)
        .arg("process")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 0 messages"));
}

#[test]
fn test_cli_status_reports_logged_requests() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    generate_and_save(&db_path);

    wallpath_cmd(&db_path)
        .args(["delete", "9"])
        .assert()
        .failure();

    wallpath_cmd(&db_path)
        .args(["generate", "--width", "0", "--height", "1"])
        .assert()
        .failure();

    wallpath_cmd(&db_path)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Stored trajectories: 1"))
        .stdout(predicate::str::contains("`INFO` generate - ok"))
        .stdout(predicate::str::contains("`ERROR` delete - "))
        .stdout(predicate::str::contains("`WARNING` generate - "));
}
