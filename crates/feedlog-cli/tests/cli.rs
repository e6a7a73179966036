//! CLI integration tests against a file-backed record store.

mod common;

use tempfile::TempDir;

use common::{add_record, record_count, run_cli, run_cli_success, run_cli_with_input};

#[test]
fn test_list_empty_shows_empty_state() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");

    let output = run_cli(&["list"], &data_file);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No records yet"),
        "Expected empty state, got: {}",
        stderr
    );
}

#[test]
fn test_add_then_list() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("data").join("records.json");

    let id = add_record(
        &data_file,
        &[
            "--type",
            "bottle",
            "--amount",
            "120",
            "--time",
            "2024-03-08T10:00",
            "--notes",
            "finished it all",
        ],
    );
    assert_eq!(id, "1");
    assert!(data_file.exists());

    let stdout = run_cli_success(&["list"], &data_file);
    assert!(stdout.contains("#1"), "Expected id in list: {}", stdout);
    assert!(stdout.contains("bottle"));
    assert!(stdout.contains("03/08 10:00"));
    assert!(stdout.contains("120 ml"));
    assert!(stdout.contains("finished it all"));
}

#[test]
fn test_list_json_is_most_recent_first() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");

    add_record(&data_file, &["-t", "breast", "--time", "2024-03-09T06:00"]);
    add_record(&data_file, &["-t", "bottle", "--time", "2024-03-10T06:00"]);
    add_record(&data_file, &["-t", "solid", "--time", "2024-03-08T06:00"]);

    let stdout = run_cli_success(&["list", "--json"], &data_file);
    let types: Vec<String> = stdout
        .lines()
        .map(|l| {
            let value: serde_json::Value = serde_json::from_str(l).unwrap();
            value["feeding_type"].as_str().unwrap().to_string()
        })
        .collect();

    assert_eq!(types, vec!["bottle", "breast", "solid"]);
}

#[test]
fn test_add_defaults_to_now_and_counts_today() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");

    add_record(&data_file, &["--type", "bottle", "--amount", "90"]);
    add_record(&data_file, &["--type", "breast", "--duration", "15"]);

    let stdout = run_cli_success(&["stats", "--json"], &data_file);
    let stats: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(stats["count"], 2);
    assert_eq!(stats["total_amount"], 90);
}

#[test]
fn test_add_rejects_bad_time() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");

    let output = run_cli(&["add", "--type", "bottle", "--time", "yesterday"], &data_file);
    assert!(!output.status.success());
    assert!(!data_file.exists());
}

#[test]
fn test_add_rejects_blank_type() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");

    let output = run_cli(&["add", "--type", "  "], &data_file);
    assert!(!output.status.success());
}

#[test]
fn test_delete_force_removes_record() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");

    let keep = add_record(&data_file, &["-t", "bottle", "--time", "2024-03-10T06:00"]);
    let drop = add_record(&data_file, &["-t", "bottle", "--time", "2024-03-10T09:00"]);

    run_cli_success(&["delete", &drop, "--force"], &data_file);

    let stdout = run_cli_success(&["list", "--json"], &data_file);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains(&format!("\"id\":{}", keep)));
}

#[test]
fn test_delete_confirmed_with_y() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");

    let id = add_record(&data_file, &["-t", "bottle"]);

    let output = run_cli_with_input(&["delete", &id], &data_file, "y\n");
    assert!(
        output.status.success(),
        "Delete failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(record_count(&data_file), 0);
}

#[test]
fn test_delete_declined_keeps_record() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");

    let id = add_record(&data_file, &["-t", "bottle"]);

    let output = run_cli_with_input(&["delete", &id], &data_file, "n\n");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cancelled"), "Expected cancel, got: {}", stderr);
    assert_eq!(record_count(&data_file), 1);
}

#[test]
fn test_delete_unknown_id_fails() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");
    add_record(&data_file, &["-t", "bottle"]);

    let output = run_cli(&["delete", "42", "--force"], &data_file);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "Expected not found, got: {}", stderr);
}

#[test]
fn test_corrupt_file_shows_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");
    std::fs::write(&data_file, "[{ broken").unwrap();

    let output = run_cli(&["list"], &data_file);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Records unavailable"),
        "Expected unavailable notice, got: {}",
        stderr
    );
    assert!(!stderr.contains("No records yet"));
    assert_eq!(
        stderr.matches("Failed to load records").count(),
        1,
        "Expected a single load warning, got: {}",
        stderr
    );
}

#[test]
fn test_add_to_corrupt_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");
    std::fs::write(&data_file, "[{ broken").unwrap();

    let output = run_cli(&["add", "--type", "bottle"], &data_file);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to add record"),
        "Expected write error, got: {}",
        stderr
    );
    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "[{ broken");
}

#[test]
fn test_json_output_fails_on_corrupt_file() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");
    std::fs::write(&data_file, "[{ broken").unwrap();

    for command in ["list", "stats"] {
        let output = run_cli(&[command, "--json"], &data_file);
        assert!(
            !output.status.success(),
            "Expected {} --json to fail on a corrupt file",
            command
        );
        assert!(output.stdout.is_empty());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Records unavailable"),
            "Expected unavailable error, got: {}",
            stderr
        );
    }
}

#[test]
fn test_json_output_on_missing_file_is_empty_success() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("records.json");

    let stdout = run_cli_success(&["list", "--json"], &data_file);
    assert!(stdout.is_empty());

    let stdout = run_cli_success(&["stats", "--json"], &data_file);
    let stats: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(stats["count"], 0);
}
