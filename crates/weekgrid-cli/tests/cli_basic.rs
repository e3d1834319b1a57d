//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;
use weekgrid_core::storage::SCHEDULE_KEY;
use weekgrid_core::Database;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_weekgrid"))
        .args(args)
        .env("WEEKGRID_DATA_DIR", data_dir)
        .env_remove("WEEKGRID_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn ok(data_dir: &Path, args: &[&str]) -> String {
    let (code, stdout, stderr) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    stdout
}

fn show_json(data_dir: &Path) -> serde_json::Value {
    serde_json::from_str(&ok(data_dir, &["show", "--json"])).expect("layout is JSON")
}

fn find_cell<'a>(layout: &'a serde_json::Value, id: &str) -> &'a serde_json::Value {
    layout["columns"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|c| c["cells"].as_array().unwrap())
        .find(|c| c["id"] == id)
        .unwrap()
}

#[test]
fn test_set_then_get() {
    let dir = TempDir::new().unwrap();
    let out = ok(dir.path(), &["set", "mon-09:00", "Standup", "--color", "green"]);
    assert!(out.contains("saved mon-09:00"));

    let out = ok(dir.path(), &["get", "mon-09:00"]);
    assert!(out.contains("Standup"));
    assert!(out.contains("green"));

    let out = ok(dir.path(), &["get", "mon-09:00", "--json"]);
    let event: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(event["title"], "Standup");
    assert_eq!(event["color"], "green");
}

#[test]
fn test_empty_title_removes_entry() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["set", "tue-10:00", "Review"]);
    let out = ok(dir.path(), &["set", "tue-10:00", "   "]);
    assert!(out.contains("removed tue-10:00"));
    assert!(ok(dir.path(), &["get", "tue-10:00"]).contains("(empty)"));
}

#[test]
fn test_fill_range_merges_in_layout() {
    let dir = TempDir::new().unwrap();
    let out = ok(
        dir.path(),
        &["set", "wed-09:00", "Workshop", "--through", "wed-10:00"],
    );
    assert!(out.contains("filled 5 cells"));

    let layout = show_json(dir.path());
    let leader = find_cell(&layout, "wed-09:00");
    assert_eq!(leader["span"], 5);
    assert_eq!(leader["suppressed"], false);
    assert_eq!(leader["color"], "blue");
    let follower = find_cell(&layout, "wed-09:45");
    assert_eq!(follower["suppressed"], true);
    assert_eq!(layout["slots"].as_array().unwrap().len(), 97);
}

#[test]
fn test_delete_rectangle() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["set", "mon-08:00", "A", "--through", "wed-08:30"]);
    ok(dir.path(), &["set", "thu-08:00", "Keep"]);

    let out = ok(dir.path(), &["delete", "tue-08:15", "thu-08:30"]);
    assert!(out.contains("deleted 4 entries (6 cells selected)"));
    assert!(ok(dir.path(), &["get", "mon-08:15"]).contains("A"));
    assert!(ok(dir.path(), &["get", "tue-08:00"]).contains("A"));
    assert!(ok(dir.path(), &["get", "tue-08:15"]).contains("(empty)"));
    assert!(ok(dir.path(), &["get", "thu-08:00"]).contains("Keep"));
}

#[test]
fn test_save_rewrites_cleaned_grid() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["set", "mon-09:00", "Standup"]);

    let db = Database::open_at(dir.path().join("weekgrid.db")).unwrap();
    db.kv_set(
        SCHEDULE_KEY,
        r#"{
            "mon-09:00": { "title": "Standup", "color": "blue" },
            "wed-11:00": { "title": "Tea", "color": "teal" }
        }"#,
    )
    .unwrap();

    let out = ok(dir.path(), &["save"]);
    assert!(out.contains("saved 1 entries"));

    let stored: serde_json::Value =
        serde_json::from_str(&db.kv_get(SCHEDULE_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored["mon-09:00"]["title"], "Standup");
    assert!(stored.get("wed-11:00").is_none());
}

#[test]
fn test_clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["set", "fri-12:00", "Lunch"]);

    let (code, _, stderr) = run_cli(dir.path(), &["clear"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("--yes"));
    assert!(ok(dir.path(), &["get", "fri-12:00"]).contains("Lunch"));

    assert!(ok(dir.path(), &["clear", "--yes"]).contains("cleared 1 entries"));
    assert!(ok(dir.path(), &["get", "fri-12:00"]).contains("(empty)"));
}

#[test]
fn test_invalid_cell_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["set", "mon-09:07", "Off grid"]);
    assert_ne!(code, 0);
    let (code, _, _) = run_cli(dir.path(), &["get", "funday-09:00"]);
    assert_ne!(code, 0);
}

#[test]
fn test_export_import_roundtrip() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("backup.json");
    ok(dir.path(), &["set", "sat-10:00", "Hike", "--color", "orange"]);
    ok(dir.path(), &["set", "sat-10:15", "Hike", "--color", "orange"]);

    let out = ok(dir.path(), &["export", "--output", file.to_str().unwrap()]);
    assert!(out.contains("exported 2 entries"));
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(doc["version"], "1.0");
    assert!(doc["exportDate"].is_string());
    assert_eq!(doc["schedules"]["sat-10:00"]["title"], "Hike");

    ok(dir.path(), &["clear", "--yes"]);
    let out = ok(dir.path(), &["import", file.to_str().unwrap()]);
    assert!(out.contains("imported 2 entries"));
    assert_eq!(find_cell(&show_json(dir.path()), "sat-10:00")["span"], 2);
}

#[test]
fn test_import_rejects_bad_payloads() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["set", "sun-20:00", "Plan week"]);

    let not_json_name = dir.path().join("backup.txt");
    std::fs::write(&not_json_name, "{}").unwrap();
    let (code, _, _) = run_cli(dir.path(), &["import", not_json_name.to_str().unwrap()]);
    assert_eq!(code, 1);

    let array = dir.path().join("array.json");
    std::fs::write(&array, "[1, 2, 3]").unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["import", array.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid format"));

    assert!(ok(dir.path(), &["get", "sun-20:00"]).contains("Plan week"));
}

#[test]
fn test_now_at_fixed_time() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["set", "mon-10:15", "Sync"]);
    let out = ok(dir.path(), &["now", "--at", "10:07", "--day", "mon", "--json"]);
    let nearby: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = nearby.as_array().unwrap();
    // 09:00 through 11:00 inclusive.
    assert_eq!(entries.len(), 9);
    let next = entries.iter().find(|e| e["slot"] == "10:15").unwrap();
    assert_eq!(next["level"], "next");
    assert_eq!(next["title"], "Sync");
    let current = entries.iter().find(|e| e["slot"] == "10:00").unwrap();
    assert_eq!(current["level"], "current");
}

#[test]
fn test_config_set_get() {
    let dir = TempDir::new().unwrap();
    assert_eq!(ok(dir.path(), &["config", "get", "clock.tick_secs"]).trim(), "60");

    ok(dir.path(), &["config", "set", "grid.default_color", "purple"]);
    assert_eq!(
        ok(dir.path(), &["config", "get", "grid.default_color"]).trim(),
        "purple"
    );
    ok(dir.path(), &["set", "thu-18:00", "Climb"]);
    assert!(ok(dir.path(), &["get", "thu-18:00"]).contains("purple"));

    let (code, _, _) = run_cli(dir.path(), &["config", "get", "no.such.key"]);
    assert_eq!(code, 1);

    ok(dir.path(), &["config", "reset"]);
    assert_eq!(
        ok(dir.path(), &["config", "get", "grid.default_color"]).trim(),
        "blue"
    );
}

#[test]
fn test_show_text_compact() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["config", "set", "display.color_output", "false"]);
    ok(dir.path(), &["set", "fri-07:00", "Run", "--through", "fri-07:15"]);
    let out = ok(dir.path(), &["show", "--day", "fri", "--compact"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].trim().starts_with("Fri"));
    assert!(lines[1].starts_with("07:00") && lines[1].contains("Run"));
    assert!(lines[2].starts_with("07:15") && lines[2].contains('│'));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    let out = ok(dir.path(), &["completions", "bash"]);
    assert!(out.contains("weekgrid"));
}
