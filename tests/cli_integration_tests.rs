//! Integration tests driving the quickref binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_quickref(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quickref"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute quickref")
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_quickref(temp_dir.path(), &["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_list_runs_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_quickref(temp_dir.path(), &["--list", "--quiet"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Lesson 1: Data Structures"));
    assert!(stdout.contains("vec_iterate"));
    assert!(stdout.contains("Other examples (run by name)"));
    assert!(!stdout.contains("a=10, b=20, c=30"));
    assert!(!temp_dir.path().join("data").exists());
}

#[test]
fn test_cli_list_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_quickref(temp_dir.path(), &["--list", "--json", "--quiet"]);

    assert!(output.status.success());
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let lessons = listing["lessons"].as_array().unwrap();
    assert_eq!(lessons.len(), 11);
    assert_eq!(lessons[0]["number"], 1);
    assert_eq!(lessons[0]["title"], "Data Structures");
    assert!(!lessons[0]["examples"].as_array().unwrap().is_empty());
    assert!(listing["unassigned"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["name"] == "thread_spawn"));
}

#[test]
fn test_cli_json_requires_list() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_quickref(temp_dir.path(), &["--json"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_run_named_examples() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_quickref(temp_dir.path(), &["vec_iterate", "loop_range", "--quiet"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("vec_iterate (Data Structures)"));
    assert!(stdout.contains("Range(0..5): [0, 1, 2, 3, 4]"));
    assert!(stdout.contains("Ran 2 example(s): 2 passed, 0 failed"));
}

#[test]
fn test_cli_missing_name_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_quickref(temp_dir.path(), &["vec_iterate", "nonexistent", "--quiet"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Ran 2 example(s): 1 passed, 1 failed"));
    assert!(stdout.contains("FAILED nonexistent"));
    assert!(stderr.contains("1 example(s) failed: nonexistent"));
}

#[test]
fn test_cli_unknown_lesson_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_quickref(temp_dir.path(), &["--lesson", "99"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Lesson not found: 99").count(), 1);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_lesson_conflicts_with_names() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_quickref(temp_dir.path(), &["--lesson", "1", "vec_iterate"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_config_file_selection_and_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("run.yaml"),
        "functions:\n  - file_write\n  - tuple_destructure\noutput_dir: generated\n",
    )
    .unwrap();

    let output = run_quickref(temp_dir.path(), &["--config", "run.yaml", "--quiet"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let file_pos = stdout.find("file_write (File Operations)").unwrap();
    let tuple_pos = stdout.find("tuple_destructure (Data Structures)").unwrap();
    assert!(file_pos < tuple_pos);
    assert!(temp_dir.path().join("generated").join("example.txt").is_file());
    assert!(!temp_dir.path().join("data").exists());
}

#[test]
fn test_cli_bad_config_fails_before_running() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("run.yaml"), "functions: []\n").unwrap();

    let output = run_quickref(temp_dir.path(), &["--config", "run.yaml"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"));
}

#[test]
fn test_cli_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_quickref(
        temp_dir.path(),
        &["basic_types", "--log-level", "debug", "--log-file", "quickref.log"],
    );

    assert!(output.status.success());
    let log = fs::read_to_string(temp_dir.path().join("quickref.log")).unwrap();
    assert!(log.contains("Running example: basic_types"));
}
