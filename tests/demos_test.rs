//! Runs every shipped example and checks a few of their outputs

use pretty_assertions::assert_eq;
use quickref::catalog::{LessonCatalog, Registry};
use quickref::runner::{RunOptions, RunReport, Runner, Selection};
use std::path::Path;
use tempfile::TempDir;

fn run_names(dir: &Path, names: &[&str]) -> (RunReport, String) {
    let registry = Registry::builtin().unwrap();
    let lessons = LessonCatalog::builtin().unwrap();
    let runner = Runner::new(&registry, &lessons).with_options(RunOptions {
        output_dir: dir.join("data"),
        show_source: false,
    });

    let selection = Selection::Names(names.iter().map(|n| n.to_string()).collect());
    let mut buf = Vec::new();
    let report = runner.run(&selection, &mut buf).unwrap();
    (report, String::from_utf8(buf).unwrap())
}

#[test]
fn test_every_builtin_example_passes() {
    let temp_dir = TempDir::new().unwrap();
    let registry = Registry::builtin().unwrap();
    let names: Vec<&str> = registry.all().iter().map(|e| e.name()).collect();

    let (report, _) = run_names(temp_dir.path(), &names);
    let failures: Vec<String> = report
        .failures()
        .map(|(name, err)| format!("{name}: {err}"))
        .collect();
    assert_eq!(failures, Vec::<String>::new());
    assert_eq!(report.passed(), registry.len());
}

#[test]
fn test_loop_range_output() {
    let temp_dir = TempDir::new().unwrap();
    let (report, output) = run_names(temp_dir.path(), &["loop_range"]);
    assert!(report.is_success());

    assert!(output.contains("Range(0..5): [0, 1, 2, 3, 4]"));
    assert!(output.contains("Enumerate:\n  0: apple"));
    assert!(output.contains("Zip:\n  Alice is 25"));
    assert!(output.contains("While loop (break at 3):\n  count=0\n  count=1\n  count=2\n"));
    assert!(!output.contains("count=3"));
    assert!(output.contains("Continue (skip even):\n  1\n  3\n  5\n"));
}

#[test]
fn test_data_structure_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let (report, output) = run_names(
        temp_dir.path(),
        &["tuple_destructure", "map_iterate", "set_operations", "contains_check"],
    );
    assert!(report.is_success());

    assert!(output.contains("a=10, b=20, c=30"));
    assert!(output.contains("Key: a, Value: 1\nKey: b, Value: 2\nKey: c, Value: 3"));
    assert!(output.contains("After adding 4: {1, 2, 3, 4}"));
    assert!(output.contains("After removing 2: {1, 3, 4}"));
    assert!(output.contains("\"banana\" is in the list!"));
}

#[test]
fn test_iterator_adapters_output() {
    let temp_dir = TempDir::new().unwrap();
    let (_, output) = run_names(temp_dir.path(), &["iterator_adapters", "custom_iterator"]);
    assert!(output.contains("squares    = [0, 1, 4, 9, 16]"));
    assert!(output.contains("first 10: [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]"));
    assert!(output.contains("sum of even terms below 1000: 798"));
}

#[test]
fn test_concurrency_outputs_are_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    let (report, output) = run_names(
        temp_dir.path(),
        &["arc_mutex_counter", "mpsc_channel", "async_tasks"],
    );
    assert!(report.is_success());
    assert!(output.contains("4 threads x 1000 increments = 4000"));
    assert!(output.contains("Received 6 messages"));
    assert!(output.contains("Gathered: result-1, result-2, result-3"));
}

#[test]
fn test_file_examples_write_into_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let (report, output) = run_names(
        temp_dir.path(),
        &["file_write", "json_operations", "drop_guard", "glob_files"],
    );
    assert!(report.is_success());

    let data = temp_dir.path().join("data");
    assert!(data.join("example.txt").is_file());
    assert!(data.join("person.json").is_file());
    assert!(!data.join("scratch.tmp").exists());
    assert!(output.contains("After scope, exists: false"));
    assert!(output.contains("*.txt matches: [\"notes.txt\", \"todo.txt\"]"));
}

#[test]
fn test_glob_files_with_brackets_in_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let registry = Registry::builtin().unwrap();
    let lessons = LessonCatalog::builtin().unwrap();
    let runner = Runner::new(&registry, &lessons).with_options(RunOptions {
        output_dir: temp_dir.path().join("out[1]"),
        show_source: false,
    });

    let mut buf = Vec::new();
    let report = runner
        .run(&Selection::Names(vec!["glob_files".to_string()]), &mut buf)
        .unwrap();
    let output = String::from_utf8(buf).unwrap();
    assert!(report.is_success());
    assert!(output.contains("*.txt matches: [\"notes.txt\", \"todo.txt\"]"));
}
