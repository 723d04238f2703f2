//! Integration tests for YAML run configuration files

use pretty_assertions::assert_eq;
use quickref::config::{ConfigLoader, RunConfig};
use quickref::QuickrefError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_functions_and_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("run.yaml");
    fs::write(
        &path,
        "functions:\n  - vec_iterate\n  - match_basics\noutput_dir: build/quickref\n",
    )
    .unwrap();

    let config = ConfigLoader::new().load(&path).unwrap();
    assert_eq!(
        config,
        RunConfig {
            functions: vec!["vec_iterate".to_string(), "match_basics".to_string()],
            output_dir: Some(PathBuf::from("build/quickref")),
        }
    );
}

#[test]
fn test_load_missing_file_names_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.yaml");

    let err = ConfigLoader::new().load(&path).unwrap_err();
    assert!(matches!(err, QuickrefError::Config(_)));
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn test_load_invalid_yaml_names_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yaml");
    fs::write(&path, "functions: [unterminated\n").unwrap();

    let err = ConfigLoader::new().load(&path).unwrap_err();
    assert!(matches!(err, QuickrefError::Config(_)));
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn test_load_rejects_empty_function_list() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.yaml");
    fs::write(&path, "functions: []\n").unwrap();

    let err = ConfigLoader::new().load(&path).unwrap_err();
    assert!(err.to_string().contains("at least one"));
}
