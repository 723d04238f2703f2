//! Integration tests for the example registry

use pretty_assertions::assert_eq;
use quickref::catalog::{Example, ExampleFn, ExampleResult, Registry, Resource};
use quickref::output::Output;
use quickref::QuickrefError;
use std::collections::HashSet;

fn noop(_out: &mut Output<'_>) -> ExampleResult {
    Ok(())
}

#[test]
fn test_builtin_names_are_unique() {
    let registry = Registry::builtin().unwrap();
    let names: HashSet<&str> = registry.all().iter().map(|e| e.name()).collect();
    assert_eq!(names.len(), registry.len());
    assert_eq!(registry.names().len(), registry.len());
}

#[test]
fn test_builtin_examples_have_metadata() {
    let registry = Registry::builtin().unwrap();
    assert!(!registry.is_empty());
    for example in registry.all() {
        assert!(!example.name().is_empty());
        assert!(!example.category().is_empty(), "{} has no category", example.name());
        assert!(
            !example.description().is_empty(),
            "{} has no description",
            example.name()
        );
        if let Some(url) = example.doc_url() {
            assert!(url.starts_with("https://"), "{} has bad url {url}", example.name());
        }
    }
}

#[test]
fn test_builtin_resource_flags() {
    let registry = Registry::builtin().unwrap();
    assert_eq!(registry.get("vec_iterate").unwrap().resource(), Resource::TestData);
    assert_eq!(registry.get("file_write").unwrap().resource(), Resource::OutputDir);
    assert_eq!(registry.get("basic_types").unwrap().resource(), Resource::None);
}

#[test]
fn test_duplicate_registration_keeps_original() {
    let mut registry = Registry::new();
    registry
        .register(Example::new("dup", "First", "original", ExampleFn::Plain(noop)))
        .unwrap();

    let err = registry
        .register(Example::new("dup", "Second", "replacement", ExampleFn::Plain(noop)))
        .unwrap_err();

    assert!(matches!(err, QuickrefError::DuplicateName(ref name) if name == "dup"));
    assert_eq!(registry.len(), 1);
    let kept = registry.get("dup").unwrap();
    assert_eq!(kept.category(), "First");
    assert_eq!(kept.description(), "original");
}

#[test]
fn test_lookup_of_unknown_name() {
    let registry = Registry::builtin().unwrap();
    let err = registry.get("nonexistent").unwrap_err();
    assert!(err.is_not_found());
    assert!(!registry.contains("nonexistent"));
}

#[test]
fn test_category_query_preserves_registration_order() {
    let registry = Registry::builtin().unwrap();
    let loops: Vec<&str> = registry.in_category("Loops").map(|e| e.name()).collect();
    assert_eq!(loops, vec!["loop_range", "loop_labels"]);
    assert_eq!(registry.in_category("No Such Category").count(), 0);
}
