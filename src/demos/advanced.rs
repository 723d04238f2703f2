//! Data formats and text processing with ecosystem crates.

use std::fs;
use std::io::Write;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Advanced";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "json_operations",
            CATEGORY,
            "Serialize structs to JSON with serde and read them back",
            ExampleFn::WithOutputDir(json_operations),
        )
        .with_doc_url("https://docs.rs/serde_json")
        .with_snippet("let json = serde_json::to_string_pretty(&person)?;\nlet back: Person = serde_json::from_str(&json)?;")
        .with_tags(&["serde", "io"]),
    )?;
    registry.register(
        Example::new(
            "regex_patterns",
            CATEGORY,
            "Match, capture and replace with the regex crate",
            ExampleFn::Plain(regex_patterns),
        )
        .with_doc_url("https://docs.rs/regex")
        .with_snippet("let re = Regex::new(r\"(\\d{4})-(\\d{2})-(\\d{2})\")?;"),
    )?;
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Person {
    name: String,
    age: u32,
    languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

fn json_operations(out: &mut Output<'_>, dir: &Path) -> ExampleResult {
    let person = Person {
        name: "Alice".to_string(),
        age: 30,
        languages: vec!["Rust".to_string(), "Python".to_string()],
        email: None,
    };

    let json = serde_json::to_string_pretty(&person)?;
    writeln!(out, "{json}")?;

    let path = dir.join("person.json");
    fs::write(&path, &json)?;
    writeln!(out, "Saved to {}", path.display())?;

    let back: Person = serde_json::from_str(&fs::read_to_string(&path)?)?;
    writeln!(out, "Round trip equal: {}", back == person)?;

    out.show("let value: serde_json::Value = serde_json::from_str(raw)?;\nvalue[\"tags\"][0]")?;
    let raw = r#"{"id": 7, "tags": ["fast", "safe"], "meta": {"stable": true}}"#;
    let value: serde_json::Value = serde_json::from_str(raw)?;
    writeln!(out, "id = {}", value["id"])?;
    writeln!(out, "first tag = {}", value["tags"][0])?;
    writeln!(out, "meta.stable = {}", value["meta"]["stable"])?;
    writeln!(out, "missing = {}", value["nope"])?;
    Ok(())
}

fn regex_patterns(out: &mut Output<'_>) -> ExampleResult {
    let text = "Released 2015-05-15, edition 2018-12-06, edition 2021-10-21";

    let date = Regex::new(r"(\d{4})-(\d{2})-(\d{2})")?;
    writeln!(out, "is_match: {}", date.is_match(text))?;
    for caps in date.captures_iter(text) {
        writeln!(out, "  year={} month={} day={}", &caps[1], &caps[2], &caps[3])?;
    }

    out.show("let named = Regex::new(r\"(?P<y>\\d{4})-(?P<m>\\d{2})-(?P<d>\\d{2})\")?;\nnamed.replace_all(text, \"$d/$m/$y\")")?;
    let named = Regex::new(r"(?P<y>\d{4})-(?P<m>\d{2})-(?P<d>\d{2})")?;
    writeln!(out, "{}", named.replace_all(text, "$d/$m/$y"))?;

    let email = Regex::new(r"^[\w.+-]+@[\w-]+\.[\w.]+$")?;
    for candidate in ["dev@example.com", "not-an-email"] {
        writeln!(out, "{candidate:>16} valid: {}", email.is_match(candidate))?;
    }
    Ok(())
}
