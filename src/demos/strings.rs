//! String and &str manipulation.

use std::io::Write;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry, SampleData};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Strings";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "string_operations",
            CATEGORY,
            "Case conversion, split, replace, trim and find",
            ExampleFn::WithTestData(string_operations),
        )
        .with_doc_url("https://doc.rust-lang.org/std/string/struct.String.html")
        .with_snippet("data.text.to_uppercase()\ndata.text.split_whitespace()\ndata.text.replace(\"awesome\", \"fast\")"),
    )?;
    registry.register(
        Example::new(
            "string_formatting",
            CATEGORY,
            "format! width, precision, alignment, Debug and radix",
            ExampleFn::Plain(string_formatting),
        )
        .with_doc_url("https://doc.rust-lang.org/std/fmt/index.html"),
    )?;
    registry.register(
        Example::new(
            "unicode_bytes",
            CATEGORY,
            "chars vs bytes, UTF-8 encoding and char boundaries",
            ExampleFn::Plain(unicode_bytes),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch08-02-strings.html"),
    )?;
    Ok(())
}

fn string_operations(out: &mut Output<'_>, data: &SampleData) -> ExampleResult {
    let text = &data.text;
    writeln!(out, "Original:  {text}")?;
    writeln!(out, "Uppercase: {}", text.to_uppercase())?;
    writeln!(out, "Lowercase: {}", text.to_lowercase())?;

    let words: Vec<&str> = text.split_whitespace().collect();
    writeln!(out, "Words:     {words:?}")?;
    writeln!(out, "Replaced:  {}", text.replace("awesome", "fast"))?;

    out.show("\"  padded  \".trim()\ntext.find(\"is\")\ntext.starts_with(\"Rust\")")?;
    writeln!(out, "Trimmed:   {:?}", "  padded  ".trim())?;
    writeln!(out, "find(\"is\"): {:?}", text.find("is"))?;
    writeln!(out, "starts_with(\"Rust\"): {}", text.starts_with("Rust"))?;

    out.show("let mut s = String::from(\"Hello\");\ns.push_str(\", world\");")?;
    let mut s = String::from("Hello");
    s.push_str(", world");
    s.push('!');
    writeln!(out, "Built:     {s}")?;
    Ok(())
}

fn string_formatting(out: &mut Output<'_>) -> ExampleResult {
    let name = "Ferris";
    let pi = std::f64::consts::PI;

    out.show("format!(\"{name:>10}|{name:<10}|{name:^10}|\")")?;
    writeln!(out, "{name:>10}|{name:<10}|{name:^10}|")?;

    out.show("format!(\"{pi:.2} {pi:8.3} {:05}\", 42)")?;
    writeln!(out, "{pi:.2} {pi:8.3} {:05}", 42)?;

    out.show("format!(\"{:x} {:o} {:b} {:#x}\", 255, 8, 5, 255)")?;
    writeln!(out, "{:x} {:o} {:b} {:#x}", 255, 8, 5, 255)?;

    out.show("format!(\"{:?} {:?}\", \"quoted\", Some(3))")?;
    writeln!(out, "{:?} {:?}", "quoted", Some(3))?;
    Ok(())
}

fn unicode_bytes(out: &mut Output<'_>) -> ExampleResult {
    let word = "héllo";
    writeln!(out, "{word:?}: {} chars, {} bytes", word.chars().count(), word.len())?;

    out.show("word.as_bytes()\nword.char_indices()")?;
    writeln!(out, "bytes: {:?}", word.as_bytes())?;
    let indices: Vec<(usize, char)> = word.char_indices().collect();
    writeln!(out, "char_indices: {indices:?}")?;

    out.show("word.is_char_boundary(2)\nword.get(0..2)")?;
    writeln!(out, "is_char_boundary(2) = {}", word.is_char_boundary(2))?;
    writeln!(out, "get(0..2) = {:?}", word.get(0..2))?;
    writeln!(out, "get(0..3) = {:?}", word.get(0..3))?;

    let bytes = "Grüße".as_bytes().to_vec();
    let decoded = String::from_utf8(bytes)?;
    writeln!(out, "Round trip through bytes: {decoded}")?;
    Ok(())
}
