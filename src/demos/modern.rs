//! Patterns, data-carrying enums and custom iterators.

use std::io::Write;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Modern Rust";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "pattern_matching",
            CATEGORY,
            "Slice patterns, bindings with @ and nested destructuring",
            ExampleFn::Plain(pattern_matching),
        )
        .with_doc_url("https://doc.rust-lang.org/reference/patterns.html")
        .with_snippet("match items {\n    [] => \"empty\",\n    [one] => ...,\n    [first, .., last] => ...,\n}"),
    )?;
    registry.register(
        Example::new(
            "enums_with_data",
            CATEGORY,
            "Enums whose variants carry data, with exhaustive matching",
            ExampleFn::Plain(enums_with_data),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch06-01-defining-an-enum.html"),
    )?;
    registry.register(
        Example::new(
            "let_else",
            CATEGORY,
            "let-else and if-let chains for early exits",
            ExampleFn::Plain(let_else),
        )
        .with_doc_url("https://doc.rust-lang.org/rust-by-example/flow_control/let_else.html")
        .with_snippet("let Some((key, value)) = line.split_once('=') else {\n    return None;\n};"),
    )?;
    registry.register(
        Example::new(
            "custom_iterator",
            CATEGORY,
            "Implement Iterator for a Fibonacci generator",
            ExampleFn::Plain(custom_iterator),
        )
        .with_doc_url("https://doc.rust-lang.org/std/iter/index.html#implementing-iterator")
        .with_tags(&["iterators"]),
    )?;
    Ok(())
}

fn describe(items: &[i32]) -> String {
    match items {
        [] => "empty".to_string(),
        [one] => format!("one item: {one}"),
        [first, second] => format!("pair: {first} and {second}"),
        [first, .., last] => format!("{} items from {first} to {last}", items.len()),
    }
}

fn pattern_matching(out: &mut Output<'_>) -> ExampleResult {
    let cases: [&[i32]; 4] = [&[], &[7], &[1, 2], &[1, 2, 3, 4]];
    for items in cases {
        writeln!(out, "{items:?} -> {}", describe(items))?;
    }

    out.show("n @ 13..=19 => format!(\"teen {n}\")")?;
    for age in [8, 15, 42] {
        let label = match age {
            n @ 0..=12 => format!("child {n}"),
            n @ 13..=19 => format!("teen {n}"),
            n => format!("adult {n}"),
        };
        writeln!(out, "{label}")?;
    }

    out.show("let ((a, b), [c, d]) = ((1, 2), [3, 4]);")?;
    let ((a, b), [c, d]) = ((1, 2), [3, 4]);
    writeln!(out, "a={a} b={b} c={c} d={d}")?;
    Ok(())
}

#[derive(Debug)]
enum Command {
    Quit,
    Move { x: i32, y: i32 },
    Write(String),
    Color(u8, u8, u8),
}

impl Command {
    fn summary(&self) -> String {
        match self {
            Command::Quit => "quit".to_string(),
            Command::Move { x, y } => format!("move to ({x}, {y})"),
            Command::Write(text) => format!("write {text:?}"),
            Command::Color(r, g, b) => format!("color #{r:02x}{g:02x}{b:02x}"),
        }
    }
}

fn enums_with_data(out: &mut Output<'_>) -> ExampleResult {
    let commands = [
        Command::Move { x: 3, y: -1 },
        Command::Write("hello".to_string()),
        Command::Color(255, 128, 0),
        Command::Quit,
    ];
    for command in &commands {
        writeln!(out, "{:<28} {}", format!("{command:?}"), command.summary())?;
    }
    Ok(())
}

fn parse_setting(line: &str) -> Option<(&str, i32)> {
    let Some((key, value)) = line.split_once('=') else {
        return None;
    };
    let Ok(number) = value.trim().parse::<i32>() else {
        return None;
    };
    Some((key.trim(), number))
}

fn let_else(out: &mut Output<'_>) -> ExampleResult {
    for line in ["width = 80", "height=24", "broken line", "depth = deep"] {
        writeln!(out, "{line:?} -> {:?}", parse_setting(line))?;
    }

    out.show("if let Some(first) = words.first() { ... }\nwhile let Some(top) = stack.pop() { ... }")?;
    let words = ["pattern", "matching"];
    if let Some(first) = words.first() {
        writeln!(out, "first word: {first}")?;
    }
    let mut stack = vec![1, 2, 3];
    while let Some(top) = stack.pop() {
        writeln!(out, "popped {top}")?;
    }
    Ok(())
}

struct Fibonacci {
    current: u64,
    next: u64,
}

impl Fibonacci {
    fn new() -> Self {
        Self { current: 0, next: 1 }
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.current;
        let following = self.current.checked_add(self.next)?;
        self.current = self.next;
        self.next = following;
        Some(value)
    }
}

fn custom_iterator(out: &mut Output<'_>) -> ExampleResult {
    out.show("impl Iterator for Fibonacci {\n    type Item = u64;\n    fn next(&mut self) -> Option<u64> { ... }\n}")?;
    let first: Vec<u64> = Fibonacci::new().take(10).collect();
    writeln!(out, "first 10: {first:?}")?;

    let even_sum: u64 = Fibonacci::new()
        .take_while(|&n| n < 1000)
        .filter(|n| n % 2 == 0)
        .sum();
    writeln!(out, "sum of even terms below 1000: {even_sum}")?;
    writeln!(out, "terms before u64 overflow: {}", Fibonacci::new().count())?;
    Ok(())
}
