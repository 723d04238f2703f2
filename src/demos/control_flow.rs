//! Branching and early returns.

use std::io::Write;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Control Flow";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "if_else_expr",
            CATEGORY,
            "if/else if/else as expressions that produce values",
            ExampleFn::Plain(if_else_expr),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch03-05-control-flow.html#if-expressions")
        .with_snippet(
            "let grade = if score >= 90 {\n    \"A\"\n} else if score >= 80 {\n    \"B\"\n} else {\n    \"C\"\n};",
        ),
    )?;
    registry.register(
        Example::new(
            "match_basics",
            CATEGORY,
            "match with ranges, alternatives and guards",
            ExampleFn::Plain(match_basics),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch06-02-match.html")
        .with_snippet("match n {\n    0 => \"zero\",\n    1 | 2 => \"small\",\n    3..=9 => \"medium\",\n    n if n < 0 => \"negative\",\n    _ => \"large\",\n}"),
    )?;
    registry.register(
        Example::new(
            "early_return",
            CATEGORY,
            "Guard clauses and early returns instead of nesting",
            ExampleFn::Plain(early_return),
        )
        .with_doc_url("https://doc.rust-lang.org/std/keyword.return.html"),
    )?;
    Ok(())
}

fn if_else_expr(out: &mut Output<'_>) -> ExampleResult {
    for score in [95, 85, 70] {
        let grade = if score >= 90 {
            "A"
        } else if score >= 80 {
            "B"
        } else {
            "C"
        };
        writeln!(out, "score {score} -> grade {grade}")?;
    }

    out.show("let parity = if n % 2 == 0 { \"even\" } else { \"odd\" };")?;
    let n = 7;
    let parity = if n % 2 == 0 { "even" } else { "odd" };
    writeln!(out, "{n} is {parity}")?;
    Ok(())
}

fn classify(n: i32) -> &'static str {
    match n {
        0 => "zero",
        1 | 2 => "small",
        3..=9 => "medium",
        n if n < 0 => "negative",
        _ => "large",
    }
}

fn match_basics(out: &mut Output<'_>) -> ExampleResult {
    for n in [0, 2, 5, -4, 100] {
        writeln!(out, "{n:>4} -> {}", classify(n))?;
    }

    out.show("match (x, y) {\n    (0, 0) => \"origin\",\n    (_, 0) => \"on x axis\",\n    (0, _) => \"on y axis\",\n    _ => \"elsewhere\",\n}")?;
    for point in [(0, 0), (3, 0), (0, -1), (2, 2)] {
        let place = match point {
            (0, 0) => "origin",
            (_, 0) => "on x axis",
            (0, _) => "on y axis",
            _ => "elsewhere",
        };
        writeln!(out, "{point:?} is {place}")?;
    }
    Ok(())
}

fn validate_age(age: i32) -> std::result::Result<&'static str, String> {
    if age < 0 {
        return Err(format!("{age} is negative"));
    }
    if age > 150 {
        return Err(format!("{age} is unrealistic"));
    }
    Ok(if age >= 18 { "adult" } else { "minor" })
}

fn early_return(out: &mut Output<'_>) -> ExampleResult {
    out.show("if age < 0 {\n    return Err(format!(\"{age} is negative\"));\n}")?;
    for age in [25, 12, -3, 200] {
        match validate_age(age) {
            Ok(kind) => writeln!(out, "age {age}: {kind}")?,
            Err(reason) => writeln!(out, "age {age}: rejected ({reason})")?,
        }
    }
    Ok(())
}
