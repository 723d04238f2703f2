//! for, while and loop.

use std::io::Write;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Loops";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "loop_range",
            CATEGORY,
            "Ranges, enumerate, zip, while with break, continue",
            ExampleFn::Plain(loop_range),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch03-05-control-flow.html#repetition-with-loops")
        .with_snippet("for (i, fruit) in fruits.iter().enumerate() {\n    println!(\"  {i}: {fruit}\");\n}"),
    )?;
    registry.register(
        Example::new(
            "loop_labels",
            CATEGORY,
            "loop as an expression, labeled break and continue",
            ExampleFn::Plain(loop_labels),
        )
        .with_doc_url("https://doc.rust-lang.org/reference/expressions/loop-expr.html"),
    )?;
    Ok(())
}

fn loop_range(out: &mut Output<'_>) -> ExampleResult {
    out.show("(0..5).collect::<Vec<_>>()")?;
    writeln!(out, "Range(0..5): {:?}", (0..5).collect::<Vec<_>>())?;

    let fruits = ["apple", "banana", "cherry"];
    writeln!(out, "Enumerate:")?;
    for (i, fruit) in fruits.iter().enumerate() {
        writeln!(out, "  {i}: {fruit}")?;
    }

    out.show("for (name, age) in names.iter().zip(ages) { ... }")?;
    let names = ["Alice", "Bob", "Charlie"];
    let ages = [25, 30, 35];
    writeln!(out, "Zip:")?;
    for (name, age) in names.iter().zip(ages) {
        writeln!(out, "  {name} is {age}")?;
    }

    out.show("while count < 10 {\n    if count == 3 { break; }\n    count += 1;\n}")?;
    writeln!(out, "While loop (break at 3):")?;
    let mut count = 0;
    while count < 10 {
        if count == 3 {
            break;
        }
        writeln!(out, "  count={count}")?;
        count += 1;
    }

    out.show("for i in 0..6 {\n    if i % 2 == 0 { continue; }\n}")?;
    writeln!(out, "Continue (skip even):")?;
    for i in 0..6 {
        if i % 2 == 0 {
            continue;
        }
        writeln!(out, "  {i}")?;
    }
    Ok(())
}

fn loop_labels(out: &mut Output<'_>) -> ExampleResult {
    out.show("let first_square = loop {\n    n += 1;\n    if n * n > 50 { break n * n; }\n};")?;
    let mut n = 0;
    let first_square = loop {
        n += 1;
        if n * n > 50 {
            break n * n;
        }
    };
    writeln!(out, "First square above 50: {first_square}")?;

    out.show("'outer: for x in 1..10 {\n    for y in 1..10 {\n        if x * y == 12 { break 'outer; }\n    }\n}")?;
    let mut found = None;
    'outer: for x in 1..10 {
        for y in 1..10 {
            if x * y == 12 {
                found = Some((x, y));
                break 'outer;
            }
        }
    }
    writeln!(out, "First pair with product 12: {found:?}")?;

    out.show("for i in (0..10).step_by(3).rev() { ... }")?;
    let stepped: Vec<i32> = (0..10).step_by(3).rev().collect();
    writeln!(out, "step_by(3).rev(): {stepped:?}")?;
    Ok(())
}
