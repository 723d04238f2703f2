//! Scalars, tuples, arrays, vectors, maps and sets.

use std::collections::BTreeSet;
use std::io::Write;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry, SampleData};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Data Structures";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "basic_types",
            CATEGORY,
            "Integers, floats, bool, char, casts and checked arithmetic",
            ExampleFn::Plain(basic_types),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch03-02-data-types.html")
        .with_snippet("let x: i32 = 42;\nlet ratio: f64 = 2.5;\nlet ok: bool = true;\nlet c: char = 'R';")
        .with_tags(&["basics"]),
    )?;
    registry.register(
        Example::new(
            "tuple_destructure",
            CATEGORY,
            "Destructure tuples into bindings, swap values",
            ExampleFn::WithTestData(tuple_destructure),
        )
        .with_doc_url("https://doc.rust-lang.org/std/primitive.tuple.html")
        .with_snippet("let (a, b, c) = data.triple;"),
    )?;
    registry.register(
        Example::new(
            "vec_iterate",
            CATEGORY,
            "Iterate over a Vec by reference",
            ExampleFn::WithTestData(vec_iterate),
        )
        .with_doc_url("https://doc.rust-lang.org/std/vec/struct.Vec.html")
        .with_snippet("for fruit in &data.fruits {\n    println!(\"{fruit}\");\n}"),
    )?;
    registry.register(
        Example::new(
            "vec_modify",
            CATEGORY,
            "Push, retain and reverse a cloned Vec",
            ExampleFn::WithTestData(vec_modify),
        )
        .with_doc_url("https://doc.rust-lang.org/std/vec/struct.Vec.html#method.retain")
        .with_snippet("let mut fruits = data.fruits.clone();\nfruits.push(\"date\".to_string());"),
    )?;
    registry.register(
        Example::new(
            "slice_operations",
            CATEGORY,
            "Range slicing, first/last, chunks and windows",
            ExampleFn::Plain(slice_operations),
        )
        .with_doc_url("https://doc.rust-lang.org/std/primitive.slice.html")
        .with_snippet("let nums: Vec<i32> = (0..10).collect();\nlet middle = &nums[2..5];"),
    )?;
    registry.register(
        Example::new(
            "map_iterate",
            CATEGORY,
            "Iterate over key/value pairs of an ordered map",
            ExampleFn::WithTestData(map_iterate),
        )
        .with_doc_url("https://doc.rust-lang.org/std/collections/struct.BTreeMap.html")
        .with_snippet("for (key, value) in &data.scores {\n    println!(\"Key: {key}, Value: {value}\");\n}"),
    )?;
    registry.register(
        Example::new(
            "set_operations",
            CATEGORY,
            "Insert, remove, union and intersection on sets",
            ExampleFn::WithTestData(set_operations),
        )
        .with_doc_url("https://doc.rust-lang.org/std/collections/struct.BTreeSet.html"),
    )?;
    registry.register(
        Example::new(
            "contains_check",
            CATEGORY,
            "Membership checks with contains and iter().any",
            ExampleFn::WithTestData(contains_check),
        )
        .with_snippet("if data.fruits.iter().any(|f| f == \"banana\") { ... }"),
    )?;
    Ok(())
}

fn basic_types(out: &mut Output<'_>) -> ExampleResult {
    let x: i32 = 42;
    let ratio: f64 = 2.5;
    let ok = true;
    let c = 'R';
    writeln!(out, "i32:  {x}")?;
    writeln!(out, "f64:  {ratio}")?;
    writeln!(out, "bool: {ok}")?;
    writeln!(out, "char: {c}")?;

    out.show("10 / 3    // integer division\n10 % 3    // remainder\n10.0 / 3.0")?;
    writeln!(out, "10 / 3     = {}", 10 / 3)?;
    writeln!(out, "10 % 3     = {}", 10 % 3)?;
    writeln!(out, "10.0 / 3.0 = {:.4}", 10.0 / 3.0)?;

    out.show("300_i32 as u8\nu8::MAX.checked_add(1)\nu8::MAX.saturating_add(1)")?;
    writeln!(out, "300_i32 as u8          = {}", 300_i32 as u8)?;
    writeln!(out, "u8::MAX.checked_add(1) = {:?}", u8::MAX.checked_add(1))?;
    writeln!(out, "u8::MAX.saturating_add = {}", u8::MAX.saturating_add(1))?;

    let parsed: i32 = "42".parse()?;
    out.show_result("\"42\".parse::<i32>()?", parsed)?;
    Ok(())
}

fn tuple_destructure(out: &mut Output<'_>, data: &SampleData) -> ExampleResult {
    let (a, b, c) = data.triple;
    writeln!(out, "a={a}, b={b}, c={c}")?;

    out.show("let (first, .., last) = data.triple;")?;
    let (first, .., last) = data.triple;
    writeln!(out, "first={first}, last={last}")?;

    out.show("std::mem::swap(&mut x, &mut y);")?;
    let (mut x, mut y) = (1, 2);
    std::mem::swap(&mut x, &mut y);
    writeln!(out, "After swap: x={x}, y={y}")?;
    Ok(())
}

fn vec_iterate(out: &mut Output<'_>, data: &SampleData) -> ExampleResult {
    for fruit in &data.fruits {
        writeln!(out, "  {fruit}")?;
    }

    out.show("for (i, fruit) in data.fruits.iter().enumerate() { ... }")?;
    for (i, fruit) in data.fruits.iter().enumerate() {
        writeln!(out, "  {i}: {fruit}")?;
    }
    Ok(())
}

fn vec_modify(out: &mut Output<'_>, data: &SampleData) -> ExampleResult {
    let mut fruits = data.fruits.clone();
    writeln!(out, "Original: {fruits:?}")?;

    fruits.push("date".to_string());
    writeln!(out, "After push(\"date\"): {fruits:?}")?;

    out.show("fruits.retain(|f| f != \"banana\");")?;
    fruits.retain(|f| f != "banana");
    writeln!(out, "After removing \"banana\": {fruits:?}")?;

    fruits.reverse();
    writeln!(out, "After reverse: {fruits:?}")?;
    writeln!(out, "Shared data untouched: {:?}", data.fruits)?;
    Ok(())
}

fn slice_operations(out: &mut Output<'_>) -> ExampleResult {
    let nums: Vec<i32> = (0..10).collect();
    writeln!(out, "nums        = {nums:?}")?;
    writeln!(out, "&nums[2..5] = {:?}", &nums[2..5])?;
    writeln!(out, "&nums[..3]  = {:?}", &nums[..3])?;
    writeln!(out, "&nums[7..]  = {:?}", &nums[7..])?;
    writeln!(out, "first/last  = {:?} / {:?}", nums.first(), nums.last())?;

    out.show("nums.chunks(4)\nnums.windows(2).count()")?;
    let chunks: Vec<&[i32]> = nums.chunks(4).collect();
    writeln!(out, "chunks(4)   = {chunks:?}")?;
    writeln!(out, "windows(2)  = {} pairs", nums.windows(2).count())?;

    out.show("let s = \"Hello, World!\";\n&s[7..]")?;
    let s = "Hello, World!";
    writeln!(out, "&s[7..]     = {:?}", &s[7..])?;
    let reversed: String = s.chars().rev().collect();
    writeln!(out, "reversed    = {reversed:?}")?;
    Ok(())
}

fn map_iterate(out: &mut Output<'_>, data: &SampleData) -> ExampleResult {
    for (key, value) in &data.scores {
        writeln!(out, "Key: {key}, Value: {value}")?;
    }

    out.show("data.scores.get(\"b\")\ndata.scores.values().sum::<i32>()")?;
    writeln!(out, "get(\"b\") = {:?}", data.scores.get("b"))?;
    writeln!(out, "get(\"z\") = {:?}", data.scores.get("z"))?;
    writeln!(out, "sum      = {}", data.scores.values().sum::<i32>())?;
    Ok(())
}

fn set_operations(out: &mut Output<'_>, data: &SampleData) -> ExampleResult {
    let mut numbers = data.numbers.clone();
    writeln!(out, "Original set: {numbers:?}")?;

    numbers.insert(4);
    writeln!(out, "After adding 4: {numbers:?}")?;
    numbers.remove(&2);
    writeln!(out, "After removing 2: {numbers:?}")?;

    out.show("a.union(&b)\na.intersection(&b)\na.difference(&b)")?;
    let a = &data.numbers;
    let b: BTreeSet<i32> = BTreeSet::from([2, 3, 4]);
    writeln!(out, "union        = {:?}", a.union(&b).collect::<Vec<_>>())?;
    writeln!(out, "intersection = {:?}", a.intersection(&b).collect::<Vec<_>>())?;
    writeln!(out, "difference   = {:?}", a.difference(&b).collect::<Vec<_>>())?;
    Ok(())
}

fn contains_check(out: &mut Output<'_>, data: &SampleData) -> ExampleResult {
    if data.fruits.iter().any(|f| f == "banana") {
        writeln!(out, "\"banana\" is in the list!")?;
    }
    out.show("data.numbers.contains(&5)")?;
    writeln!(out, "contains(&5) = {}", data.numbers.contains(&5))?;
    Ok(())
}
