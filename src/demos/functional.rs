//! Functions, closures and iterator pipelines.

use std::io::Write;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Functional";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "function_basics",
            CATEGORY,
            "Parameters, return values and tuples as multiple returns",
            ExampleFn::Plain(function_basics),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch03-03-how-functions-work.html")
        .with_snippet("fn min_max(values: &[i32]) -> Option<(i32, i32)> { ... }"),
    )?;
    registry.register(
        Example::new(
            "closures",
            CATEGORY,
            "Closures capturing by reference, by mutable reference and by move",
            ExampleFn::Plain(closures),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch13-01-closures.html"),
    )?;
    registry.register(
        Example::new(
            "iterator_adapters",
            CATEGORY,
            "map, filter, take_while, skip, chain and collect",
            ExampleFn::Plain(iterator_adapters),
        )
        .with_doc_url("https://doc.rust-lang.org/std/iter/trait.Iterator.html")
        .with_snippet("let squares: Vec<i32> = (0..5).map(|x| x * x).collect();")
        .with_tags(&["iterators"]),
    )?;
    registry.register(
        Example::new(
            "fold_reduce",
            CATEGORY,
            "Aggregate with sum, product, fold and reduce",
            ExampleFn::Plain(fold_reduce),
        )
        .with_doc_url("https://doc.rust-lang.org/std/iter/trait.Iterator.html#method.fold")
        .with_tags(&["iterators"]),
    )?;
    registry.register(
        Example::new(
            "higher_order",
            CATEGORY,
            "Pass functions as arguments and return closures",
            ExampleFn::Plain(higher_order),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch19-05-advanced-functions-and-closures.html"),
    )?;
    Ok(())
}

fn min_max(values: &[i32]) -> Option<(i32, i32)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}

fn greet(name: &str, excited: bool) -> String {
    if excited {
        format!("Hello, {name}!")
    } else {
        format!("Hello, {name}.")
    }
}

fn function_basics(out: &mut Output<'_>) -> ExampleResult {
    writeln!(out, "{}", greet("Alice", true))?;
    writeln!(out, "{}", greet("Bob", false))?;

    out.show("let (lo, hi) = min_max(&[3, 9, 1, 7])?;")?;
    writeln!(out, "min_max([3, 9, 1, 7]) = {:?}", min_max(&[3, 9, 1, 7]))?;
    writeln!(out, "min_max([]) = {:?}", min_max(&[]))?;
    Ok(())
}

fn closures(out: &mut Output<'_>) -> ExampleResult {
    let factor = 3;
    let triple = |x: i32| x * factor;
    writeln!(out, "triple(7) = {}", triple(7))?;

    out.show("let mut total = 0;\nlet mut add = |x| total += x;")?;
    let mut total = 0;
    let mut add = |x: i32| total += x;
    add(5);
    add(10);
    writeln!(out, "total after two calls = {total}")?;

    out.show("let owned = String::from(\"moved\");\nlet consume = move || owned.len();")?;
    let owned = String::from("moved");
    let consume = move || owned.len();
    writeln!(out, "length seen by move closure = {}", consume())?;
    Ok(())
}

fn iterator_adapters(out: &mut Output<'_>) -> ExampleResult {
    let squares: Vec<i32> = (0..5).map(|x| x * x).collect();
    writeln!(out, "squares    = {squares:?}")?;

    out.show("(1..=10).filter(|n| n % 2 == 0)")?;
    let evens: Vec<i32> = (1..=10).filter(|n| n % 2 == 0).collect();
    writeln!(out, "evens      = {evens:?}")?;

    let small: Vec<i32> = (1..).take_while(|n| n * n < 30).collect();
    writeln!(out, "take_while = {small:?}")?;

    let chained: Vec<i32> = (1..3).chain(7..9).skip(1).collect();
    writeln!(out, "chain/skip = {chained:?}")?;

    out.show("words.iter().map(|w| w.len()).max()")?;
    let words = ["iterator", "map", "adapter"];
    writeln!(out, "longest    = {:?}", words.iter().map(|w| w.len()).max())?;
    Ok(())
}

fn fold_reduce(out: &mut Output<'_>) -> ExampleResult {
    let nums = [1, 2, 3, 4, 5];
    writeln!(out, "sum     = {}", nums.iter().sum::<i32>())?;
    writeln!(out, "product = {}", nums.iter().product::<i32>())?;

    out.show("nums.iter().fold(String::new(), |acc, n| ...)")?;
    let joined = nums.iter().fold(String::new(), |acc, n| {
        if acc.is_empty() {
            n.to_string()
        } else {
            format!("{acc}-{n}")
        }
    });
    writeln!(out, "fold    = {joined}")?;

    out.show_result(
        "nums.into_iter().reduce(i32::max)",
        format!("{:?}", nums.into_iter().reduce(i32::max)),
    )?;
    Ok(())
}

fn apply_twice(f: impl Fn(i32) -> i32, value: i32) -> i32 {
    f(f(value))
}

fn make_adder(n: i32) -> impl Fn(i32) -> i32 {
    move |x| x + n
}

fn double(x: i32) -> i32 {
    x * 2
}

fn higher_order(out: &mut Output<'_>) -> ExampleResult {
    out.show("fn apply_twice(f: impl Fn(i32) -> i32, value: i32) -> i32")?;
    writeln!(out, "apply_twice(double, 3) = {}", apply_twice(double, 3))?;
    writeln!(out, "apply_twice(|x| x - 1, 3) = {}", apply_twice(|x| x - 1, 3))?;

    out.show("fn make_adder(n: i32) -> impl Fn(i32) -> i32")?;
    let add_five = make_adder(5);
    writeln!(out, "make_adder(5)(10) = {}", add_five(10))?;

    let pipeline: Vec<Box<dyn Fn(i32) -> i32>> = vec![Box::new(double), Box::new(make_adder(1))];
    let result = pipeline.iter().fold(4, |acc, f| f(acc));
    writeln!(out, "double then add 1 on 4 = {result}")?;
    Ok(())
}
