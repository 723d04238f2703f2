//! Result, Option and error types.

use std::io::Write;
use std::num::ParseIntError;

use anyhow::Context;
use thiserror::Error;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Error Handling";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "result_question_mark",
            CATEGORY,
            "Propagate errors with the ? operator",
            ExampleFn::Plain(result_question_mark),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch09-02-recoverable-errors-with-result.html")
        .with_snippet("fn sum_pair(a: &str, b: &str) -> Result<i32, ParseIntError> {\n    Ok(a.parse::<i32>()? + b.parse::<i32>()?)\n}"),
    )?;
    registry.register(
        Example::new(
            "custom_error",
            CATEGORY,
            "A custom error enum derived with thiserror",
            ExampleFn::Plain(custom_error),
        )
        .with_doc_url("https://docs.rs/thiserror")
        .with_snippet("#[derive(Debug, Error)]\nenum WithdrawError {\n    #[error(\"insufficient funds: balance {balance}, requested {requested}\")]\n    Insufficient { balance: u32, requested: u32 },\n}"),
    )?;
    registry.register(
        Example::new(
            "option_combinators",
            CATEGORY,
            "map, and_then, unwrap_or and ok_or on Option",
            ExampleFn::Plain(option_combinators),
        )
        .with_doc_url("https://doc.rust-lang.org/std/option/enum.Option.html"),
    )?;
    registry.register(
        Example::new(
            "anyhow_context",
            CATEGORY,
            "Attach context to errors with anyhow",
            ExampleFn::Plain(anyhow_context),
        )
        .with_doc_url("https://docs.rs/anyhow"),
    )?;
    Ok(())
}

fn sum_pair(a: &str, b: &str) -> std::result::Result<i32, ParseIntError> {
    Ok(a.parse::<i32>()? + b.parse::<i32>()?)
}

fn result_question_mark(out: &mut Output<'_>) -> ExampleResult {
    writeln!(out, "sum_pair(\"2\", \"40\") = {:?}", sum_pair("2", "40"))?;
    match sum_pair("2", "forty") {
        Ok(total) => writeln!(out, "unexpected total {total}")?,
        Err(err) => writeln!(out, "sum_pair(\"2\", \"forty\") failed: {err}")?,
    }

    out.show("let n: i32 = \"7\".parse().unwrap_or_default();")?;
    let n: i32 = "seven".parse().unwrap_or_default();
    writeln!(out, "fallback value = {n}")?;
    Ok(())
}

#[derive(Debug, Error, PartialEq)]
enum WithdrawError {
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    Insufficient { balance: u32, requested: u32 },
    #[error("account is frozen")]
    Frozen,
}

fn withdraw(balance: u32, amount: u32, frozen: bool) -> std::result::Result<u32, WithdrawError> {
    if frozen {
        return Err(WithdrawError::Frozen);
    }
    balance
        .checked_sub(amount)
        .ok_or(WithdrawError::Insufficient {
            balance,
            requested: amount,
        })
}

fn custom_error(out: &mut Output<'_>) -> ExampleResult {
    for (amount, frozen) in [(30, false), (500, false), (10, true)] {
        match withdraw(100, amount, frozen) {
            Ok(left) => writeln!(out, "withdraw {amount}: ok, {left} left")?,
            Err(err) => writeln!(out, "withdraw {amount}: {err}")?,
        }
    }
    Ok(())
}

fn option_combinators(out: &mut Output<'_>) -> ExampleResult {
    let present: Option<i32> = Some(4);
    let absent: Option<i32> = None;

    out.show("present.map(|n| n * 2)\nabsent.unwrap_or(0)")?;
    writeln!(out, "map       = {:?}", present.map(|n| n * 2))?;
    writeln!(out, "unwrap_or = {}", absent.unwrap_or(0))?;

    out.show("present.and_then(|n| if n > 3 { Some(n) } else { None })")?;
    writeln!(
        out,
        "and_then  = {:?}",
        present.and_then(|n| if n > 3 { Some(n) } else { None })
    )?;
    writeln!(out, "filter    = {:?}", present.filter(|n| n % 2 == 1))?;
    writeln!(out, "ok_or     = {:?}", absent.ok_or("missing"))?;

    let words = ["alpha", "beta"];
    writeln!(out, "words.get(5) = {:?}", words.get(5).copied())?;
    Ok(())
}

fn read_port(raw: &str) -> anyhow::Result<u16> {
    let port: u16 = raw
        .trim()
        .parse()
        .with_context(|| format!("'{raw}' is not a valid port"))?;
    anyhow::ensure!(port >= 1024, "port {port} is reserved");
    Ok(port)
}

fn anyhow_context(out: &mut Output<'_>) -> ExampleResult {
    out.show(".with_context(|| format!(\"'{raw}' is not a valid port\"))?")?;
    for raw in ["8080", "http", "80"] {
        match read_port(raw) {
            Ok(port) => writeln!(out, "{raw:>6}: port {port}")?,
            Err(err) => writeln!(out, "{raw:>6}: {err:#}")?,
        }
    }
    Ok(())
}
