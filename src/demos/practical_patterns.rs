//! Patterns that show up in everyday service code.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::time::Duration;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Practical Patterns";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "retry_backoff",
            CATEGORY,
            "Retry a flaky operation with exponential backoff",
            ExampleFn::Plain(retry_backoff),
        )
        .with_snippet("for attempt in 1..=max_attempts {\n    match op() {\n        Ok(v) => return Ok(v),\n        Err(e) => sleep(delay * 2u32.pow(attempt - 1)),\n    }\n}"),
    )?;
    registry.register(
        Example::new(
            "pipeline",
            CATEGORY,
            "Parse, validate and transform records in one iterator chain",
            ExampleFn::Plain(pipeline),
        )
        .with_tags(&["iterators"]),
    )?;
    registry.register(
        Example::new(
            "batching",
            CATEGORY,
            "Process work in fixed-size batches with chunks",
            ExampleFn::Plain(batching),
        )
        .with_doc_url("https://doc.rust-lang.org/std/primitive.slice.html#method.chunks"),
    )?;
    registry.register(
        Example::new(
            "memoization",
            CATEGORY,
            "Cache results of an expensive recursive function",
            ExampleFn::Plain(memoization),
        )
        .with_snippet("if let Some(&hit) = cache.get(&n) {\n    return hit;\n}"),
    )?;
    registry.register(
        Example::new(
            "group_aggregate",
            CATEGORY,
            "Group records by key and compute per-group statistics",
            ExampleFn::Plain(group_aggregate),
        )
        .with_doc_url("https://doc.rust-lang.org/std/collections/btree_map/enum.Entry.html"),
    )?;
    Ok(())
}

fn retry<T, E: std::fmt::Display>(
    max_attempts: u32,
    base_delay: Duration,
    mut op: impl FnMut(u32) -> std::result::Result<T, E>,
    mut on_retry: impl FnMut(u32, &E, Duration),
) -> std::result::Result<T, E> {
    let mut attempt = 1;
    loop {
        match op(attempt) {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                let delay = base_delay * 2u32.pow(attempt - 1);
                on_retry(attempt, &err, delay);
                std::thread::sleep(delay);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

fn retry_backoff(out: &mut Output<'_>) -> ExampleResult {
    let mut log = Vec::new();
    let result = retry(
        4,
        Duration::from_millis(1),
        |attempt| {
            if attempt < 3 {
                Err(format!("connection refused (attempt {attempt})"))
            } else {
                Ok("connected")
            }
        },
        |attempt, err, delay| log.push(format!("  attempt {attempt} failed: {err}; waiting {delay:?}")),
    );
    for line in &log {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "Result: {result:?}")?;

    let gave_up: std::result::Result<(), String> = retry(
        2,
        Duration::from_millis(1),
        |_| Err("timeout".to_string()),
        |_, _, _| {},
    );
    writeln!(out, "Always failing: {gave_up:?}")?;
    Ok(())
}

#[derive(Debug)]
struct Reading {
    sensor: String,
    celsius: f64,
}

fn pipeline(out: &mut Output<'_>) -> ExampleResult {
    let raw = "kitchen,21.5\nbad line\ngarage,-3.0\nattic,abc\nporch,12.25";

    out.show("raw.lines()\n    .filter_map(|line| line.split_once(','))\n    .filter_map(|(s, t)| t.parse().ok().map(...))")?;
    let readings: Vec<Reading> = raw
        .lines()
        .filter_map(|line| line.split_once(','))
        .filter_map(|(sensor, temp)| {
            temp.parse::<f64>().ok().map(|celsius| Reading {
                sensor: sensor.to_string(),
                celsius,
            })
        })
        .collect();
    writeln!(out, "Parsed {} of {} lines", readings.len(), raw.lines().count())?;

    let fahrenheit: Vec<String> = readings
        .iter()
        .filter(|r| r.celsius > 0.0)
        .map(|r| format!("{}={:.1}F", r.sensor, r.celsius * 9.0 / 5.0 + 32.0))
        .collect();
    writeln!(out, "Above freezing: {}", fahrenheit.join(", "))?;
    Ok(())
}

fn batching(out: &mut Output<'_>) -> ExampleResult {
    let jobs: Vec<u32> = (1..=10).collect();
    let batch_size = 4;

    out.show("for (i, batch) in jobs.chunks(batch_size).enumerate() { ... }")?;
    let mut processed = 0;
    for (i, batch) in jobs.chunks(batch_size).enumerate() {
        let sum: u32 = batch.iter().sum();
        processed += batch.len();
        writeln!(out, "  batch {}: {batch:?} (sum {sum})", i + 1)?;
    }
    writeln!(out, "Processed {processed} jobs in {} batches", jobs.len().div_ceil(batch_size))?;
    Ok(())
}

struct Memo {
    cache: HashMap<u64, u64>,
    calls: u32,
}

impl Memo {
    fn new() -> Self {
        Self {
            cache: HashMap::new(),
            calls: 0,
        }
    }

    fn ways_to_climb(&mut self, n: u64) -> u64 {
        self.calls += 1;
        if n <= 1 {
            return 1;
        }
        if let Some(&hit) = self.cache.get(&n) {
            return hit;
        }
        let value = self.ways_to_climb(n - 1) + self.ways_to_climb(n - 2);
        self.cache.insert(n, value);
        value
    }
}

fn memoization(out: &mut Output<'_>) -> ExampleResult {
    let mut memo = Memo::new();
    let ways = memo.ways_to_climb(40);
    writeln!(out, "Ways to climb 40 stairs: {ways}")?;
    writeln!(out, "Calls with cache: {}", memo.calls)?;
    writeln!(out, "Cached entries: {}", memo.cache.len())?;

    let before = memo.calls;
    memo.ways_to_climb(40);
    writeln!(out, "Second lookup took {} call(s)", memo.calls - before)?;
    Ok(())
}

fn group_aggregate(out: &mut Output<'_>) -> ExampleResult {
    let sales = [
        ("north", 120.0),
        ("south", 80.0),
        ("north", 60.0),
        ("east", 200.0),
        ("south", 40.0),
        ("north", 20.0),
    ];

    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for (region, amount) in sales {
        groups.entry(region).or_default().push(amount);
    }

    writeln!(out, "{:<6} {:>5} {:>8} {:>8}", "region", "count", "total", "average")?;
    for (region, amounts) in &groups {
        let total: f64 = amounts.iter().sum();
        let average = total / amounts.len() as f64;
        writeln!(out, "{region:<6} {:>5} {total:>8.2} {average:>8.2}", amounts.len())?;
    }
    Ok(())
}
