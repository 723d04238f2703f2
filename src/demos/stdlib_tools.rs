//! Paths, time and memory helpers from std, plus chrono for calendars.

use std::io::Write;
use std::mem;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{Datelike, Duration as ChronoDuration, NaiveDate, Weekday};

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Stdlib Tools";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "path_ops",
            CATEGORY,
            "Build and inspect paths with Path and PathBuf",
            ExampleFn::Plain(path_ops),
        )
        .with_doc_url("https://doc.rust-lang.org/std/path/struct.Path.html")
        .with_snippet("let path = Path::new(\"/srv/app/config.yaml\");\npath.file_stem()\npath.extension()"),
    )?;
    registry.register(
        Example::new(
            "duration_time",
            CATEGORY,
            "Duration arithmetic and measuring elapsed time",
            ExampleFn::Plain(duration_time),
        )
        .with_doc_url("https://doc.rust-lang.org/std/time/struct.Duration.html"),
    )?;
    registry.register(
        Example::new(
            "chrono_dates",
            CATEGORY,
            "Calendar dates, weekdays and formatting with chrono",
            ExampleFn::Plain(chrono_dates),
        )
        .with_doc_url("https://docs.rs/chrono")
        .with_snippet("let date = NaiveDate::from_ymd_opt(2024, 2, 28)?;\ndate + Duration::days(2)"),
    )?;
    registry.register(
        Example::new(
            "mem_utils",
            CATEGORY,
            "size_of, swap, replace and take",
            ExampleFn::Plain(mem_utils),
        )
        .with_doc_url("https://doc.rust-lang.org/std/mem/index.html"),
    )?;
    Ok(())
}

fn path_ops(out: &mut Output<'_>) -> ExampleResult {
    let path = Path::new("/srv/app/config.yaml");
    writeln!(out, "file_name = {:?}", path.file_name())?;
    writeln!(out, "file_stem = {:?}", path.file_stem())?;
    writeln!(out, "extension = {:?}", path.extension())?;
    writeln!(out, "parent    = {:?}", path.parent())?;
    writeln!(out, "absolute  = {}", path.is_absolute())?;

    out.show("let mut buf = PathBuf::from(\"data\");\nbuf.push(\"reports\");\nbuf.set_extension(\"csv\");")?;
    let mut buf = PathBuf::from("data");
    buf.push("reports");
    buf.push("summary");
    buf.set_extension("csv");
    writeln!(out, "built     = {}", buf.display())?;

    let parts: Vec<String> = buf
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    writeln!(out, "components = {parts:?}")?;
    Ok(())
}

fn duration_time(out: &mut Output<'_>) -> ExampleResult {
    let timeout = Duration::from_secs(90);
    let extra = Duration::from_millis(2500);
    let total = timeout + extra;
    writeln!(out, "90s + 2500ms = {total:?}")?;
    writeln!(out, "as_secs = {}, subsec_millis = {}", total.as_secs(), total.subsec_millis())?;
    writeln!(out, "as_secs_f64 = {:.1}", total.as_secs_f64())?;
    writeln!(out, "checked_sub = {:?}", extra.checked_sub(timeout))?;

    out.show("let start = Instant::now();\n// work\nlet elapsed = start.elapsed();")?;
    let start = Instant::now();
    let work: u64 = (1..=10_000u64).sum();
    let elapsed = start.elapsed();
    writeln!(out, "work result = {work}")?;
    writeln!(out, "elapsed under one second: {}", elapsed < Duration::from_secs(1))?;
    Ok(())
}

fn chrono_dates(out: &mut Output<'_>) -> ExampleResult {
    let date = NaiveDate::from_ymd_opt(2024, 2, 28)
        .ok_or_else(|| anyhow::anyhow!("invalid date"))?;
    writeln!(out, "date      = {date}")?;
    writeln!(out, "weekday   = {:?}", date.weekday())?;
    writeln!(out, "+2 days   = {}", date + ChronoDuration::days(2))?;
    let leap = NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some();
    writeln!(out, "leap year = {leap}")?;

    out.show("date.format(\"%A, %B %-d, %Y\")")?;
    writeln!(out, "formatted = {}", date.format("%A, %B %-d, %Y"))?;

    let parsed = NaiveDate::parse_from_str("2024-12-25", "%Y-%m-%d")?;
    let days_between = (parsed - date).num_days();
    writeln!(out, "days until {parsed}: {days_between}")?;

    let next_monday = date
        .iter_days()
        .find(|d| d.weekday() == Weekday::Mon)
        .ok_or_else(|| anyhow::anyhow!("no Monday found"))?;
    writeln!(out, "next Monday = {next_monday}")?;
    Ok(())
}

fn mem_utils(out: &mut Output<'_>) -> ExampleResult {
    writeln!(out, "size_of::<u8>()          = {}", mem::size_of::<u8>())?;
    writeln!(out, "size_of::<u64>()         = {}", mem::size_of::<u64>())?;
    writeln!(out, "size_of::<Option<Box<u8>>>() = {}", mem::size_of::<Option<Box<u8>>>())?;

    out.show("mem::replace(&mut name, \"new\".to_string())\nmem::take(&mut items)")?;
    let mut name = String::from("old");
    let previous = mem::replace(&mut name, "new".to_string());
    writeln!(out, "replace: previous={previous}, now={name}")?;

    let mut items = vec![1, 2, 3];
    let taken = mem::take(&mut items);
    writeln!(out, "take: taken={taken:?}, left={items:?}")?;

    let (mut left, mut right) = ("left", "right");
    mem::swap(&mut left, &mut right);
    writeln!(out, "swap: left={left}, right={right}")?;
    Ok(())
}
