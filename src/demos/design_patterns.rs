//! Classic patterns expressed with Rust ownership.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Design Patterns";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "builder_pattern",
            CATEGORY,
            "Consuming builder with defaults and validation",
            ExampleFn::Plain(builder_pattern),
        )
        .with_doc_url("https://rust-unofficial.github.io/patterns/patterns/creational/builder.html")
        .with_snippet("let request = RequestBuilder::new(\"https://example.com\")\n    .method(\"POST\")\n    .header(\"Accept\", \"application/json\")\n    .build()?;"),
    )?;
    registry.register(
        Example::new(
            "strategy_pattern",
            CATEGORY,
            "Swap pricing behavior behind a trait object",
            ExampleFn::Plain(strategy_pattern),
        )
        .with_doc_url("https://rust-unofficial.github.io/patterns/patterns/behavioural/strategy.html"),
    )?;
    registry.register(
        Example::new(
            "observer_pattern",
            CATEGORY,
            "Subscribers notified through boxed callbacks",
            ExampleFn::Plain(observer_pattern),
        )
        .with_snippet("bus.subscribe(Box::new(move |event| log.borrow_mut().push(event.to_string())));"),
    )?;
    registry.register(
        Example::new(
            "newtype_pattern",
            CATEGORY,
            "Newtypes that make unit mix-ups a compile error",
            ExampleFn::Plain(newtype_pattern),
        )
        .with_doc_url("https://rust-unofficial.github.io/patterns/patterns/behavioural/newtype.html"),
    )?;
    Ok(())
}

#[derive(Debug)]
struct Request {
    url: String,
    method: String,
    headers: Vec<(String, String)>,
    timeout_secs: u64,
}

struct RequestBuilder {
    url: String,
    method: String,
    headers: Vec<(String, String)>,
    timeout_secs: u64,
}

impl RequestBuilder {
    fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            method: "GET".to_string(),
            headers: Vec::new(),
            timeout_secs: 30,
        }
    }

    fn method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    fn build(self) -> anyhow::Result<Request> {
        anyhow::ensure!(self.url.starts_with("http"), "url must be http(s): {}", self.url);
        anyhow::ensure!(self.timeout_secs > 0, "timeout must be positive");
        Ok(Request {
            url: self.url,
            method: self.method,
            headers: self.headers,
            timeout_secs: self.timeout_secs,
        })
    }
}

fn builder_pattern(out: &mut Output<'_>) -> ExampleResult {
    let request = RequestBuilder::new("https://example.com/api")
        .method("POST")
        .header("Accept", "application/json")
        .timeout_secs(5)
        .build()?;
    writeln!(out, "{} {} (timeout {}s)", request.method, request.url, request.timeout_secs)?;
    for (key, value) in &request.headers {
        writeln!(out, "  {key}: {value}")?;
    }

    let defaults = RequestBuilder::new("http://localhost").build()?;
    writeln!(out, "Defaults: {defaults:?}")?;

    out.show("RequestBuilder::new(\"ftp://files\").build()")?;
    match RequestBuilder::new("ftp://files").build() {
        Ok(request) => writeln!(out, "unexpected: {request:?}")?,
        Err(err) => writeln!(out, "Rejected: {err}")?,
    }
    Ok(())
}

trait Pricing {
    fn name(&self) -> &str;
    fn price(&self, base: f64) -> f64;
}

struct Regular;

struct Discount {
    percent: f64,
}

struct Bulk {
    threshold: f64,
    off: f64,
}

impl Pricing for Regular {
    fn name(&self) -> &str {
        "regular"
    }

    fn price(&self, base: f64) -> f64 {
        base
    }
}

impl Pricing for Discount {
    fn name(&self) -> &str {
        "discount"
    }

    fn price(&self, base: f64) -> f64 {
        base * (1.0 - self.percent / 100.0)
    }
}

impl Pricing for Bulk {
    fn name(&self) -> &str {
        "bulk"
    }

    fn price(&self, base: f64) -> f64 {
        if base >= self.threshold {
            base - self.off
        } else {
            base
        }
    }
}

struct Checkout {
    strategy: Box<dyn Pricing>,
}

impl Checkout {
    fn total(&self, items: &[f64]) -> f64 {
        self.strategy.price(items.iter().sum())
    }
}

fn strategy_pattern(out: &mut Output<'_>) -> ExampleResult {
    let items = [40.0, 35.0, 25.0];
    let strategies: Vec<Box<dyn Pricing>> = vec![
        Box::new(Regular),
        Box::new(Discount { percent: 10.0 }),
        Box::new(Bulk {
            threshold: 80.0,
            off: 15.0,
        }),
    ];
    for strategy in strategies {
        let name = strategy.name().to_string();
        let checkout = Checkout { strategy };
        writeln!(out, "{name:>8}: {:.2}", checkout.total(&items))?;
    }
    Ok(())
}

type Listener = Box<dyn Fn(&str)>;

#[derive(Default)]
struct EventBus {
    listeners: Vec<Listener>,
}

impl EventBus {
    fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn publish(&self, event: &str) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

fn observer_pattern(out: &mut Output<'_>) -> ExampleResult {
    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let mut bus = EventBus::default();

    let audit = Rc::clone(&log);
    bus.subscribe(Box::new(move |event: &str| {
        audit.borrow_mut().push(format!("audit: {event}"))
    }));
    let mailer = Rc::clone(&log);
    bus.subscribe(Box::new(move |event: &str| {
        if event.starts_with("order") {
            mailer.borrow_mut().push(format!("mail: {event}"));
        }
    }));

    bus.publish("order #1 placed");
    bus.publish("user logged in");

    for entry in log.borrow().iter() {
        writeln!(out, "  {entry}")?;
    }
    writeln!(out, "{} listeners, {} notifications", bus.listeners.len(), log.borrow().len())?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct Meters(f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct Feet(f64);

impl From<Feet> for Meters {
    fn from(feet: Feet) -> Self {
        Meters(feet.0 * 0.3048)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}

fn total_distance(legs: &[Meters]) -> Meters {
    Meters(legs.iter().map(|m| m.0).sum())
}

fn newtype_pattern(out: &mut Output<'_>) -> ExampleResult {
    out.show("struct Meters(f64);\nstruct Feet(f64);\nimpl From<Feet> for Meters { ... }")?;
    let legs = [Meters(100.0), Meters::from(Feet(328.0)), Feet(50.0).into()];
    for leg in &legs {
        writeln!(out, "  leg: {leg}")?;
    }
    writeln!(out, "Total: {}", total_distance(&legs))?;
    Ok(())
}
