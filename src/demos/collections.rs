//! Ordered maps, queues and heaps.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap, VecDeque};
use std::io::Write;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Collections";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "btreemap_ordered",
            CATEGORY,
            "Sorted iteration and range queries with BTreeMap",
            ExampleFn::Plain(btreemap_ordered),
        )
        .with_doc_url("https://doc.rust-lang.org/std/collections/struct.BTreeMap.html")
        .with_snippet("let mut temps = BTreeMap::new();\ntemps.insert(\"wed\", 19);\nfor (day, t) in temps.range(\"a\"..\"t\") { ... }"),
    )?;
    registry.register(
        Example::new(
            "vecdeque_queue",
            CATEGORY,
            "Double-ended queue as FIFO and rotating buffer",
            ExampleFn::Plain(vecdeque_queue),
        )
        .with_doc_url("https://doc.rust-lang.org/std/collections/struct.VecDeque.html"),
    )?;
    registry.register(
        Example::new(
            "binary_heap",
            CATEGORY,
            "Max-heap and min-heap via Reverse",
            ExampleFn::Plain(binary_heap),
        )
        .with_doc_url("https://doc.rust-lang.org/std/collections/struct.BinaryHeap.html")
        .with_snippet("let mut heap = BinaryHeap::new();\nheap.push(Reverse(5));"),
    )?;
    registry.register(
        Example::new(
            "entry_api",
            CATEGORY,
            "Count and group with HashMap::entry",
            ExampleFn::Plain(entry_api),
        )
        .with_doc_url("https://doc.rust-lang.org/std/collections/hash_map/enum.Entry.html")
        .with_snippet("*counts.entry(word).or_insert(0) += 1;"),
    )?;
    Ok(())
}

fn btreemap_ordered(out: &mut Output<'_>) -> ExampleResult {
    let mut temps = BTreeMap::new();
    temps.insert("wed", 19);
    temps.insert("mon", 21);
    temps.insert("tue", 17);
    temps.insert("fri", 23);

    writeln!(out, "Sorted by key:")?;
    for (day, t) in &temps {
        writeln!(out, "  {day}: {t}")?;
    }
    let early: Vec<_> = temps.range("a".."t").collect();
    writeln!(out, "range(\"a\"..\"t\") = {early:?}")?;
    writeln!(out, "first = {:?}, last = {:?}", temps.first_key_value(), temps.last_key_value())?;
    Ok(())
}

fn vecdeque_queue(out: &mut Output<'_>) -> ExampleResult {
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back("first");
    queue.push_back("second");
    queue.push_front("urgent");
    writeln!(out, "queue = {queue:?}")?;

    out.show("while let Some(job) = queue.pop_front() { ... }")?;
    while let Some(job) = queue.pop_front() {
        writeln!(out, "  processing {job}")?;
    }

    let mut ring: VecDeque<i32> = (1..=5).collect();
    ring.rotate_left(2);
    writeln!(out, "rotate_left(2) = {ring:?}")?;
    Ok(())
}

fn binary_heap(out: &mut Output<'_>) -> ExampleResult {
    let mut max_heap: BinaryHeap<i32> = [3, 1, 4, 1, 5, 9, 2].into_iter().collect();
    writeln!(out, "peek (max) = {:?}", max_heap.peek())?;
    let mut drained = Vec::new();
    while let Some(n) = max_heap.pop() {
        drained.push(n);
    }
    writeln!(out, "max-heap order = {drained:?}")?;

    let mut min_heap = BinaryHeap::new();
    for n in [3, 1, 4, 1, 5] {
        min_heap.push(Reverse(n));
    }
    let mut ascending = Vec::new();
    while let Some(Reverse(n)) = min_heap.pop() {
        ascending.push(n);
    }
    writeln!(out, "min-heap order = {ascending:?}")?;
    Ok(())
}

fn entry_api(out: &mut Output<'_>) -> ExampleResult {
    let text = "the quick brown fox jumps over the lazy dog the end";
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    writeln!(out, "Top words: {:?}", &sorted[..3])?;

    out.show("by_len.entry(word.len()).or_default().push(word);")?;
    let mut by_len: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for word in ["ox", "cat", "dog", "bird", "an"] {
        by_len.entry(word.len()).or_default().push(word);
    }
    writeln!(out, "Grouped by length: {by_len:?}")?;
    Ok(())
}
