//! Threads, channels, shared state and async tasks.
//!
//! These examples belong to no lesson and run only by name or as part of
//! a config file selection.

use std::io::Write;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::anyhow;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "Concurrency";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "thread_spawn",
            CATEGORY,
            "Spawn threads and collect results through join handles",
            ExampleFn::Plain(thread_spawn),
        )
        .with_doc_url("https://doc.rust-lang.org/std/thread/fn.spawn.html")
        .with_snippet("let handles: Vec<_> = (1..=3)\n    .map(|id| thread::spawn(move || id * 10))\n    .collect();"),
    )?;
    registry.register(
        Example::new(
            "mpsc_channel",
            CATEGORY,
            "Multiple producers sending to one consumer",
            ExampleFn::Plain(mpsc_channel),
        )
        .with_doc_url("https://doc.rust-lang.org/std/sync/mpsc/index.html"),
    )?;
    registry.register(
        Example::new(
            "arc_mutex_counter",
            CATEGORY,
            "Shared counter behind Arc<Mutex<_>>",
            ExampleFn::Plain(arc_mutex_counter),
        )
        .with_doc_url("https://doc.rust-lang.org/book/ch16-03-shared-state.html")
        .with_snippet("let counter = Arc::new(Mutex::new(0));\nlet counter = Arc::clone(&counter);\n*counter.lock().unwrap() += 1;"),
    )?;
    registry.register(
        Example::new(
            "async_tasks",
            CATEGORY,
            "Run async tasks concurrently on a tokio runtime",
            ExampleFn::Plain(async_tasks),
        )
        .with_doc_url("https://docs.rs/tokio")
        .with_tags(&["async"]),
    )?;
    registry.register(
        Example::new(
            "scoped_threads",
            CATEGORY,
            "Borrow local data from threads with thread::scope",
            ExampleFn::Plain(scoped_threads),
        )
        .with_doc_url("https://doc.rust-lang.org/std/thread/fn.scope.html"),
    )?;
    Ok(())
}

fn thread_spawn(out: &mut Output<'_>) -> ExampleResult {
    let handles: Vec<_> = (1..=3u64)
        .map(|id| thread::spawn(move || (id, (1..=id * 10).sum::<u64>())))
        .collect();

    for handle in handles {
        let (id, sum) = handle
            .join()
            .map_err(|_| anyhow!("worker thread panicked"))?;
        writeln!(out, "  thread {id}: sum 1..={} = {sum}", id * 10)?;
    }
    Ok(())
}

fn mpsc_channel(out: &mut Output<'_>) -> ExampleResult {
    let (tx, rx) = mpsc::channel();
    for producer in 0..3 {
        let tx = tx.clone();
        thread::spawn(move || {
            for item in 0..2 {
                let _ = tx.send(format!("producer {producer} item {item}"));
            }
        });
    }
    drop(tx);

    out.show("drop(tx);\nlet received: Vec<String> = rx.iter().collect();")?;
    let mut received: Vec<String> = rx.iter().collect();
    received.sort();
    for message in &received {
        writeln!(out, "  {message}")?;
    }
    writeln!(out, "Received {} messages", received.len())?;
    Ok(())
}

fn arc_mutex_counter(out: &mut Output<'_>) -> ExampleResult {
    let counter = Arc::new(Mutex::new(0u32));
    let mut handles = Vec::new();
    for _ in 0..4 {
        let counter = Arc::clone(&counter);
        handles.push(thread::spawn(move || {
            for _ in 0..1000 {
                if let Ok(mut value) = counter.lock() {
                    *value += 1;
                }
            }
        }));
    }
    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow!("counter thread panicked"))?;
    }

    let total = *counter
        .lock()
        .map_err(|_| anyhow!("counter mutex poisoned"))?;
    writeln!(out, "4 threads x 1000 increments = {total}")?;
    writeln!(out, "Arc strong count after join: {}", Arc::strong_count(&counter))?;
    Ok(())
}

async fn fetch(id: u32, delay_ms: u64) -> String {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    format!("result-{id}")
}

fn async_tasks(out: &mut Output<'_>) -> ExampleResult {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    out.show("let (a, b, c) = tokio::join!(fetch(1, 15), fetch(2, 5), fetch(3, 10));")?;
    let (a, b, c) = runtime.block_on(async { tokio::join!(fetch(1, 15), fetch(2, 5), fetch(3, 10)) });
    writeln!(out, "Gathered: {a}, {b}, {c}")?;

    out.show("let handle = tokio::spawn(async { ... });\nhandle.await?")?;
    let doubled = runtime.block_on(async {
        let handles: Vec<_> = (1..=3u32)
            .map(|n| tokio::spawn(async move { n * 2 }))
            .collect();
        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await?);
        }
        Ok::<_, tokio::task::JoinError>(results)
    })?;
    writeln!(out, "Spawned task results: {doubled:?}")?;
    Ok(())
}

fn scoped_threads(out: &mut Output<'_>) -> ExampleResult {
    let data = vec![1, 2, 3, 4, 5, 6, 7, 8];
    let (left, right) = data.split_at(data.len() / 2);

    out.show("thread::scope(|s| {\n    let a = s.spawn(|| left.iter().sum::<i32>());\n    ...\n});")?;
    let (left_sum, right_sum) = thread::scope(|s| {
        let a = s.spawn(|| left.iter().sum::<i32>());
        let b = s.spawn(|| right.iter().sum::<i32>());
        (a.join(), b.join())
    });
    let left_sum = left_sum.map_err(|_| anyhow!("left worker panicked"))?;
    let right_sum = right_sum.map_err(|_| anyhow!("right worker panicked"))?;
    writeln!(out, "left {left:?} sums to {left_sum}")?;
    writeln!(out, "right {right:?} sums to {right_sum}")?;
    writeln!(out, "total {} (data still owned here: {} items)", left_sum + right_sum, data.len())?;
    Ok(())
}
