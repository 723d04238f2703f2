//! Reading and writing files under the run's output directory.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::catalog::{Example, ExampleFn, ExampleResult, Registry};
use crate::output::Output;
use crate::Result;

const CATEGORY: &str = "File Operations";

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(
        Example::new(
            "file_write",
            CATEGORY,
            "Write a file and read it back",
            ExampleFn::WithOutputDir(file_write),
        )
        .with_doc_url("https://doc.rust-lang.org/std/fs/fn.write.html")
        .with_snippet("let path = dir.join(\"example.txt\");\nfs::write(&path, \"Hello, file handling!\")?;\nlet content = fs::read_to_string(&path)?;")
        .with_tags(&["io"]),
    )?;
    registry.register(
        Example::new(
            "buffered_io",
            CATEGORY,
            "BufWriter for many small writes, BufReader for line reads, append mode",
            ExampleFn::WithOutputDir(buffered_io),
        )
        .with_doc_url("https://doc.rust-lang.org/std/io/struct.BufReader.html")
        .with_tags(&["io"]),
    )?;
    registry.register(
        Example::new(
            "drop_guard",
            CATEGORY,
            "RAII cleanup of a scratch file through Drop",
            ExampleFn::WithOutputDir(drop_guard),
        )
        .with_doc_url("https://doc.rust-lang.org/std/ops/trait.Drop.html")
        .with_snippet("impl Drop for ScratchFile {\n    fn drop(&mut self) {\n        let _ = fs::remove_file(&self.path);\n    }\n}"),
    )?;
    registry.register(
        Example::new(
            "glob_files",
            CATEGORY,
            "Match files by pattern with the glob crate",
            ExampleFn::WithOutputDir(glob_files),
        )
        .with_doc_url("https://docs.rs/glob"),
    )?;
    Ok(())
}

fn file_write(out: &mut Output<'_>, dir: &Path) -> ExampleResult {
    let path = dir.join("example.txt");
    fs::write(&path, "Hello, file handling!")
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writeln!(out, "File written successfully to {}", path.display())?;

    let content = fs::read_to_string(&path)?;
    writeln!(out, "Read back: {content}")?;

    let metadata = fs::metadata(&path)?;
    writeln!(out, "Size: {} bytes", metadata.len())?;
    Ok(())
}

fn buffered_io(out: &mut Output<'_>, dir: &Path) -> ExampleResult {
    let path = dir.join("lines.txt");

    out.show("let mut writer = BufWriter::new(File::create(&path)?);\nfor i in 1..=5 {\n    writeln!(writer, \"line {i}\")?;\n}\nwriter.flush()?;")?;
    {
        let mut writer = BufWriter::new(File::create(&path)?);
        for i in 1..=5 {
            writeln!(writer, "line {i}")?;
        }
        writer.flush()?;
    }

    out.show("let mut file = OpenOptions::new().append(true).open(&path)?;")?;
    let mut file = OpenOptions::new().append(true).open(&path)?;
    writeln!(file, "appended line")?;
    drop(file);

    out.show("for line in BufReader::new(File::open(&path)?).lines() { ... }")?;
    let reader = BufReader::new(File::open(&path)?);
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        count += 1;
        writeln!(out, "  {count}: {line}")?;
    }
    writeln!(out, "Read {count} lines from {}", path.display())?;
    Ok(())
}

struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    fn create(path: PathBuf, contents: &str) -> std::io::Result<Self> {
        fs::write(&path, contents)?;
        Ok(Self { path })
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn drop_guard(out: &mut Output<'_>, dir: &Path) -> ExampleResult {
    let path = dir.join("scratch.tmp");
    {
        let scratch = ScratchFile::create(path.clone(), "temporary")?;
        writeln!(out, "Inside scope, exists: {}", scratch.path.exists())?;
    }
    writeln!(out, "After scope, exists: {}", path.exists())?;
    Ok(())
}

fn glob_files(out: &mut Output<'_>, dir: &Path) -> ExampleResult {
    let sub = dir.join("glob_demo");
    fs::create_dir_all(&sub)?;
    for name in ["notes.txt", "todo.txt", "data.csv", "readme.md"] {
        fs::write(sub.join(name), name)?;
    }

    out.show("for entry in glob::glob(\"glob_demo/*.txt\")? { ... }")?;
    // Brackets in the directory name must not act as a character class
    let pattern = format!("{}/*.txt", glob::Pattern::escape(&sub.to_string_lossy()));
    let mut matched = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if let Some(name) = path.file_name() {
            matched.push(name.to_string_lossy().into_owned());
        }
    }
    matched.sort();
    writeln!(out, "*.txt matches: {matched:?}")?;

    let compiled = glob::Pattern::new("*.[cm]*")?;
    let mut others: Vec<&str> = ["notes.txt", "data.csv", "readme.md"]
        .into_iter()
        .filter(|name| compiled.matches(name))
        .collect();
    others.sort_unstable();
    writeln!(out, "Pattern '*.[cm]*' matches: {others:?}")?;
    Ok(())
}
