use clap::Parser;
use std::path::PathBuf;

use crate::logging::LogLevel;

/// quickref: runnable Rust quick reference
#[derive(Parser, Debug)]
#[command(name = "quickref")]
#[command(version)]
#[command(about = "Runnable quick reference of Rust language features")]
#[command(
    long_about = "Runs short, self-contained Rust examples grouped into numbered lessons. With no arguments every lesson runs in order; name examples to run just those."
)]
pub struct Cli {
    /// Example names to run (runs every lesson when omitted)
    pub names: Vec<String>,

    /// List lessons and their examples without running anything
    #[arg(short, long)]
    pub list: bool,

    /// Print the listing as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Run a single lesson by number
    #[arg(short = 'n', long, conflicts_with_all = ["names", "config"])]
    pub lesson: Option<u32>,

    /// YAML file with a `functions:` list and optional `output_dir:`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for examples that write files (default: data)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Do not print example snippets before their output
    #[arg(long)]
    pub no_source: bool,

    /// Set log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Suppress console logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Name used in logs for the action this invocation performs
    pub fn action(&self) -> &'static str {
        if self.list {
            "list"
        } else {
            "run"
        }
    }
}
