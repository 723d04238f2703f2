//! Tracing setup for the CLI.
//!
//! Logs always go to stderr or a file. Stdout carries example output and the
//! run summary only.

use clap::ValueEnum;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::{QuickrefError, Result};

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Install the global subscriber.
///
/// `quiet` silences console logging; a `log_file` still receives records at
/// the requested level.
pub fn initialize_tracing(level: LogLevel, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::new(level.to_filter_directive());

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    QuickrefError::Config(format!(
                        "Failed to open log file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if quiet => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("off"))
            .with_writer(std::io::stderr)
            .try_init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .try_init(),
    };

    // A subscriber already installed (e.g. by a test harness) is fine
    if let Err(e) = installed {
        tracing::debug!("Tracing subscriber already set: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(LogLevel::Off.to_filter_directive(), "off");
        assert_eq!(LogLevel::Warn.to_filter_directive(), "warn");
        assert_eq!(LogLevel::Trace.to_filter_directive(), "trace");
    }

    #[test]
    fn test_unwritable_log_file_is_config_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing").join("quickref.log");
        let err = initialize_tracing(LogLevel::Info, false, Some(&path)).unwrap_err();
        assert!(matches!(err, QuickrefError::Config(_)));
    }
}
