use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use super::{CommandHandler, CommandResult};
use crate::catalog::{LessonCatalog, Registry};
use crate::config::{ConfigLoader, RunConfig};
use crate::runner::{RunOptions, Runner, Selection, DEFAULT_OUTPUT_DIR};
use crate::Result;

/// Handler for running examples (the default action)
pub struct RunCommand<'a> {
    registry: &'a Registry,
    lessons: &'a LessonCatalog,
    pub names: Vec<String>,
    pub lesson: Option<u32>,
    pub config: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub show_source: bool,
}

impl CommandHandler for RunCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let result = self.run_to(&mut out)?;
        out.flush()?;
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "run"
    }
}

impl<'a> RunCommand<'a> {
    pub fn new(registry: &'a Registry, lessons: &'a LessonCatalog) -> Self {
        Self {
            registry,
            lessons,
            names: Vec::new(),
            lesson: None,
            config: None,
            output_dir: None,
            show_source: true,
        }
    }

    /// Resolve configuration, run the selection and print the summary.
    ///
    /// Configuration and planning errors are returned before anything runs.
    pub fn run_to(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = self.load_config()?;
        let selection = self.selection(config.as_ref());
        let options = RunOptions {
            output_dir: self.output_dir(config.as_ref()),
            show_source: self.show_source,
        };
        debug!("Output directory: {}", options.output_dir.display());

        let runner = Runner::new(self.registry, self.lessons).with_options(options);
        let plan = runner.plan(&selection)?;
        match &selection {
            Selection::All => info!("Running all lessons ({} examples)", plan.len()),
            Selection::Lesson(n) => info!("Running lesson {} ({} examples)", n, plan.len()),
            Selection::Names(_) => info!("Running {} selected example(s)", plan.len()),
        }

        let report = runner.execute(&plan, out)?;
        report.write_summary(out)?;

        if report.is_success() {
            Ok(CommandResult::Success(None))
        } else {
            let failed: Vec<&str> = report.failures().map(|(name, _)| name).collect();
            Ok(CommandResult::Failure(format!(
                "{} example(s) failed: {}",
                failed.len(),
                failed.join(", ")
            )))
        }
    }

    fn load_config(&self) -> Result<Option<RunConfig>> {
        self.config
            .as_ref()
            .map(|path| {
                info!("Loading config file: {}", path.display());
                ConfigLoader::new().load(path)
            })
            .transpose()
    }

    /// Lesson beats names; command-line names beat the config's list
    fn selection(&self, config: Option<&RunConfig>) -> Selection {
        if let Some(number) = self.lesson {
            return Selection::Lesson(number);
        }
        if !self.names.is_empty() {
            return Selection::Names(self.names.clone());
        }
        match config {
            Some(config) => Selection::from_names(config.functions.clone()),
            None => Selection::All,
        }
    }

    fn output_dir(&self, config: Option<&RunConfig>) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(|| config.and_then(|c| c.output_dir.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}
