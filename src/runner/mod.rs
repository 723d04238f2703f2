//! Selection, planning and execution of examples.
//!
//! A run happens in two steps. [`Runner::plan`] resolves a [`Selection`]
//! against the registry and lesson catalog; it fails only when there is no
//! plan at all (an unknown lesson). [`Runner::execute`] then invokes every
//! step in order, isolating failures so one broken example never hides the
//! results of the others.

mod resources;

pub use resources::Resources;

use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use crate::catalog::{Example, ExampleFn, LessonCatalog, Registry};
use crate::output::Output;
use crate::{QuickrefError, Result};

/// Directory handed to file-writing examples when nothing else is configured
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// What the caller asked to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every lesson in ascending order
    All,
    /// Explicit example names, run in the given order
    Names(Vec<String>),
    /// A single lesson by number
    Lesson(u32),
}

impl Selection {
    /// An empty name list means "everything"
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            Selection::All
        } else {
            Selection::Names(names)
        }
    }
}

/// One entry of an execution plan
#[derive(Debug, Clone)]
pub enum Step<'r> {
    Run(&'r Example),
    /// A requested name with no registered example
    Missing(String),
}

impl Step<'_> {
    pub fn name(&self) -> &str {
        match self {
            Step::Run(example) => example.name(),
            Step::Missing(name) => name,
        }
    }
}

/// Ordered steps resolved from a selection
#[derive(Debug, Clone, Default)]
pub struct Plan<'r> {
    steps: Vec<Step<'r>>,
}

impl<'r> Plan<'r> {
    fn from_examples(examples: Vec<&'r Example>) -> Self {
        Self {
            steps: examples.into_iter().map(Step::Run).collect(),
        }
    }

    pub fn steps(&self) -> &[Step<'r>] {
        &self.steps
    }

    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(Step::name).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Result of a single example
#[derive(Debug)]
pub enum Outcome {
    Passed,
    Failed(QuickrefError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn error(&self) -> Option<&QuickrefError> {
        match self {
            Outcome::Passed => None,
            Outcome::Failed(err) => Some(err),
        }
    }
}

/// Outcomes of a run, in execution order
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<(String, Outcome)>,
}

impl RunReport {
    pub fn outcomes(&self) -> &[(String, Outcome)] {
        &self.outcomes
    }

    pub fn names(&self) -> Vec<&str> {
        self.outcomes.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// True when every step passed
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_success())
    }

    pub fn passed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_success())
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &QuickrefError)> {
        self.outcomes
            .iter()
            .filter_map(|(name, outcome)| outcome.error().map(|err| (name.as_str(), err)))
    }

    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| outcome)
    }

    /// Print the pass/fail tally and the reason for every failure
    pub fn write_summary(&self, out: &mut dyn Write) -> io::Result<()> {
        let failed = self.outcomes.len() - self.passed();
        writeln!(out)?;
        writeln!(
            out,
            "Ran {} example(s): {} passed, {} failed",
            self.outcomes.len(),
            self.passed(),
            failed
        )?;
        for (name, err) in self.failures() {
            writeln!(out, "  FAILED {name}: {err}")?;
        }
        Ok(())
    }

    fn record(&mut self, name: &str, outcome: Outcome) {
        self.outcomes.push((name.to_string(), outcome));
    }
}

/// Options that shape how examples are invoked
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory supplied to examples that write files
    pub output_dir: PathBuf,
    /// Print each example's snippet before its output
    pub show_source: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            show_source: true,
        }
    }
}

/// Resolves selections and executes examples one at a time
pub struct Runner<'r> {
    registry: &'r Registry,
    lessons: &'r LessonCatalog,
    options: RunOptions,
}

impl<'r> Runner<'r> {
    pub fn new(registry: &'r Registry, lessons: &'r LessonCatalog) -> Self {
        Self {
            registry,
            lessons,
            options: RunOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve a selection into an ordered plan.
    ///
    /// Unknown example names become [`Step::Missing`] entries; an unknown
    /// lesson number is an error because nothing can be planned.
    pub fn plan(&self, selection: &Selection) -> Result<Plan<'r>> {
        let plan = match selection {
            Selection::All => Plan::from_examples(self.lessons.curriculum(self.registry)),
            Selection::Lesson(number) => {
                let lesson = self.lessons.lesson_by_number(*number)?;
                Plan::from_examples(self.lessons.members_of(lesson, self.registry))
            }
            Selection::Names(names) => Plan {
                steps: names
                    .iter()
                    .map(|name| match self.registry.get(name) {
                        Ok(example) => Step::Run(example),
                        Err(_) => Step::Missing(name.clone()),
                    })
                    .collect(),
            },
        };
        debug!(steps = plan.len(), "Resolved selection {:?}", selection);
        Ok(plan)
    }

    /// Run every step of a plan, writing example output to `sink`.
    ///
    /// Only a failure to write to `sink` aborts the run; example errors and
    /// panics are recorded in the report.
    pub fn execute(&self, plan: &Plan<'r>, sink: &mut dyn Write) -> Result<RunReport> {
        let mut resources = Resources::new(&self.options.output_dir);
        let mut report = RunReport::default();

        for step in plan.steps() {
            let example = match step {
                Step::Run(example) => *example,
                Step::Missing(name) => {
                    warn!("Example '{}' not found", name);
                    report.record(name, Outcome::Failed(QuickrefError::ExampleNotFound(name.clone())));
                    continue;
                }
            };

            info!("Running example: {}", example.name());
            let mut out = Output::new(sink);
            out.banner(example)?;
            if self.options.show_source {
                if let Some(snippet) = example.snippet() {
                    out.show(snippet)?;
                }
            }

            let outcome = match invoke(example, &mut out, &mut resources) {
                Ok(()) => Outcome::Passed,
                Err(err) => {
                    error!("{}", err);
                    Outcome::Failed(err)
                }
            };
            report.record(example.name(), outcome);
        }

        Ok(report)
    }

    /// Plan and execute in one call
    pub fn run(&self, selection: &Selection, sink: &mut dyn Write) -> Result<RunReport> {
        let plan = self.plan(selection)?;
        self.execute(&plan, sink)
    }
}

/// Supply the example's resource and call it, turning errors and panics
/// into [`QuickrefError::Execution`].
fn invoke(example: &Example, out: &mut Output<'_>, resources: &mut Resources) -> Result<()> {
    let result = match example.func() {
        ExampleFn::Plain(f) => panic::catch_unwind(AssertUnwindSafe(|| f(out))),
        ExampleFn::WithTestData(f) => {
            let data = resources.sample_data();
            panic::catch_unwind(AssertUnwindSafe(|| f(out, data)))
        }
        ExampleFn::WithOutputDir(f) => {
            let dir = resources.output_dir()?;
            panic::catch_unwind(AssertUnwindSafe(|| f(out, dir)))
        }
    };

    let message = match result {
        Ok(Ok(())) => return Ok(()),
        Ok(Err(err)) => format!("{err:#}"),
        Err(payload) => panic_message(payload.as_ref()),
    };
    Err(QuickrefError::Execution {
        name: example.name().to_string(),
        message,
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {msg}")
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ExampleResult, Lesson};

    fn ok(out: &mut Output<'_>) -> ExampleResult {
        writeln!(out, "ok ran")?;
        Ok(())
    }

    fn fails(_out: &mut Output<'_>) -> ExampleResult {
        anyhow::bail!("boom")
    }

    fn panics(_out: &mut Output<'_>) -> ExampleResult {
        panic!("kaboom")
    }

    fn fixture() -> (Registry, LessonCatalog) {
        let mut registry = Registry::new();
        registry
            .register(Example::new("ok", "A", "passes", ExampleFn::Plain(ok)).with_snippet("ok()"))
            .unwrap();
        registry
            .register(Example::new("fails", "A", "errors", ExampleFn::Plain(fails)))
            .unwrap();
        registry
            .register(Example::new("panics", "B", "panics", ExampleFn::Plain(panics)))
            .unwrap();
        let lessons = LessonCatalog::new(vec![Lesson {
            number: 1,
            title: "Only",
            goal: "",
            categories: &["A"],
            doc_url: None,
        }])
        .unwrap();
        (registry, lessons)
    }

    #[test]
    fn test_unknown_lesson_aborts_planning() {
        let (registry, lessons) = fixture();
        let runner = Runner::new(&registry, &lessons);
        let err = runner.plan(&Selection::Lesson(42)).unwrap_err();
        assert!(matches!(err, QuickrefError::LessonNotFound(42)));
    }

    #[test]
    fn test_errors_and_panics_are_isolated() {
        let (registry, lessons) = fixture();
        let runner = Runner::new(&registry, &lessons);
        let selection = Selection::Names(vec!["fails".into(), "panics".into(), "ok".into()]);

        let mut buf = Vec::new();
        let report = runner.run(&selection, &mut buf).unwrap();

        assert_eq!(report.names(), vec!["fails", "panics", "ok"]);
        assert!(!report.is_success());
        assert_eq!(report.passed(), 1);

        let message = report.outcome("panics").and_then(Outcome::error).unwrap().to_string();
        assert!(message.contains("kaboom"));
        let message = report.outcome("fails").and_then(Outcome::error).unwrap().to_string();
        assert!(message.contains("boom"));
        assert!(String::from_utf8(buf).unwrap().contains("ok ran"));
    }

    #[test]
    fn test_snippet_shown_unless_disabled() {
        let (registry, lessons) = fixture();
        let selection = Selection::Names(vec!["ok".into()]);

        let mut shown = Vec::new();
        Runner::new(&registry, &lessons).run(&selection, &mut shown).unwrap();
        assert!(String::from_utf8(shown).unwrap().contains("    ok()"));

        let mut hidden = Vec::new();
        Runner::new(&registry, &lessons)
            .with_options(RunOptions {
                show_source: false,
                ..RunOptions::default()
            })
            .run(&selection, &mut hidden)
            .unwrap();
        assert!(!String::from_utf8(hidden).unwrap().contains("    ok()"));
    }

    #[test]
    fn test_summary_lists_failures() {
        let (registry, lessons) = fixture();
        let runner = Runner::new(&registry, &lessons);
        let report = runner
            .run(&Selection::Names(vec!["ok".into(), "ghost".into()]), &mut io::sink())
            .unwrap();

        let mut buf = Vec::new();
        report.write_summary(&mut buf).unwrap();
        let summary = String::from_utf8(buf).unwrap();
        assert!(summary.contains("Ran 2 example(s): 1 passed, 1 failed"));
        assert!(summary.contains("FAILED ghost: Example not found: ghost"));
    }

    #[test]
    fn test_selection_from_empty_names_is_all() {
        assert_eq!(Selection::from_names(vec![]), Selection::All);
        assert_eq!(
            Selection::from_names(vec!["x".into()]),
            Selection::Names(vec!["x".into()])
        );
    }
}
