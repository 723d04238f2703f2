use serde::Serialize;
use std::io::{self, Write};

use super::{CommandHandler, CommandResult};
use crate::catalog::{Example, Lesson, LessonCatalog, Registry, Resource};
use crate::Result;

/// Handler for `--list`. Reads the catalog only; never runs an example.
pub struct ListCommand<'a> {
    registry: &'a Registry,
    lessons: &'a LessonCatalog,
    json: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    lessons: Vec<LessonEntry<'a>>,
    unassigned: Vec<ExampleEntry<'a>>,
}

#[derive(Serialize)]
struct LessonEntry<'a> {
    #[serde(flatten)]
    lesson: &'a Lesson,
    examples: Vec<ExampleEntry<'a>>,
}

#[derive(Serialize)]
struct ExampleEntry<'a> {
    name: &'a str,
    category: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    doc_url: Option<&'a str>,
    resource: Resource,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<&'a str>,
}

impl<'a> From<&'a Example> for ExampleEntry<'a> {
    fn from(example: &'a Example) -> Self {
        Self {
            name: example.name(),
            category: example.category(),
            description: example.description(),
            doc_url: example.doc_url(),
            resource: example.resource(),
            tags: example.tags().to_vec(),
        }
    }
}

impl CommandHandler for ListCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render(&mut out)?;
        out.flush()?;
        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl<'a> ListCommand<'a> {
    pub fn new(registry: &'a Registry, lessons: &'a LessonCatalog, json: bool) -> Self {
        Self {
            registry,
            lessons,
            json,
        }
    }

    /// Write the listing in the selected format
    pub fn render(&self, out: &mut dyn Write) -> Result<()> {
        if self.json {
            let listing = self.listing();
            serde_json::to_writer_pretty(&mut *out, &listing)?;
            writeln!(out)?;
        } else {
            self.render_text(out)?;
        }
        Ok(())
    }

    fn listing(&self) -> Listing<'a> {
        Listing {
            lessons: self
                .lessons
                .all_lessons()
                .iter()
                .map(|lesson| LessonEntry {
                    lesson,
                    examples: self
                        .lessons
                        .members_of(lesson, self.registry)
                        .into_iter()
                        .map(ExampleEntry::from)
                        .collect(),
                })
                .collect(),
            unassigned: self
                .lessons
                .unassigned(self.registry)
                .into_iter()
                .map(ExampleEntry::from)
                .collect(),
        }
    }

    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        let width = self
            .registry
            .all()
            .iter()
            .map(|e| e.name().len())
            .max()
            .unwrap_or(4);

        for lesson in self.lessons.all_lessons() {
            writeln!(out, "Lesson {}: {}", lesson.number, lesson.title)?;
            writeln!(out, "  {}", lesson.goal)?;
            if let Some(url) = lesson.doc_url {
                writeln!(out, "  Docs: {}", url)?;
            }
            let members = self.lessons.members_of(lesson, self.registry);
            if members.is_empty() {
                writeln!(out, "    (no examples)")?;
            }
            for example in members {
                write_example(out, example, width)?;
            }
            writeln!(out)?;
        }

        let unassigned = self.lessons.unassigned(self.registry);
        if !unassigned.is_empty() {
            writeln!(out, "Other examples (run by name)")?;
            for example in unassigned {
                write_example(out, example, width)?;
            }
            writeln!(out)?;
        }

        writeln!(
            out,
            "{} examples in {} lessons",
            self.registry.len(),
            self.lessons.all_lessons().len()
        )
    }
}

fn write_example(out: &mut dyn Write, example: &Example, width: usize) -> io::Result<()> {
    writeln!(
        out,
        "    {:<width$}  {}",
        example.name(),
        example.description(),
        width = width
    )?;
    if let Some(url) = example.doc_url() {
        writeln!(out, "    {:<width$}  {}", "", url, width = width)?;
    }
    Ok(())
}
