use serde::Serialize;
use std::path::Path;

use super::sample::SampleData;
use crate::output::Output;

/// Result type returned by example bodies
pub type ExampleResult = anyhow::Result<()>;

/// Resource an example needs the runner to supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    None,
    TestData,
    OutputDir,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::None => write!(f, "none"),
            Resource::TestData => write!(f, "test data"),
            Resource::OutputDir => write!(f, "output dir"),
        }
    }
}

/// The function behind an example, typed by the resource it consumes
#[derive(Clone, Copy)]
pub enum ExampleFn {
    Plain(fn(&mut Output<'_>) -> ExampleResult),
    WithTestData(fn(&mut Output<'_>, &SampleData) -> ExampleResult),
    WithOutputDir(fn(&mut Output<'_>, &Path) -> ExampleResult),
}

impl ExampleFn {
    pub fn resource(&self) -> Resource {
        match self {
            ExampleFn::Plain(_) => Resource::None,
            ExampleFn::WithTestData(_) => Resource::TestData,
            ExampleFn::WithOutputDir(_) => Resource::OutputDir,
        }
    }
}

impl std::fmt::Debug for ExampleFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExampleFn({})", self.resource())
    }
}

/// A registered, runnable demonstration
#[derive(Debug, Clone)]
pub struct Example {
    name: &'static str,
    category: &'static str,
    description: &'static str,
    doc_url: Option<&'static str>,
    snippet: Option<&'static str>,
    tags: Vec<&'static str>,
    func: ExampleFn,
}

impl Example {
    pub fn new(
        name: &'static str,
        category: &'static str,
        description: &'static str,
        func: ExampleFn,
    ) -> Self {
        Self {
            name,
            category,
            description,
            doc_url: None,
            snippet: None,
            tags: Vec::new(),
            func,
        }
    }

    pub fn with_doc_url(mut self, url: &'static str) -> Self {
        self.doc_url = Some(url);
        self
    }

    /// Attach the code shown before the example's own output
    pub fn with_snippet(mut self, snippet: &'static str) -> Self {
        self.snippet = Some(snippet);
        self
    }

    pub fn with_tags(mut self, tags: &[&'static str]) -> Self {
        self.tags = tags.to_vec();
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn doc_url(&self) -> Option<&'static str> {
        self.doc_url
    }

    pub fn snippet(&self) -> Option<&'static str> {
        self.snippet
    }

    pub fn tags(&self) -> &[&'static str] {
        &self.tags
    }

    pub fn func(&self) -> ExampleFn {
        self.func
    }

    pub fn resource(&self) -> Resource {
        self.func.resource()
    }

    pub fn needs_test_data(&self) -> bool {
        self.resource() == Resource::TestData
    }

    pub fn needs_output_dir(&self) -> bool {
        self.resource() == Resource::OutputDir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_out: &mut Output<'_>) -> ExampleResult {
        Ok(())
    }

    fn with_data(_out: &mut Output<'_>, _data: &SampleData) -> ExampleResult {
        Ok(())
    }

    fn with_dir(_out: &mut Output<'_>, _dir: &Path) -> ExampleResult {
        Ok(())
    }

    #[test]
    fn test_resource_follows_function_kind() {
        let plain = Example::new("a", "Cat", "plain", ExampleFn::Plain(noop));
        let data = Example::new("b", "Cat", "data", ExampleFn::WithTestData(with_data));
        let dir = Example::new("c", "Cat", "dir", ExampleFn::WithOutputDir(with_dir));

        assert_eq!(plain.resource(), Resource::None);
        assert!(!plain.needs_test_data() && !plain.needs_output_dir());
        assert!(data.needs_test_data() && !data.needs_output_dir());
        assert!(dir.needs_output_dir() && !dir.needs_test_data());
    }

    #[test]
    fn test_builder_sets_optional_fields() {
        let example = Example::new("a", "Cat", "desc", ExampleFn::Plain(noop))
            .with_doc_url("https://doc.rust-lang.org/book/")
            .with_snippet("let x = 1;")
            .with_tags(&["basics", "syntax"]);

        assert_eq!(example.doc_url(), Some("https://doc.rust-lang.org/book/"));
        assert_eq!(example.snippet(), Some("let x = 1;"));
        assert_eq!(example.tags(), &["basics", "syntax"]);
    }
}
