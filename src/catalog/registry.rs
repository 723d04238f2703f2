use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use super::Example;
use crate::{QuickrefError, Result};

/// Append-only catalog of examples, kept in registration order
#[derive(Debug, Default)]
pub struct Registry {
    examples: Vec<Example>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry holding every shipped example
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        crate::demos::register_all(&mut registry)?;
        debug!(count = registry.len(), "Loaded example registry");
        Ok(registry)
    }

    /// Add an example. A name that is already taken is rejected and the
    /// existing entry is kept.
    pub fn register(&mut self, example: Example) -> Result<()> {
        if self.index.contains_key(example.name()) {
            return Err(QuickrefError::DuplicateName(example.name().to_string()));
        }
        self.index.insert(example.name(), self.examples.len());
        self.examples.push(example);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Example> {
        self.index
            .get(name)
            .map(|&i| &self.examples[i])
            .ok_or_else(|| QuickrefError::ExampleNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Every example in registration order
    pub fn all(&self) -> &[Example] {
        &self.examples
    }

    pub fn names(&self) -> BTreeSet<&'static str> {
        self.index.keys().copied().collect()
    }

    /// Examples of one category, in registration order
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Example> + 'a {
        self.examples
            .iter()
            .filter(move |example| example.category() == category)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ExampleFn, ExampleResult};
    use crate::output::Output;
    use std::io::Write;

    fn first(out: &mut Output<'_>) -> ExampleResult {
        writeln!(out, "first")?;
        Ok(())
    }

    fn second(out: &mut Output<'_>) -> ExampleResult {
        writeln!(out, "second")?;
        Ok(())
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = Registry::new();
        registry
            .register(Example::new("alpha", "Basics", "first", ExampleFn::Plain(first)))
            .unwrap();

        let example = registry.get("alpha").unwrap();
        assert_eq!(example.category(), "Basics");
        assert!(registry.contains("alpha"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_keeps_original() {
        let mut registry = Registry::new();
        registry
            .register(Example::new("alpha", "Basics", "original", ExampleFn::Plain(first)))
            .unwrap();

        let err = registry
            .register(Example::new("alpha", "Other", "replacement", ExampleFn::Plain(second)))
            .unwrap_err();

        assert!(matches!(err, QuickrefError::DuplicateName(ref name) if name == "alpha"));
        assert_eq!(registry.get("alpha").unwrap().description(), "original");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let registry = Registry::new();
        let err = registry.get("nope").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_in_category_keeps_registration_order() {
        let mut registry = Registry::new();
        for (name, category) in [("c", "X"), ("a", "Y"), ("b", "X")] {
            registry
                .register(Example::new(name, category, "", ExampleFn::Plain(first)))
                .unwrap();
        }

        let names: Vec<_> = registry.in_category("X").map(Example::name).collect();
        assert_eq!(names, vec!["c", "b"]);
        assert_eq!(registry.names().into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
