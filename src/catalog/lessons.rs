use serde::Serialize;
use std::collections::HashSet;

use super::{Example, Registry};
use crate::{QuickrefError, Result};

/// A numbered curriculum unit pulling in one or more categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    pub number: u32,
    pub title: &'static str,
    pub goal: &'static str,
    pub categories: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<&'static str>,
}

/// Shipped progression, from first steps to real-world patterns
pub const LESSONS: &[Lesson] = &[
    Lesson {
        number: 1,
        title: "Data Structures",
        goal: "Scalars, tuples, arrays, Vec, HashMap, HashSet, slicing",
        categories: &["Data Structures"],
        doc_url: Some("https://doc.rust-lang.org/book/ch08-00-common-collections.html"),
    },
    Lesson {
        number: 2,
        title: "Strings & Control Flow",
        goal: "if/else expressions, match, loops, String and &str",
        categories: &["Control Flow", "Strings", "Loops"],
        doc_url: Some("https://doc.rust-lang.org/book/ch03-05-control-flow.html"),
    },
    Lesson {
        number: 3,
        title: "Functions & Closures",
        goal: "fn items, closures, iterator adapters, fold",
        categories: &["Functional"],
        doc_url: Some("https://doc.rust-lang.org/book/ch13-00-functional-features.html"),
    },
    Lesson {
        number: 4,
        title: "Structs & Traits",
        goal: "impl blocks, trait objects, generics, operator traits",
        categories: &["Traits"],
        doc_url: Some("https://doc.rust-lang.org/book/ch10-02-traits.html"),
    },
    Lesson {
        number: 5,
        title: "Error Handling",
        goal: "Result, the ? operator, custom errors, Option combinators",
        categories: &["Error Handling"],
        doc_url: Some("https://doc.rust-lang.org/book/ch09-00-error-handling.html"),
    },
    Lesson {
        number: 6,
        title: "Collections",
        goal: "BTreeMap, VecDeque, BinaryHeap, the entry API",
        categories: &["Collections"],
        doc_url: Some("https://doc.rust-lang.org/std/collections/index.html"),
    },
    Lesson {
        number: 7,
        title: "File I/O & Data Formats",
        goal: "Writing files, buffered IO, RAII guards, JSON, regex",
        categories: &["File Operations", "Advanced"],
        doc_url: Some("https://doc.rust-lang.org/std/fs/index.html"),
    },
    Lesson {
        number: 8,
        title: "Modern Rust",
        goal: "Pattern matching, data-carrying enums, let-else, custom iterators",
        categories: &["Modern Rust"],
        doc_url: Some("https://doc.rust-lang.org/book/ch18-00-patterns.html"),
    },
    Lesson {
        number: 9,
        title: "Standard Library",
        goal: "Paths, durations, dates, formatting",
        categories: &["Stdlib Tools"],
        doc_url: Some("https://doc.rust-lang.org/std/index.html"),
    },
    Lesson {
        number: 10,
        title: "Design Patterns",
        goal: "Builder, strategy, observer, newtype",
        categories: &["Design Patterns"],
        doc_url: Some("https://rust-unofficial.github.io/patterns/"),
    },
    Lesson {
        number: 11,
        title: "Practical Patterns",
        goal: "Retry, pipelines, batching, memoization",
        categories: &["Practical Patterns"],
        doc_url: Some("https://rust-lang-nursery.github.io/rust-cookbook/"),
    },
];

/// Ordered lesson list with unique numbers
#[derive(Debug, Clone)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    /// Validate and order a set of lessons
    pub fn new(mut lessons: Vec<Lesson>) -> Result<Self> {
        let mut seen = HashSet::new();
        for lesson in &lessons {
            if lesson.number == 0 {
                return Err(QuickrefError::Config(format!(
                    "Lesson '{}' must have a positive number",
                    lesson.title
                )));
            }
            if !seen.insert(lesson.number) {
                return Err(QuickrefError::Config(format!(
                    "Lesson number {} is defined more than once",
                    lesson.number
                )));
            }
        }
        lessons.sort_by_key(|lesson| lesson.number);
        Ok(Self { lessons })
    }

    /// The shipped curriculum
    pub fn builtin() -> Result<Self> {
        Self::new(LESSONS.to_vec())
    }

    /// Lessons in ascending number order
    pub fn all_lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn lesson_by_number(&self, number: u32) -> Result<&Lesson> {
        self.lessons
            .iter()
            .find(|lesson| lesson.number == number)
            .ok_or(QuickrefError::LessonNotFound(number))
    }

    /// Examples of a lesson: category declaration order first, then
    /// registration order. Each example appears once.
    pub fn members_of<'r>(&self, lesson: &Lesson, registry: &'r Registry) -> Vec<&'r Example> {
        let mut seen = HashSet::new();
        let mut members = Vec::new();
        for &category in lesson.categories {
            for example in registry.in_category(category) {
                if seen.insert(example.name()) {
                    members.push(example);
                }
            }
        }
        members
    }

    /// Every lesson's members, lesson by lesson
    pub fn curriculum<'r>(&self, registry: &'r Registry) -> Vec<&'r Example> {
        self.lessons
            .iter()
            .flat_map(|lesson| self.members_of(lesson, registry))
            .collect()
    }

    /// Registered examples whose category no lesson pulls in
    pub fn unassigned<'r>(&self, registry: &'r Registry) -> Vec<&'r Example> {
        let covered: HashSet<&str> = self
            .lessons
            .iter()
            .flat_map(|lesson| lesson.categories.iter().copied())
            .collect();
        registry
            .all()
            .iter()
            .filter(|example| !covered.contains(example.category()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ExampleFn, ExampleResult};
    use crate::output::Output;

    fn noop(_out: &mut Output<'_>) -> ExampleResult {
        Ok(())
    }

    fn lesson(number: u32, categories: &'static [&'static str]) -> Lesson {
        Lesson {
            number,
            title: "Test",
            goal: "",
            categories,
            doc_url: None,
        }
    }

    fn registry(entries: &[(&'static str, &'static str)]) -> Registry {
        let mut registry = Registry::new();
        for &(name, category) in entries {
            registry
                .register(Example::new(name, category, "", ExampleFn::Plain(noop)))
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_duplicate_lesson_numbers_rejected() {
        let err = LessonCatalog::new(vec![lesson(1, &["A"]), lesson(1, &["B"])]).unwrap_err();
        assert!(matches!(err, QuickrefError::Config(_)));
    }

    #[test]
    fn test_zero_lesson_number_rejected() {
        assert!(LessonCatalog::new(vec![lesson(0, &["A"])]).is_err());
    }

    #[test]
    fn test_lessons_sorted_by_number() {
        let catalog =
            LessonCatalog::new(vec![lesson(3, &["C"]), lesson(1, &["A"]), lesson(2, &["B"])])
                .unwrap();
        let numbers: Vec<_> = catalog.all_lessons().iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_lesson_by_number_missing() {
        let catalog = LessonCatalog::new(vec![lesson(1, &["A"])]).unwrap();
        assert!(matches!(
            catalog.lesson_by_number(7),
            Err(QuickrefError::LessonNotFound(7))
        ));
    }

    #[test]
    fn test_members_follow_category_order_then_registration_order() {
        let registry = registry(&[("a1", "A"), ("b1", "B"), ("a2", "A"), ("b2", "B")]);
        let catalog = LessonCatalog::new(vec![lesson(1, &["B", "A"])]).unwrap();

        let names: Vec<_> = catalog
            .members_of(&catalog.all_lessons()[0], &registry)
            .into_iter()
            .map(Example::name)
            .collect();
        assert_eq!(names, vec!["b1", "b2", "a1", "a2"]);
    }

    #[test]
    fn test_members_skip_repeated_categories() {
        let registry = registry(&[("a1", "A"), ("b1", "B")]);
        let catalog = LessonCatalog::new(vec![lesson(1, &["A", "B", "A"])]).unwrap();

        let names: Vec<_> = catalog
            .members_of(&catalog.all_lessons()[0], &registry)
            .into_iter()
            .map(Example::name)
            .collect();
        assert_eq!(names, vec!["a1", "b1"]);
    }

    #[test]
    fn test_unassigned_lists_orphan_categories() {
        let registry = registry(&[("a1", "A"), ("z1", "Z"), ("a2", "A")]);
        let catalog = LessonCatalog::new(vec![lesson(1, &["A"])]).unwrap();

        let orphans: Vec<_> = catalog
            .unassigned(&registry)
            .into_iter()
            .map(Example::name)
            .collect();
        assert_eq!(orphans, vec!["z1"]);

        let all: Vec<_> = catalog
            .curriculum(&registry)
            .into_iter()
            .map(Example::name)
            .collect();
        assert_eq!(all, vec!["a1", "a2"]);
    }
}
