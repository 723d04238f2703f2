use std::collections::{BTreeMap, BTreeSet};

/// Shared read-only data lent to examples that declare [`Resource::TestData`].
///
/// The runner builds one instance per run. Examples receive `&SampleData`
/// and clone whatever they want to mutate.
///
/// [`Resource::TestData`]: super::Resource::TestData
#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    pub fruits: Vec<String>,
    pub scores: BTreeMap<String, i32>,
    pub numbers: BTreeSet<i32>,
    pub triple: (i32, i32, i32),
    pub text: String,
}

impl Default for SampleData {
    fn default() -> Self {
        Self {
            fruits: ["apple", "banana", "cherry"]
                .into_iter()
                .map(String::from)
                .collect(),
            scores: [("a", 1), ("b", 2), ("c", 3)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            numbers: BTreeSet::from([1, 2, 3]),
            triple: (10, 20, 30),
            text: "Rust is awesome!".to_string(),
        }
    }
}
