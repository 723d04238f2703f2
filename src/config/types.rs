use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run configuration read from a YAML file
///
/// ```yaml
/// functions:
///   - vec_iterate
///   - match_basics
/// output_dir: build/quickref
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Example names to run, in order
    pub functions: Vec<String>,

    /// Directory for examples that write files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}
