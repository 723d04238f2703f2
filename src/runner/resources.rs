use std::path::{Path, PathBuf};
use tracing::info;

use crate::catalog::SampleData;
use crate::Result;

/// Per-run resources handed to examples on demand.
///
/// Both are created lazily, so a run that never needs them builds no sample
/// data and leaves the filesystem untouched. The output directory is checked
/// again on every request because an earlier example may have removed it.
#[derive(Debug)]
pub struct Resources {
    sample: Option<SampleData>,
    output_dir: PathBuf,
}

impl Resources {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            sample: None,
            output_dir: output_dir.into(),
        }
    }

    /// Sample data, built on first use and shared for the rest of the run
    pub fn sample_data(&mut self) -> &SampleData {
        self.sample.get_or_insert_with(SampleData::default)
    }

    /// The output directory, created if it is missing
    pub fn output_dir(&mut self) -> Result<&Path> {
        let existed = self.output_dir.is_dir();
        std::fs::create_dir_all(&self.output_dir)?;
        if !existed {
            info!("Created output directory: {}", self.output_dir.display());
        }
        Ok(&self.output_dir)
    }
}
