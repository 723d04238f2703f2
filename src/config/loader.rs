use super::types::RunConfig;
use crate::{QuickrefError, Result};
use std::path::Path;

/// Loader for YAML run configuration files
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read, parse and validate a config file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<RunConfig> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            QuickrefError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        self.parse(&contents).map_err(|e| match e {
            QuickrefError::Config(msg) => {
                QuickrefError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse and validate config text
    pub fn parse(&self, contents: &str) -> Result<RunConfig> {
        let config: RunConfig = serde_yaml_ng::from_str(contents)
            .map_err(|e| QuickrefError::Config(format!("Invalid config: {}", e)))?;
        self.validate(&config)?;
        Ok(config)
    }

    fn validate(&self, config: &RunConfig) -> Result<()> {
        if config.functions.is_empty() {
            return Err(QuickrefError::Config(
                "'functions' must list at least one example".to_string(),
            ));
        }

        if let Some(index) = config.functions.iter().position(|f| f.trim().is_empty()) {
            return Err(QuickrefError::Config(format!(
                "'functions' entry at index {} is blank",
                index
            )));
        }

        if let Some(dir) = &config.output_dir {
            if dir.as_os_str().is_empty() {
                return Err(QuickrefError::Config(
                    "'output_dir' must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_functions_and_output_dir() {
        let config = ConfigLoader::new()
            .parse("functions:\n  - vec_iterate\n  - match_basics\noutput_dir: out\n")
            .unwrap();
        assert_eq!(config.functions, vec!["vec_iterate", "match_basics"]);
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_output_dir_is_optional() {
        let config = ConfigLoader::new().parse("functions: [vec_iterate]").unwrap();
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_missing_functions_rejected() {
        let err = ConfigLoader::new().parse("output_dir: out\n").unwrap_err();
        assert!(matches!(err, QuickrefError::Config(_)));
    }

    #[test]
    fn test_empty_and_blank_functions_rejected() {
        let loader = ConfigLoader::new();
        assert!(loader.parse("functions: []").is_err());
        assert!(loader.parse("functions: ['  ']").is_err());
    }

    #[test]
    fn test_functions_must_be_a_list() {
        let err = ConfigLoader::new().parse("functions: 12\n").unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
