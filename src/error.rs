use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickrefError {
    #[error("Duplicate example name: {0}")]
    DuplicateName(String),

    #[error("Example not found: {0}")]
    ExampleNotFound(String),

    #[error("Lesson not found: {0}")]
    LessonNotFound(u32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Example '{name}' failed: {message}")]
    Execution { name: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl QuickrefError {
    /// True for failures that name something absent from the catalog
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QuickrefError::ExampleNotFound(_) | QuickrefError::LessonNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QuickrefError>;
