pub mod list;
pub mod run;

use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Command execution result
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Success with optional message
    Success(Option<String>),
    /// Failure with message
    Failure(String),
}

impl CommandResult {
    /// Convert to exit code
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandResult::Success(_) => 0,
            CommandResult::Failure(_) => 1,
        }
    }

    /// Get message if any
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandResult::Success(msg) => msg.as_deref(),
            CommandResult::Failure(msg) => Some(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CommandResult::Success(None).exit_code(), 0);
        assert_eq!(CommandResult::Failure("x".into()).exit_code(), 1);
        assert_eq!(CommandResult::Failure("x".into()).message(), Some("x"));
        assert_eq!(CommandResult::Success(None).message(), None);
    }
}
