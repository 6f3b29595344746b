//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; `run` maps the error
//! to an exit code.
//!
//! ## Batch Validation Errors
//!
//! `BatchValidationError<T>` collects per-item failures with context, used by
//! `stats` to report history lines it could not read.

use blackjack_ai::AgentError;
use blackjack_engine::errors::GameError;
use std::fmt;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),

    /// Run stopped before completion
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<AgentError> for CliError {
    fn from(error: AgentError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

/// One failed item of a batch, with context naming which.
///
/// # Examples
///
/// ```rust
/// use blackjack_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "missing field `outcome`".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: missing field `outcome`");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    pub message: String,
}

impl<T: fmt::Display> fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_error_formats_context_first() {
        let error = BatchValidationError {
            item_context: "line 3".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(error.to_string(), "line 3: expected value");
    }

    #[test]
    fn engine_errors_convert_with_message() {
        let e: CliError = GameError::PoolExhausted.into();
        assert!(matches!(e, CliError::Engine(_)));
        assert!(e.to_string().starts_with("Engine error:"));
    }

    #[test]
    fn unknown_agent_is_invalid_input() {
        let e: CliError = AgentError::UnknownAgent("dqn".into()).into();
        match e {
            CliError::InvalidInput(msg) => assert!(msg.contains("dqn")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
