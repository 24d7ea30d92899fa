//! Error types and handling for definition linting operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for definition linting operations
#[derive(Debug, Error)]
pub enum PlintError {
    /// JSON syntax errors in a definition file
    #[error("Parse error in '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Rule execution errors
    #[error("Rule error in '{rule_id}': {message}")]
    RuleError { rule_id: String, message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A definition inherits from itself, directly or transitively
    #[error("Cyclic inheritance detected: {chain}")]
    CyclicInheritance { chain: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Config,
    Rule,
    Io,
    Inheritance,
    Internal,
}

impl PlintError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlintError::ParseError { .. } => ErrorKind::Parse,
            PlintError::ConfigError { .. } => ErrorKind::Config,
            PlintError::RuleError { .. } => ErrorKind::Rule,
            PlintError::IoError { .. } => ErrorKind::Io,
            PlintError::CyclicInheritance { .. } => ErrorKind::Inheritance,
            PlintError::InternalError { .. } => ErrorKind::Internal,
        }
    }

    /// Check if this error is recoverable (can continue processing other files)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Parse | ErrorKind::Rule | ErrorKind::Inheritance
        )
    }

    /// Create a parse error for a definition file
    pub fn parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ParseError {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a rule error
    pub fn rule_error(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RuleError {
            rule_id: rule_id.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a cyclic inheritance error from the chain of definition names
    /// visited before the cycle closed
    pub fn cyclic_inheritance(chain: &[String]) -> Self {
        Self::CyclicInheritance {
            chain: chain.join(" -> "),
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for PlintError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}
