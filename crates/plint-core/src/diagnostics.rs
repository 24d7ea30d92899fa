//! Diagnostic types for definition linting
//!
//! Provides diagnostics with:
//! - Precise code positioning with line/column and byte-offset information
//! - Code suggestions with applicability levels (safe vs unsafe)
//! - Serde support for machine-readable output formats

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Represents a diagnostic message from linting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique identifier for the rule that generated this diagnostic
    pub rule_id: String,
    /// Severity level of the diagnostic
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Location in the source file
    pub location: Location,
    /// Code suggestions for fixing the issue
    pub suggestions: Vec<CodeSuggestion>,
}

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational messages
    Info,
    /// Hints for improvements
    Hint,
    /// Warnings that should be addressed
    Warning,
    /// Errors that must be fixed
    Error,
}

/// Location information for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// File path
    pub file: PathBuf,
    /// Line number (1-based, 0 when unknown)
    pub line: usize,
    /// Column number (1-based byte column, 0 when unknown)
    pub column: usize,
    /// Byte offset in the file
    pub offset: usize,
    /// Length of the span in bytes
    pub length: usize,
}

/// Indicates how a tool should manage this suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Applicability {
    /// The suggestion is definitely correct and can be applied automatically.
    Always,
    /// The suggestion may be correct but is uncertain and requires review.
    MaybeIncorrect,
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applicability::Always => write!(f, "safe"),
            Applicability::MaybeIncorrect => write!(f, "unsafe"),
        }
    }
}

/// A text replacement that can be automatically applied.
///
/// An empty `replacement` deletes the span covered by `location`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSuggestion {
    /// Description of the suggested fix
    pub message: String,
    /// The replacement text to apply
    pub replacement: String,
    /// Location to apply the replacement
    pub location: Location,
    /// When this suggestion should be applied
    pub applicability: Applicability,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
            location,
            suggestions: Vec::new(),
        }
    }

    /// Add a code suggestion to this diagnostic
    pub fn with_suggestion(mut self, suggestion: CodeSuggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// Check if this diagnostic has any safe fixes
    pub fn has_safe_fixes(&self) -> bool {
        self.suggestions
            .iter()
            .any(|s| s.applicability == Applicability::Always)
    }

    /// Get all safe fixes for this diagnostic
    pub fn safe_fixes(&self) -> Vec<&CodeSuggestion> {
        self.suggestions
            .iter()
            .filter(|s| s.applicability == Applicability::Always)
            .collect()
    }
}

impl Location {
    /// Create a new location
    pub fn new(file: PathBuf, line: usize, column: usize, offset: usize, length: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset,
            length,
        }
    }
}

impl CodeSuggestion {
    /// Create a new code suggestion
    pub fn new(
        message: impl Into<String>,
        replacement: impl Into<String>,
        location: Location,
        applicability: Applicability,
    ) -> Self {
        Self {
            message: message.into(),
            replacement: replacement.into(),
            location,
            applicability,
        }
    }

    /// Create a safe (always applicable) suggestion
    pub fn safe(
        message: impl Into<String>,
        replacement: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(message, replacement, location, Applicability::Always)
    }

    /// Create an unsafe (maybe incorrect) suggestion
    pub fn unsafe_fix(
        message: impl Into<String>,
        replacement: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(message, replacement, location, Applicability::MaybeIncorrect)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}
