//! Configuration types for plint

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main plint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlintConfiguration {
    /// JSON Schema reference for IDE support
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Mark this directory as the root (stop upward search)
    pub root: Option<bool>,

    /// Per-check toggles, keyed by rule id
    pub checks: Option<HashMap<String, bool>>,

    /// File pattern configuration
    pub files: Option<FilesConfiguration>,
}

/// Files configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesConfiguration {
    /// Glob patterns to include
    pub include: Option<Vec<String>>,

    /// Glob patterns to exclude
    pub exclude: Option<Vec<String>>,
}

impl PlintConfiguration {
    /// Whether the given check is enabled.
    ///
    /// Checks absent from the `checks` map are disabled.
    pub fn is_check_enabled(&self, rule_id: &str) -> bool {
        self.checks
            .as_ref()
            .and_then(|checks| checks.get(rule_id))
            .copied()
            .unwrap_or(false)
    }

    /// Include patterns, falling back to the defaults
    pub fn include_patterns(&self) -> Vec<String> {
        self.files
            .as_ref()
            .and_then(|files| files.include.clone())
            .unwrap_or_else(|| vec!["**/*.def.json".to_string()])
    }

    /// Exclude patterns, falling back to the defaults
    pub fn exclude_patterns(&self) -> Vec<String> {
        self.files
            .as_ref()
            .and_then(|files| files.exclude.clone())
            .unwrap_or_else(|| vec!["**/target/**".to_string(), "**/build/**".to_string()])
    }
}

impl Default for PlintConfiguration {
    fn default() -> Self {
        let mut checks = HashMap::new();
        checks.insert(
            "diagnostic-definition-redundant-override".to_string(),
            true,
        );
        Self {
            schema: None,
            root: Some(false),
            checks: Some(checks),
            files: Some(FilesConfiguration::default()),
        }
    }
}

impl Default for FilesConfiguration {
    fn default() -> Self {
        Self {
            include: Some(vec!["**/*.def.json".to_string()]),
            exclude: Some(vec![
                "**/target/**".to_string(),
                "**/build/**".to_string(),
            ]),
        }
    }
}
