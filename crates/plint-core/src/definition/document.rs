//! Parsed definition documents

use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::PlintError;
use crate::result::Result;

/// JSON object preserving document order
pub type FieldMap = serde_json::Map<String, Value>;

/// File suffix shared by all definition files
pub const DEFINITION_SUFFIX: &str = ".def.json";

/// The two distinguished root definitions that supply the canonical
/// settings tree
pub const ROOT_DEFINITIONS: [&str; 2] = ["fdmprinter", "fdmextruder"];

/// Whether `name` is one of the distinguished root definitions
pub fn is_root_definition(name: &str) -> bool {
    ROOT_DEFINITIONS.contains(&name)
}

/// Derive a definition name from a file path by stripping the final two
/// dot-separated suffixes (`my_printer.def.json` -> `my_printer`)
pub fn definition_name_from_path(path: &Path) -> Option<String> {
    let stem = Path::new(path.file_stem()?).file_stem()?;
    Some(stem.to_string_lossy().into_owned())
}

/// A named, parsed definition document.
///
/// Only the fields the linter reasons about are modeled; other top-level
/// fields (`version`, `metadata`, ...) are tolerated and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    /// Document name, derived from the filename (not part of the JSON body)
    #[serde(skip)]
    pub name: String,

    /// Name of the parent definition, if any
    #[serde(default)]
    pub inherits: Option<String>,

    /// Setting-key to field-mapping overrides
    #[serde(default)]
    pub overrides: Option<FieldMap>,

    /// Nested setting tree, present in root definitions only
    #[serde(default)]
    pub settings: Option<FieldMap>,
}

impl Definition {
    /// Parse a definition document from JSON source
    pub fn from_source(name: impl Into<String>, source: &str, path: &Path) -> Result<Self> {
        let mut definition: Definition =
            serde_json::from_str(source).map_err(|e| PlintError::parse_error(path, e))?;
        definition.name = name.into();
        Ok(definition)
    }
}

/// Resolve the path of the parent definition relative to its child.
///
/// The distinguished root definitions live in a `definitions/` directory two
/// levels above the child; everything else is a sibling file.
pub fn parent_definition_path(child: &Path, inherits: &str) -> PathBuf {
    let dir = child.parent().unwrap_or_else(|| Path::new(""));
    let file = format!("{inherits}{DEFINITION_SUFFIX}");
    if is_root_definition(inherits) {
        dir.join("..").join("..").join("definitions").join(file)
    } else {
        dir.join(file)
    }
}
