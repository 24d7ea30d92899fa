//! In-memory store of a definition file and its ancestors

use indexmap::IndexMap;
use std::fs;
use std::path::Path;

use super::document::{
    Definition, definition_name_from_path, parent_definition_path,
};
use crate::error::PlintError;
use crate::result::Result;

/// Mapping from definition name to parsed document, populated by recursive
/// ancestor loading.
///
/// A name is never re-loaded once present, and a missing parent file is
/// tolerated as a no-op, so partial chains still lint. The store is created
/// fresh per lint pass and owns its documents for the duration of that pass.
#[derive(Debug, Clone, Default)]
pub struct DefinitionStore {
    documents: IndexMap<String, Definition>,
}

impl DefinitionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the definition at `path` and, recursively, all of its ancestors.
    ///
    /// Fails fast with [`PlintError::CyclicInheritance`] when an `inherits`
    /// chain closes on itself.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let mut chain = Vec::new();
        self.load_recursive(path, &mut chain)
    }

    fn load_recursive(&mut self, path: &Path, chain: &mut Vec<String>) -> Result<()> {
        let Some(name) = definition_name_from_path(path) else {
            return Err(PlintError::internal_error(format!(
                "cannot derive a definition name from '{}'",
                path.display()
            )));
        };

        if chain.contains(&name) {
            chain.push(name);
            return Err(PlintError::cyclic_inheritance(chain));
        }

        if !path.exists() || self.documents.contains_key(&name) {
            tracing::debug!(%name, "skipping load: missing file or already loaded");
            return Ok(());
        }

        let source =
            fs::read_to_string(path).map_err(|e| PlintError::io_error(path, e))?;
        let definition = Definition::from_source(name.clone(), &source, path)?;
        let inherits = definition.inherits.clone();
        self.documents.insert(name.clone(), definition);
        tracing::debug!(%name, "loaded definition");

        if let Some(parent) = inherits {
            let parent_path = parent_definition_path(path, &parent);
            chain.push(name);
            self.load_recursive(&parent_path, chain)?;
            chain.pop();
        }

        Ok(())
    }

    /// Insert an already-parsed definition, keyed by its name.
    ///
    /// Intended for embedders that assemble documents without a filesystem.
    pub fn insert(&mut self, definition: Definition) {
        self.documents.insert(definition.name.clone(), definition);
    }

    /// Look up a document by name
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.documents.get(name)
    }

    /// Whether a document of the given name is loaded
    pub fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    /// Name of the base document: `fdmextruder` if present, else `fdmprinter`
    pub fn base_name(&self) -> &'static str {
        if self.documents.contains_key("fdmextruder") {
            "fdmextruder"
        } else {
            "fdmprinter"
        }
    }

    /// The base document, when loaded
    pub fn base(&self) -> Option<&Definition> {
        self.documents.get(self.base_name())
    }

    /// Number of loaded documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate documents in load order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Definition)> {
        self.documents.iter()
    }
}
