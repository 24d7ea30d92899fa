//! Definition documents, their inheritance chains, and derived views
//!
//! A lint pass over one definition file works through a [`DefinitionModel`]:
//! the parsed target document, its raw source text, the store holding the
//! whole ancestor chain, and the flattened base settings used for
//! numeric-type lookups.

mod document;
mod flatten;
mod resolver;
mod source;
mod store;

pub use document::{
    DEFINITION_SUFFIX, Definition, FieldMap, ROOT_DEFINITIONS, definition_name_from_path,
    is_root_definition, parent_definition_path,
};
pub use flatten::flatten_settings;
pub use resolver::{InheritedMatch, find_inherited_match};
pub use source::{OverrideSpan, find_override_span, offset_to_position};
pub use store::DefinitionStore;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PlintError;
use crate::result::Result;

/// Everything one lint pass needs to know about a definition file
#[derive(Debug, Clone)]
pub struct DefinitionModel {
    /// Name of the target document
    pub name: String,
    /// Path of the target file
    pub path: PathBuf,
    /// Raw source text of the target file
    pub source: String,
    /// The target document and all of its loadable ancestors
    pub store: DefinitionStore,
    /// Flat setting-key to definition-record view of the base document
    pub base_settings: FieldMap,
}

impl DefinitionModel {
    /// Load the definition at `path` together with its ancestor chain and
    /// compute the flattened base settings
    pub fn load(path: &Path) -> Result<Self> {
        let Some(name) = definition_name_from_path(path) else {
            return Err(PlintError::config_error(format!(
                "'{}' is not a definition file",
                path.display()
            )));
        };

        let mut store = DefinitionStore::new();
        store.load(path)?;
        if !store.contains(&name) {
            return Err(PlintError::io_error(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "definition file not found"),
            ));
        }

        let source = fs::read_to_string(path).map_err(|e| PlintError::io_error(path, e))?;
        let base_settings = store
            .base()
            .and_then(|base| base.settings.as_ref())
            .map(flatten_settings)
            .unwrap_or_default();

        Ok(Self {
            name,
            path: path.to_path_buf(),
            source,
            store,
            base_settings,
        })
    }

    /// The target document
    pub fn definition(&self) -> Option<&Definition> {
        self.store.get(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_model_load_builds_chain_and_base_settings() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("resources");
        fs::create_dir_all(root.join("definitions")).unwrap();
        fs::create_dir_all(root.join("printers").join("acme")).unwrap();
        fs::write(
            root.join("definitions/fdmprinter.def.json"),
            r#"{"settings": {"speed": {"type": "category", "children": {"speed_print": {"type": "float", "default_value": 60}}}}}"#,
        )
        .unwrap();
        let target = root.join("printers/acme/acme_one.def.json");
        fs::write(
            &target,
            r#"{"inherits": "fdmprinter", "overrides": {"speed_print": {"value": 50}}}"#,
        )
        .unwrap();

        let model = DefinitionModel::load(&target).unwrap();

        assert_eq!(model.name, "acme_one");
        assert_eq!(model.store.len(), 2);
        assert!(model.base_settings.contains_key("speed_print"));
        assert!(model.base_settings.contains_key("speed"));
        assert!(model.definition().is_some());
    }

    #[test]
    fn test_model_load_keeps_store_settings_intact() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("resources");
        fs::create_dir_all(root.join("definitions")).unwrap();
        fs::create_dir_all(root.join("printers").join("acme")).unwrap();
        fs::write(
            root.join("definitions/fdmprinter.def.json"),
            r#"{"settings": {"speed_print": {"type": "float"}}}"#,
        )
        .unwrap();
        let target = root.join("printers/acme/acme_two.def.json");
        fs::write(&target, r#"{"inherits": "fdmprinter"}"#).unwrap();

        let model = DefinitionModel::load(&target).unwrap();

        // Flattening is a derived view: the base document still carries its
        // original nested settings tree
        let base = model.store.base().unwrap();
        assert!(base.settings.is_some());
        assert!(base.overrides.is_none());
    }

    #[test]
    fn test_model_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = DefinitionModel::load(&temp.path().join("ghost.def.json"));
        assert!(result.is_err());
    }
}
