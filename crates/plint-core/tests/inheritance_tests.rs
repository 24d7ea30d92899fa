//! End-to-end tests for definition loading and override resolution

use plint_core::{DefinitionModel, find_inherited_match};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Standard layout: roots under `resources/definitions`, children two levels
/// below under `resources/printers/<vendor>`
fn write_tree(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("resources");
    fs::create_dir_all(root.join("definitions")).unwrap();
    fs::create_dir_all(root.join("printers").join("vendor")).unwrap();
    for (rel, content) in files {
        fs::write(root.join(rel), content).unwrap();
    }
    (temp, root)
}

#[test]
fn resolves_redundancy_across_a_three_level_chain() {
    let (_temp, root) = write_tree(&[
        (
            "definitions/fdmprinter.def.json",
            r#"{
                "settings": {
                    "speed": {
                        "type": "category",
                        "children": {
                            "speed_print": {"type": "float", "default_value": 60}
                        }
                    }
                }
            }"#,
        ),
        (
            "printers/vendor/vendor_base.def.json",
            r#"{
                "inherits": "fdmprinter",
                "overrides": {
                    "speed_print": {"default_value": 50}
                }
            }"#,
        ),
        (
            "printers/vendor/vendor_mid.def.json",
            r#"{"inherits": "vendor_base"}"#,
        ),
        (
            "printers/vendor/vendor_pro.def.json",
            r#"{
                "inherits": "vendor_mid",
                "overrides": {
                    "speed_print": {"value": 50.0}
                }
            }"#,
        ),
    ]);

    let model =
        DefinitionModel::load(&root.join("printers/vendor/vendor_pro.def.json")).unwrap();
    assert_eq!(model.store.len(), 4);

    let definition = model.definition().unwrap();
    let overrides = definition.overrides.as_ref().unwrap();
    let fields = overrides["speed_print"].as_object().unwrap();

    // vendor_mid declares no overrides; the match is attributed to
    // vendor_base, and 50.0 matches 50 because speed_print is a float
    let matched = find_inherited_match(
        &model.store,
        &model.base_settings,
        "speed_print",
        fields,
        definition.inherits.as_deref().unwrap(),
    )
    .unwrap()
    .expect("override should be redundant");
    assert_eq!(matched.ancestor, "vendor_base");
}

#[test]
fn extruder_chains_use_fdmextruder_as_base() {
    let (_temp, root) = write_tree(&[
        (
            "definitions/fdmextruder.def.json",
            r#"{
                "settings": {
                    "machine_nozzle_size": {"type": "float", "default_value": 0.4}
                }
            }"#,
        ),
        (
            "printers/vendor/vendor_extruder.def.json",
            r#"{
                "inherits": "fdmextruder",
                "overrides": {
                    "machine_nozzle_size": {"value": "0.4"}
                }
            }"#,
        ),
    ]);

    let model =
        DefinitionModel::load(&root.join("printers/vendor/vendor_extruder.def.json")).unwrap();
    assert_eq!(model.store.base_name(), "fdmextruder");
    assert!(model.base_settings.contains_key("machine_nozzle_size"));
}

#[test]
fn incomplete_chains_still_produce_a_model() {
    let (_temp, root) = write_tree(&[(
        "printers/vendor/vendor_orphan.def.json",
        r#"{
            "inherits": "missing_parent",
            "overrides": {
                "speed_print": {"value": 50}
            }
        }"#,
    )]);

    let model =
        DefinitionModel::load(&root.join("printers/vendor/vendor_orphan.def.json")).unwrap();
    assert_eq!(model.store.len(), 1);
    assert!(model.base_settings.is_empty());

    // The missing ancestor simply ends the chain: nothing is redundant
    let definition = model.definition().unwrap();
    let fields = definition.overrides.as_ref().unwrap()["speed_print"]
        .as_object()
        .unwrap();
    let matched = find_inherited_match(
        &model.store,
        &model.base_settings,
        "speed_print",
        fields,
        "missing_parent",
    )
    .unwrap();
    assert!(matched.is_none());
}
