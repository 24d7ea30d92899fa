//! Flattening of the base document's nested setting tree

use serde_json::Value;

use super::document::FieldMap;

/// Expand a nested `settings` tree into a flat mapping from every setting
/// key, at any nesting depth, to its definition record.
///
/// Children are inserted before their parent, so on a key collision the
/// parent record wins (keys are expected unique in practice). The input is
/// not modified; callers keep the store immutable and carry the returned
/// map alongside it.
pub fn flatten_settings(settings: &FieldMap) -> FieldMap {
    let mut flat = FieldMap::new();
    for (name, setting) in settings {
        insert_setting(name, setting, &mut flat);
    }
    flat
}

fn insert_setting(name: &str, setting: &Value, flat: &mut FieldMap) {
    if let Some(children) = setting.get("children").and_then(Value::as_object) {
        for (child_name, child) in children {
            insert_setting(child_name, child, flat);
        }
    }
    flat.insert(name.to_string(), setting.clone());
}
