//! Resolution of proposed overrides against the inheritance chain

use serde_json::Value;

use super::document::FieldMap;
use super::store::DefinitionStore;
use crate::error::PlintError;
use crate::result::Result;

/// The two fields that both express "the effective inherited value" and are
/// therefore compared against each other
const CROSS_COMPARED_FIELDS: [&str; 2] = ["default_value", "value"];

/// A proposed override field found to match an inherited value
#[derive(Debug, Clone, PartialEq)]
pub struct InheritedMatch {
    /// The proposed field whose value matched
    pub field: String,
    /// The proposed value
    pub value: Value,
    /// Name of the ancestor whose overrides supplied the matching value
    pub ancestor: String,
}

/// Walk up the inheritance chain from `ancestor` looking for the nearest
/// document that overrides `key` with a value equal to one of the proposed
/// fields.
///
/// Numeric-typed settings (per the flattened base settings) compare
/// `default_value`/`value` numerically; everything else compares raw values
/// exactly. Returns `Ok(None)` when the chain is exhausted without a match,
/// and fails with [`PlintError::CyclicInheritance`] if the chain closes on
/// itself.
pub fn find_inherited_match(
    store: &DefinitionStore,
    base_settings: &FieldMap,
    key: &str,
    proposed: &FieldMap,
    ancestor: &str,
) -> Result<Option<InheritedMatch>> {
    let mut visited = Vec::new();
    resolve_from(store, base_settings, key, proposed, ancestor, &mut visited)
}

fn resolve_from(
    store: &DefinitionStore,
    base_settings: &FieldMap,
    key: &str,
    proposed: &FieldMap,
    ancestor: &str,
    visited: &mut Vec<String>,
) -> Result<Option<InheritedMatch>> {
    if visited.iter().any(|name| name == ancestor) {
        visited.push(ancestor.to_string());
        return Err(PlintError::cyclic_inheritance(visited));
    }
    visited.push(ancestor.to_string());

    let Some(document) = store.get(ancestor) else {
        // Missing ancestors end the chain quietly, mirroring load tolerance
        return Ok(None);
    };

    // Documents that only declare inheritance are skipped through
    let Some(parent) = document.overrides.as_ref() else {
        return match document.inherits.as_deref() {
            Some(next) => resolve_from(store, base_settings, key, proposed, next, visited),
            None => Ok(None),
        };
    };

    let numeric = is_numeric_setting(base_settings, key);

    if let Some(inherited) = parent.get(key).and_then(Value::as_object) {
        for (field, value) in proposed {
            let cross_compared = CROSS_COMPARED_FIELDS.contains(&field.as_str());
            let candidates: Vec<&Value> = if cross_compared {
                CROSS_COMPARED_FIELDS
                    .iter()
                    .filter_map(|name| inherited.get(*name))
                    .collect()
            } else {
                inherited.get(field.as_str()).into_iter().collect()
            };

            for candidate in candidates {
                if values_equal(value, candidate, numeric && cross_compared) {
                    return Ok(Some(InheritedMatch {
                        field: field.clone(),
                        value: value.clone(),
                        ancestor: ancestor.to_string(),
                    }));
                }
            }
        }
    }

    match document.inherits.as_deref() {
        Some(next) => resolve_from(store, base_settings, key, proposed, next, visited),
        None => Ok(None),
    }
}

/// Whether `key` is a numeric setting according to the flattened base
/// settings; keys absent from the base are treated as non-numeric
fn is_numeric_setting(base_settings: &FieldMap, key: &str) -> bool {
    matches!(
        base_settings
            .get(key)
            .and_then(|setting| setting.get("type"))
            .and_then(Value::as_str),
        Some("float" | "int")
    )
}

/// Compare two values, numerically when requested and both sides parse;
/// otherwise by exact raw equality
fn values_equal(a: &Value, b: &Value, numeric: bool) -> bool {
    if numeric {
        if let (Some(x), Some(y)) = (as_f64(a), as_f64(b)) {
            return x == y;
        }
    }
    a == b
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
