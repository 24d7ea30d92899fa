//! Redundant override detection
//!
//! Flags overrides in a definition file that restate the exact value the
//! file would inherit from an ancestor anyway. Single-line override blocks
//! get a safe deletion suggestion; multi-line blocks only get the
//! diagnostic, since deleting them textually risks ill-formed JSON.

use plint_core::definition::{
    InheritedMatch, find_inherited_match, find_override_span, is_root_definition,
    offset_to_position,
};
use plint_core::diagnostics::{CodeSuggestion, Diagnostic, Location, Severity};
use plint_core::DefinitionModel;

/// Rule ID for redundant override detection
pub const REDUNDANT_OVERRIDE: &str = "diagnostic-definition-redundant-override";

/// Check a definition file for overrides equal to their inherited value.
///
/// Root definitions are skipped: they have nothing to be redundant against.
pub fn check_redundant_override(model: &DefinitionModel) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if is_root_definition(&model.name) {
        return diagnostics;
    }
    let Some(definition) = model.definition() else {
        return diagnostics;
    };
    let (Some(overrides), Some(inherits)) = (&definition.overrides, &definition.inherits) else {
        return diagnostics;
    };

    for (key, fields) in overrides {
        let Some(fields) = fields.as_object() else {
            continue;
        };

        let matched = match find_inherited_match(
            &model.store,
            &model.base_settings,
            key,
            fields,
            inherits,
        ) {
            Ok(Some(matched)) => matched,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!(%key, "skipping override check: {err}");
                continue;
            }
        };

        diagnostics.push(build_diagnostic(model, key, &matched));
    }

    diagnostics
}

fn build_diagnostic(model: &DefinitionModel, key: &str, matched: &InheritedMatch) -> Diagnostic {
    let message = format!(
        "Overriding {key} with the same value ({field}: {value}) as defined in parent definition: {ancestor}",
        field = matched.field,
        value = matched.value,
        ancestor = matched.ancestor,
    );

    let Some(span) = find_override_span(&model.source, key) else {
        // The block exists in the model but not in a form the locator
        // understands; report it anyway, without a position or fix
        return Diagnostic::new(REDUNDANT_OVERRIDE, Severity::Warning, message, Location::default());
    };

    let (line, column) = offset_to_position(&model.source, span.offset);
    let location = Location::new(model.path.clone(), line, column, span.offset, span.length);
    let mut diagnostic =
        Diagnostic::new(REDUNDANT_OVERRIDE, Severity::Warning, message, location.clone());

    if !span.multiline {
        diagnostic = diagnostic.with_suggestion(CodeSuggestion::safe(
            format!("Remove the redundant {key} override"),
            "",
            location,
        ));
    }

    diagnostic
}
