//! Rule registry and lint engine

use plint_core::diagnostics::Diagnostic;
use plint_core::{DefinitionModel, PlintConfiguration};

use crate::builtin::redundant_override;

/// Signature shared by all built-in checks
pub type CheckFn = fn(&DefinitionModel) -> Vec<Diagnostic>;

/// A built-in rule: identifier, description, and check function
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRule {
    /// Unique identifier, used as the `checks` configuration key
    pub id: &'static str,
    /// Human-readable description of what the rule checks
    pub description: &'static str,
    /// The check function
    pub check: CheckFn,
}

static RULES: [BuiltinRule; 1] = [BuiltinRule {
    id: redundant_override::REDUNDANT_OVERRIDE,
    description: "Overriding a setting with the same value it would inherit from a parent definition",
    check: redundant_override::check_redundant_override,
}];

/// All built-in rules
pub fn all_rules() -> &'static [BuiltinRule] {
    &RULES
}

/// Runs the configured checks over a definition model
#[derive(Debug, Clone)]
pub struct LintEngine {
    config: PlintConfiguration,
}

impl LintEngine {
    /// Create an engine with the given configuration
    pub fn new(config: PlintConfiguration) -> Self {
        Self { config }
    }

    /// Run every enabled rule against the model
    pub fn run(&self, model: &DefinitionModel) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for rule in all_rules() {
            if !self.config.is_check_enabled(rule.id) {
                tracing::debug!(rule = rule.id, "check disabled");
                continue;
            }
            tracing::debug!(rule = rule.id, file = %model.path.display(), "running check");
            diagnostics.extend((rule.check)(model));
        }
        diagnostics
    }
}
