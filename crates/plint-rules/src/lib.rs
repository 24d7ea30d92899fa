//! Built-in lint rules for printer definition files
//!
//! Each rule is a plain check function over a [`plint_core::DefinitionModel`];
//! the [`LintEngine`] runs the ones enabled by configuration.

pub mod builtin;
pub mod registry;

pub use builtin::redundant_override::{REDUNDANT_OVERRIDE, check_redundant_override};
pub use registry::{BuiltinRule, CheckFn, LintEngine, all_rules};
