//! plint core
//!
//! Core linting engine for hierarchical printer definition files.
//! This crate provides the fundamental components for loading definition
//! chains, resolving inherited setting values, and producing diagnostics.

pub mod config;
pub mod definition;
pub mod diagnostics;
pub mod error;
pub mod result;

// Configuration system
pub use config::{ConfigLoader, FilesConfiguration, PlintConfiguration};
pub use definition::{
    Definition, DefinitionModel, DefinitionStore, FieldMap, InheritedMatch, OverrideSpan,
    definition_name_from_path, find_inherited_match, find_override_span, flatten_settings,
    is_root_definition, offset_to_position,
};
pub use diagnostics::{Applicability, CodeSuggestion, Diagnostic, Location, Severity};
pub use error::{ErrorKind, PlintError};
pub use result::{Result, ResultExt};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plint=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
