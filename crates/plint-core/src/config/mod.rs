//! Configuration system for plint
//!
//! Provides the serde-backed configuration surface and discovery/loading of
//! configuration files.

mod loader;
mod plint_config;

pub use loader::ConfigLoader;
pub use plint_config::{FilesConfiguration, PlintConfiguration};
