//! Configuration file discovery and loading

use super::plint_config::PlintConfiguration;
use crate::error::PlintError;
use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File names probed during auto-discovery, in order of preference
const CONFIG_FILE_NAMES: [&str; 3] = [".plintrc.json", ".plintrc.toml", "plint.toml"];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover a config file by traversing upward from `start_path`
    ///
    /// Searches the given directory and its ancestors until a config file is
    /// found or the filesystem root is reached. A config with `root: true`
    /// stops the search at its directory.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path.canonicalize().map_err(|e| {
            PlintError::config_error(format!("Invalid path '{}': {e}", start_path.display()))
        })?;

        loop {
            for filename in &CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Load configuration from a specific file
    ///
    /// The format is chosen by extension: `.toml` files are parsed as TOML,
    /// everything else as JSON.
    pub fn load_from_file(path: &Path) -> Result<PlintConfiguration> {
        let content = fs::read_to_string(path).map_err(|e| {
            PlintError::config_error(format!("Cannot read config file '{}': {e}", path.display()))
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content).map_err(|e| {
                PlintError::config_error(format!("Invalid TOML in '{}': {e}", path.display()))
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                PlintError::config_error(format!("Invalid JSON in '{}': {e}", path.display()))
            })?
        };

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Load config from an explicit path or auto-discover from the current
    /// directory
    pub fn load(custom_path: Option<&Path>) -> Result<PlintConfiguration> {
        let config_path = match custom_path {
            Some(path) => {
                if !path.exists() {
                    return Err(PlintError::config_error(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let current_dir = std::env::current_dir().map_err(|e| {
                    PlintError::config_error(format!("Failed to get current directory: {e}"))
                })?;

                match Self::auto_discover(&current_dir)? {
                    Some(path) => path,
                    None => {
                        return Err(PlintError::config_error(
                            "No config file found".to_string(),
                        ));
                    }
                }
            }
        };

        Self::load_from_file(&config_path)
    }

    /// Load config or use the default if none is found
    pub fn load_or_default(custom_path: Option<&Path>) -> PlintConfiguration {
        Self::load(custom_path).unwrap_or_else(|e| {
            tracing::debug!("Falling back to default config: {e}");
            PlintConfiguration::default()
        })
    }
}
