// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and loading.

use crate::error::{ConfigError, HuError, Result};
use std::path::{Path, PathBuf};

use super::schema::HuConfig;

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &["hu.toml", ".hu.toml", ".config/hu.toml"];

/// Find the configuration file for a project root.
///
/// Only the root itself is searched, then the user's config directory
/// (`<config dir>/hu/config.toml`). Parent directories are never consulted.
pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
        .or_else(user_config_file)
}

fn user_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("hu").join("config.toml");
    path.is_file().then_some(path)
}

/// Load configuration for the project rooted at `root`.
pub fn load_config(root: &Path) -> Result<HuConfig> {
    match find_config_file(root) {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(HuConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<HuConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(HuError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        HuError::Config(ConfigError::ParseError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let config = parse_config(&content)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<HuConfig> {
    toml::from_str(content).map_err(|e| {
        HuError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}
