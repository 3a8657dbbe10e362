// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from hu.toml.

use crate::error::{ConfigError, HuError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default Hugo content directory, relative to the project root.
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// The main configuration structure for hu.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HuConfig {
    /// Broken link checker configuration.
    pub links: LinksConfig,

    /// SVG preview configuration.
    pub svg: SvgConfig,
}

impl HuConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &std::path::Path) -> Result<Self> {
        super::loader::load_config(root)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.links.ignore {
            glob::Pattern::new(pattern).map_err(|e| {
                HuError::Config(ConfigError::InvalidValue {
                    key: "links.ignore".to_string(),
                    message: format!("'{}': {}", pattern, e),
                })
            })?;
        }

        if self.svg.width == 0 {
            return Err(invalid("svg.width", "must be greater than zero"));
        }
        if self.svg.height == 0 {
            return Err(invalid("svg.height", "must be greater than zero"));
        }

        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> HuError {
    HuError::Config(ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    })
}

/// Broken link checker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Content directory to scan.
    pub content_dir: PathBuf,

    /// Glob patterns of links that are never reported.
    pub ignore: Vec<String>,

    /// Verify site-absolute asset links (with a file extension) under
    /// `static/` and the content directory.
    pub check_static: bool,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            ignore: Vec::new(),
            check_static: false,
        }
    }
}

/// SVG preview configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Content directory to scan for page bundles.
    pub content_dir: PathBuf,

    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Background colour.
    pub bg: String,

    /// Foreground (text) colour.
    pub fg: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            width: 1200,
            height: 630,
            bg: "#f3f4f6".to_string(),
            fg: "#0b1220".to_string(),
        }
    }
}
