// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the hu application.
//!
//! Errors are grouped by the concern that raises them and wrapped in
//! [`HuError`], which is what every command returns.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for hu operations.
#[derive(Error, Debug)]
pub enum HuError {
    // Project root errors
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Link checking errors
    #[error("Link check error: {0}")]
    Link(#[from] LinkError),

    // SVG generation errors
    #[error("SVG error: {0}")]
    Svg(#[from] SvgError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for HuError {
    fn from(err: dialoguer::Error) -> Self {
        HuError::Ui(err.to_string())
    }
}

/// Errors about the Hugo project the command runs against.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Project root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error(
        "{path} does not look like a Hugo project root (none of {searched} found); \
         run from the project root or pass --skip-root-check"
    )]
    NotAHugoProject { path: PathBuf, searched: String },

    #[error("Content directory not found: {path}")]
    ContentDirNotFound { path: PathBuf },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },
}

/// Errors raised while scanning content for broken links.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    #[error("Found {links} broken link(s) in {files} file(s)")]
    BrokenLinks { files: usize, links: usize },
}

/// Errors raised while generating SVG previews.
#[derive(Error, Debug)]
pub enum SvgError {
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type alias for hu operations.
pub type Result<T> = std::result::Result<T, HuError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| HuError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
