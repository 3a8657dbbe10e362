// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hugo project root detection.

use crate::error::{HuError, ProjectError, Result};
use std::path::{Path, PathBuf};

/// Files whose presence marks a Hugo project root, in order of priority.
pub const HUGO_CONFIG_FILES: &[&str] = &[
    "hugo.toml",
    "hugo.yaml",
    "hugo.yml",
    "hugo.json",
    "config.toml",
    "config.yaml",
    "config.yml",
    "config.json",
];

/// Directory form of the Hugo configuration.
pub const HUGO_CONFIG_DIR: &str = "config/_default";

/// A Hugo project the current command operates on.
#[derive(Debug, Clone)]
pub struct HugoProject {
    /// Absolute path to the project root.
    pub root: PathBuf,
    /// The Hugo configuration file or directory that was detected.
    pub config_marker: Option<PathBuf>,
}

impl HugoProject {
    /// Open the project at `root`, requiring it to look like a Hugo site.
    pub fn open(root: &Path) -> Result<Self> {
        let project = Self::open_unchecked(root)?;
        if project.config_marker.is_none() {
            let mut searched: Vec<&str> = HUGO_CONFIG_FILES.to_vec();
            searched.push(HUGO_CONFIG_DIR);
            return Err(HuError::Project(ProjectError::NotAHugoProject {
                path: project.root,
                searched: searched.join(", "),
            }));
        }
        Ok(project)
    }

    /// Open the project at `root` without checking for a Hugo configuration.
    pub fn open_unchecked(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(HuError::Project(ProjectError::RootNotFound {
                path: root.to_path_buf(),
            }));
        }

        let root = root.canonicalize()?;
        let config_marker = detect_config(&root);
        match &config_marker {
            Some(marker) => tracing::debug!("Detected Hugo configuration: {:?}", marker),
            None => tracing::debug!("No Hugo configuration found in {:?}", root),
        }

        Ok(Self {
            root,
            config_marker,
        })
    }

    /// Resolve a content directory against the project root.
    ///
    /// Relative paths are taken from the root, not the process working
    /// directory. The directory must exist.
    pub fn content_dir(&self, dir: &Path) -> Result<PathBuf> {
        let joined = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.root.join(dir)
        };

        if !joined.is_dir() {
            return Err(HuError::Project(ProjectError::ContentDirNotFound { path: joined }));
        }

        Ok(joined.canonicalize()?)
    }
}

/// Find the Hugo configuration marker in `root`.
pub fn detect_config(root: &Path) -> Option<PathBuf> {
    HUGO_CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
        .or_else(|| {
            let dir = root.join(HUGO_CONFIG_DIR);
            dir.is_dir().then_some(dir)
        })
}
