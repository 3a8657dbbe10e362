// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! hu - Hugo utilities
//!
//! Automates tasks for Hugo static site generator projects. Commands run
//! against a Hugo project root (by default the current directory).
//!
//! # Features
//!
//! - **Broken links**: find internal Markdown/HTML links whose target page
//!   bundle or file does not exist
//! - **Social previews**: generate `<page>-image.svg` files from front matter
//!
//! # Example
//!
//! ```no_run
//! use hu::links::{find_broken_links, LinkResolver};
//! use hu::project::HugoProject;
//! use indicatif::ProgressBar;
//! use std::path::Path;
//!
//! let project = HugoProject::open(Path::new(".")).unwrap();
//! let content = project.content_dir(Path::new("content")).unwrap();
//! let resolver = LinkResolver::new(&content, &project.root);
//!
//! let report = find_broken_links(&resolver, &project.root, &ProgressBar::hidden()).unwrap();
//! for file in &report.files {
//!     println!("{}: {:?}", file.path, file.links);
//! }
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod links;
pub mod project;
pub mod svg;

// Re-exports for convenience
pub use config::HuConfig;
pub use error::{HuError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// Value vergen emits when git metadata is unavailable.
    const PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

    /// The current version of hu.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub fn git_sha() -> Option<&'static str> {
        option_env!("VERGEN_GIT_SHA").filter(|s| *s != PLACEHOLDER)
    }

    /// The git commit date at compile time (if available).
    pub fn git_commit_date() -> Option<&'static str> {
        option_env!("VERGEN_GIT_COMMIT_DATE").filter(|s| *s != PLACEHOLDER)
    }

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (git_sha(), git_commit_date()) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
