// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Resolution of internal links against the Hugo content tree.
//!
//! Hugo serves a leaf bundle `content/section/slug/index.md` at
//! `/section/slug/` and a branch bundle `content/section/_index.md` at
//! `/section/`. Site-absolute links are checked against those layouts;
//! relative links are resolved from the directory of the linking file.

use std::path::{Path, PathBuf};

/// Return the URL scheme of a link, if it has one.
///
/// A scheme is a letter followed by letters, digits, `+`, `-` or `.`,
/// terminated by `:`.
pub fn url_scheme(link: &str) -> Option<&str> {
    let (candidate, _) = link.split_once(':')?;
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(candidate)
}

/// Check whether a link points inside the site (no scheme, or `file:`).
pub fn is_internal_link(link: &str) -> bool {
    match url_scheme(link) {
        None => true,
        Some(scheme) => scheme.eq_ignore_ascii_case("file"),
    }
}

/// Resolves internal links for one content tree.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    content_root: PathBuf,
    hugo_root: PathBuf,
    check_static: bool,
    ignore: Vec<glob::Pattern>,
}

impl LinkResolver {
    /// Create a resolver for `content_root` inside the project at `hugo_root`.
    pub fn new(content_root: impl Into<PathBuf>, hugo_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            hugo_root: hugo_root.into(),
            check_static: false,
            ignore: Vec::new(),
        }
    }

    /// Verify site-absolute asset links instead of accepting them.
    pub fn with_check_static(mut self, check_static: bool) -> Self {
        self.check_static = check_static;
        self
    }

    /// Skip links matching any of the given patterns.
    pub fn with_ignore(mut self, patterns: Vec<glob::Pattern>) -> Self {
        self.ignore = patterns;
        self
    }

    /// The content directory this resolver checks against.
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Check whether the target of an internal link exists.
    ///
    /// `source` is the Markdown file containing the link. Links that cannot
    /// be checked statically (anchors, external URLs, shortcodes, ignored
    /// patterns) are reported as valid.
    pub fn check(&self, link: &str, source: &Path) -> bool {
        if link.starts_with('#') {
            return true;
        }

        if self.ignore.iter().any(|pattern| pattern.matches(link)) {
            tracing::debug!("Ignoring link {} by pattern", link);
            return true;
        }

        let without_anchor = link.split('#').next().unwrap_or_default();
        if without_anchor.is_empty() {
            return true;
        }

        // Shortcodes such as {{< ref "page" >}} are resolved by Hugo itself.
        if without_anchor.contains("{{") {
            return true;
        }

        if !is_internal_link(without_anchor) {
            return true;
        }

        let without_query = without_anchor.split('?').next().unwrap_or_default();
        if without_query.is_empty() {
            return true;
        }

        if url_scheme(without_query).is_some() {
            return self.check_file_url(without_query, source);
        }

        let path = if without_query.len() > 1 {
            without_query.trim_end_matches('/')
        } else {
            without_query
        };
        // A run of slashes collapses to the site root.
        let path = if path.is_empty() { "/" } else { path };

        if path.starts_with('/') {
            self.check_site_absolute(path)
        } else {
            check_relative(path, source)
        }
    }

    fn check_site_absolute(&self, path: &str) -> bool {
        let path_part = path.trim_start_matches('/');

        if has_extension(Path::new(path_part)) {
            if !self.check_static {
                return true;
            }
            return self.hugo_root.join("static").join(path_part).exists()
                || self.content_root.join(path_part).exists();
        }

        let dir = self.content_root.join(path_part);
        dir.join("index.md").exists() || dir.join("_index.md").exists()
    }

    fn check_file_url(&self, link: &str, source: &Path) -> bool {
        let raw = link
            .strip_prefix("file://")
            .or_else(|| link.strip_prefix("file:"))
            .unwrap_or(link);
        let target = Path::new(raw);
        if target.is_absolute() {
            target.exists()
        } else {
            source_dir(source).join(target).exists()
        }
    }
}

fn check_relative(path: &str, source: &Path) -> bool {
    let rel = Path::new(path);
    let candidate = source_dir(source).join(rel);

    if has_extension(rel) {
        candidate.exists()
    } else {
        candidate.join("index.md").exists()
    }
}

fn source_dir(source: &Path) -> &Path {
    source.parent().unwrap_or_else(|| Path::new("."))
}

fn has_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| !ext.is_empty())
}
