// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Preview image generation for page bundles.

use crate::error::{HuError, Result, SvgError};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::frontmatter::read_frontmatter;
use super::render::{make_svg, SvgStyle};

/// Page files that own a bundle directory.
const PAGE_FILES: &[&str] = &["index.md", "_index.md"];

/// Outcome for a single page file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    /// The Markdown file that was read.
    pub source: PathBuf,
    /// The image that was (or would be) written; `None` when skipped.
    pub output: Option<PathBuf>,
}

/// Result of a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    /// Per-page outcomes in path order.
    pub pages: Vec<PageOutcome>,
    /// Whether files were left untouched.
    pub dry_run: bool,
}

impl GenerationSummary {
    /// Number of images written.
    pub fn written(&self) -> usize {
        self.pages.iter().filter(|p| p.output.is_some()).count()
    }
}

/// JSON view of a summary with paths relative to the content directory.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub content_dir: String,
    pub written: Vec<String>,
    pub skipped: Vec<String>,
    pub dry_run: bool,
}

impl SummaryReport {
    pub fn new(summary: &GenerationSummary, content_dir: &Path) -> Self {
        let rel = |p: &Path| relative_display(p, content_dir);
        Self {
            content_dir: content_dir.display().to_string(),
            written: summary
                .pages
                .iter()
                .filter_map(|p| p.output.as_deref().map(rel))
                .collect(),
            skipped: summary
                .pages
                .iter()
                .filter(|p| p.output.is_none())
                .map(|p| rel(p.source.as_path()))
                .collect(),
            dry_run: summary.dry_run,
        }
    }
}

/// Display `path` relative to `base` when it lies inside it.
pub fn relative_display(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Find every `index.md` and `_index.md` under `content_dir`, sorted.
pub fn page_files(content_dir: &Path) -> Vec<PathBuf> {
    let pages: BTreeSet<PathBuf> = WalkDir::new(content_dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| PAGE_FILES.contains(&name))
        })
        .map(|entry| entry.into_path())
        .collect();

    pages.into_iter().collect()
}

/// Output path for a bundle directory: `<dir>/<dir name>-image.svg`.
pub fn output_path(page_dir: &Path) -> PathBuf {
    let name = page_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    page_dir.join(format!("{}-image.svg", name))
}

/// Generate the preview image for one page file.
///
/// Returns the output path, or `None` when the page has no front matter.
pub fn generate_for(md: &Path, style: &SvgStyle, dry_run: bool) -> Result<Option<PathBuf>> {
    let frontmatter = read_frontmatter(md);
    if frontmatter.is_empty() {
        tracing::debug!("No front matter in {:?}", md);
        return Ok(None);
    }

    let page_dir = md.parent().unwrap_or_else(|| Path::new("."));
    let out_path = output_path(page_dir);
    let svg = make_svg(frontmatter.title(), frontmatter.description(), style);

    if dry_run {
        tracing::debug!("Dry run, not writing {:?}", out_path);
    } else {
        std::fs::write(&out_path, svg).map_err(|e| {
            HuError::Svg(SvgError::WriteFailed {
                path: out_path.clone(),
                message: e.to_string(),
            })
        })?;
    }

    Ok(Some(out_path))
}

/// Generate preview images for every page bundle under `content_dir`.
pub fn generate_all(
    content_dir: &Path,
    style: &SvgStyle,
    dry_run: bool,
) -> Result<GenerationSummary> {
    if style.width == 0 || style.height == 0 {
        return Err(HuError::Svg(SvgError::InvalidDimensions {
            width: style.width,
            height: style.height,
        }));
    }

    let mut summary = GenerationSummary {
        pages: Vec::new(),
        dry_run,
    };

    for source in page_files(content_dir) {
        let output = generate_for(&source, style, dry_run)?;
        summary.pages.push(PageOutcome { source, output });
    }

    Ok(summary)
}
