// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Scanning a content tree for broken links.

use crate::error::{HuError, LinkError, Result};
use indicatif::ProgressBar;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::extract::extract_links;
use super::resolve::{is_internal_link, LinkResolver};

/// Broken links found in a single Markdown file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileLinks {
    /// Path of the Markdown file, relative to the project root when possible.
    pub path: String,
    /// Broken link targets, in document order.
    pub links: Vec<String>,
}

/// Result of scanning a content tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BrokenLinkReport {
    /// Number of Markdown files that were read.
    pub files_scanned: usize,
    /// Files with at least one broken link, in path order.
    pub files: Vec<FileLinks>,
}

impl BrokenLinkReport {
    /// Whether no broken links were found.
    pub fn is_clean(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of broken links across all files.
    pub fn broken_link_count(&self) -> usize {
        self.files.iter().map(|f| f.links.len()).sum()
    }

    /// Convert a non-empty report into the error the command exits with.
    pub fn into_result(self) -> Result<()> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(HuError::Link(LinkError::BrokenLinks {
                files: self.files.len(),
                links: self.broken_link_count(),
            }))
        }
    }
}

/// Collect every Markdown file under `content_dir`, sorted by path.
///
/// Symlinked files are included; symlinked directories are not descended.
pub fn markdown_files(content_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(content_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"))
        .map(|entry| entry.into_path())
        .collect()
}

/// Find all broken internal links under the resolver's content root.
///
/// File paths in the report are shown relative to `hugo_root`, or in full
/// when the file lies outside it.
pub fn find_broken_links(
    resolver: &LinkResolver,
    hugo_root: &Path,
    progress: &ProgressBar,
) -> Result<BrokenLinkReport> {
    let files = markdown_files(resolver.content_root());
    tracing::debug!("Found {} markdown file(s)", files.len());

    progress.set_length(files.len() as u64);

    let mut report = BrokenLinkReport::default();

    for md_file in files {
        let rel = md_file.strip_prefix(hugo_root).unwrap_or(&md_file);
        progress.set_message(rel.display().to_string());

        let content = std::fs::read_to_string(&md_file).map_err(|e| {
            HuError::Link(LinkError::ReadFailed {
                path: md_file.clone(),
                message: e.to_string(),
            })
        })?;
        report.files_scanned += 1;

        let broken: Vec<String> = extract_links(&content)
            .into_iter()
            .filter(|link| is_internal_link(link) && !resolver.check(link, &md_file))
            .collect();

        if !broken.is_empty() {
            tracing::debug!("{} broken link(s) in {:?}", broken.len(), rel);
            report.files.push(FileLinks {
                path: rel.to_string_lossy().into_owned(),
                links: broken,
            });
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn scan(root: &Path) -> BrokenLinkReport {
        let resolver = LinkResolver::new(root.join("content"), root);
        find_broken_links(&resolver, root, &ProgressBar::hidden()).unwrap()
    }

    #[test]
    fn test_clean_site() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "content/_index.md", "[about](/about/)");
        write(root, "content/about/index.md", "[home](/) [gohugo](https://gohugo.io)");

        let report = scan(root);
        assert!(report.is_clean());
        assert_eq!(report.files_scanned, 2);
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_broken_links_grouped_by_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "content/about/index.md", "# About");
        write(
            root,
            "content/blog/post/index.md",
            r#"[ok](/about) [gone](/blog/gone) <a href="/also-gone">x</a> [mail](mailto:a@b.c)"#,
        );
        write(root, "content/blog/other/index.md", "[bad](../nope)");

        let report = scan(root);
        assert_eq!(report.files_scanned, 3);
        assert_eq!(
            report.files,
            vec![
                FileLinks {
                    path: "content/blog/other/index.md".to_string(),
                    links: vec!["../nope".to_string()],
                },
                FileLinks {
                    path: "content/blog/post/index.md".to_string(),
                    links: vec!["/blog/gone".to_string(), "/also-gone".to_string()],
                },
            ]
        );
        assert_eq!(report.broken_link_count(), 3);

        let err = report.into_result().unwrap_err();
        assert!(err.to_string().contains("3 broken link(s) in 2 file(s)"));
    }

    #[test]
    fn test_only_markdown_files_scanned() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "content/notes.txt", "[x](/missing)");
        write(root, "content/page.md", "no links");

        let files = markdown_files(&root.join("content"));
        assert_eq!(files, vec![root.join("content/page.md")]);
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("content")).unwrap();
        fs::write(root.join("content/bad.md"), [0xff, 0xfe, 0x00]).unwrap();

        let resolver = LinkResolver::new(root.join("content"), root);
        let err = find_broken_links(&resolver, root, &ProgressBar::hidden()).unwrap_err();
        assert!(matches!(err, HuError::Link(LinkError::ReadFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_page_is_scanned() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "shared/page.md", "[gone](/nowhere)");
        fs::create_dir_all(root.join("content")).unwrap();
        std::os::unix::fs::symlink(root.join("shared/page.md"), root.join("content/linked.md"))
            .unwrap();

        assert_eq!(markdown_files(&root.join("content")), vec![root.join("content/linked.md")]);

        let report = scan(root);
        assert_eq!(report.files_scanned, 1);
        assert_eq!(
            report.files,
            vec![FileLinks {
                path: "content/linked.md".to_string(),
                links: vec!["/nowhere".to_string()],
            }]
        );
    }

    #[test]
    fn test_content_outside_root_uses_full_path() {
        let site = TempDir::new().unwrap();
        let external = TempDir::new().unwrap();
        let content = external.path().join("content");
        write(external.path(), "content/post.md", "[gone](/nowhere)");

        let resolver = LinkResolver::new(content.clone(), site.path());
        let report = find_broken_links(&resolver, site.path(), &ProgressBar::hidden()).unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(
            report.files[0].path,
            content.join("post.md").to_string_lossy().into_owned()
        );
        assert!(Path::new(&report.files[0].path).is_absolute());
    }
}
