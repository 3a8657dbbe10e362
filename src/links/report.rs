// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Broken link report output.

use console::style;
use serde_json::json;
use std::fmt::Write as _;
use std::path::Path;

use super::scan::BrokenLinkReport;

/// Header printed before a scan starts.
pub fn scan_header(content_dir: &Path) -> String {
    format!("Scanning for broken links in {}...", content_dir.display())
}

/// Render the report as human-readable text.
pub fn render_text(report: &BrokenLinkReport) -> String {
    let mut out = String::new();

    if report.is_clean() {
        let _ = writeln!(out, "{}", style("✓ No broken links found!").green());
        return out;
    }

    let _ = writeln!(
        out,
        "{}",
        style(format!(
            "\n✗ Found broken links in {} file(s):\n",
            report.files.len()
        ))
        .red()
    );

    for file in &report.files {
        let _ = writeln!(out, "{}", style(format!("{}:", file.path)).yellow());
        for link in &file.links {
            let _ = writeln!(out, "  - {}", link);
        }
        out.push('\n');
    }

    out
}

/// Render the report as a JSON document.
pub fn render_json(report: &BrokenLinkReport, content_dir: &Path) -> String {
    let value = json!({
        "content_dir": content_dir.display().to_string(),
        "files_scanned": report.files_scanned,
        "broken_link_count": report.broken_link_count(),
        "files": report.files,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}
