// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Link extraction from Markdown content.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Inline Markdown links: `[text](destination)`.
    static ref MARKDOWN_LINK_REGEX: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();

    /// HTML anchors: `<a ... href="destination">`.
    static ref HTML_LINK_REGEX: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?\s+)?href="([^"]*)""#).unwrap();
}

/// Extract all link destinations from Markdown content.
///
/// Markdown links come first in document order, followed by HTML anchors.
/// Empty destinations are dropped.
pub fn extract_links(content: &str) -> Vec<String> {
    let markdown = MARKDOWN_LINK_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(2))
        .map(|m| normalize_destination(m.as_str()));

    let html = HTML_LINK_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    markdown.chain(html).filter(|link| !link.is_empty()).collect()
}

/// Reduce a Markdown link destination to the bare URL.
///
/// Drops an optional link title and unwraps `<...>` destinations.
fn normalize_destination(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Some(rest) = trimmed.strip_prefix('<') {
        if let Some(end) = rest.find('>') {
            return rest[..end].to_string();
        }
    }

    trimmed
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}
