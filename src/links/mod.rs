// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Broken link detection for Hugo Markdown content.
//!
//! Links are pulled out of every Markdown file in the content tree and
//! internal ones are resolved against Hugo's page bundle layout.

mod extract;
mod report;
mod resolve;
mod scan;

pub use extract::extract_links;
pub use report::{render_json, render_text, scan_header};
pub use resolve::{is_internal_link, url_scheme, LinkResolver};
pub use scan::{find_broken_links, markdown_files, BrokenLinkReport, FileLinks};
