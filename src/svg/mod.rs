// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Social preview images for Hugo page bundles.
//!
//! Each `index.md` / `_index.md` with front matter gets a
//! `<dir>-image.svg` next to it, showing the page title and description.

mod frontmatter;
mod generate;
mod layout;
mod render;

pub use frontmatter::{parse_frontmatter, read_frontmatter, Frontmatter};
pub use generate::{
    generate_all, generate_for, output_path, page_files, relative_display, GenerationSummary,
    PageOutcome, SummaryReport,
};
pub use layout::{max_line_chars, wrap_by_width};
pub use render::{escape_attr, escape_text, make_svg, SvgStyle};
