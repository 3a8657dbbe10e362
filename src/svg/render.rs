// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! SVG document rendering.

use crate::config::SvgConfig;

use super::layout::wrap_by_width;

const MARGIN: u32 = 80;
const TITLE_SIZE: u32 = 52;
const DESC_SIZE: u32 = 30;
/// floor(52 * 1.25)
const TITLE_LINE_HEIGHT: i64 = 65;
/// floor(30 * 1.45)
const DESC_LINE_HEIGHT: i64 = 43;
/// Vertical space between title and description blocks.
const GAP: i64 = 28;
const FONT_FAMILY: &str = "-apple-system,system-ui,Segoe UI,Roboto,Helvetica,Arial,sans-serif";

/// Canvas size and colours of a preview image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgStyle {
    pub width: u32,
    pub height: u32,
    pub bg: String,
    pub fg: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        SvgConfig::default().into()
    }
}

impl From<SvgConfig> for SvgStyle {
    fn from(config: SvgConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            bg: config.bg,
            fg: config.fg,
        }
    }
}

/// Render a preview image with a centred title and description.
pub fn make_svg(title: &str, description: &str, style: &SvgStyle) -> String {
    let width = style.width;
    let height = style.height;
    let cx = width / 2;

    let title_lines = wrap_by_width(title, TITLE_SIZE, width, MARGIN);
    let desc_lines = wrap_by_width(description, DESC_SIZE, width, MARGIN);

    let gap = if desc_lines.is_empty() { 0 } else { GAP };
    let title_block = title_lines.len() as i64 * TITLE_LINE_HEIGHT;
    let block_h = title_block + gap + desc_lines.len() as i64 * DESC_LINE_HEIGHT;
    let start_y = ((i64::from(height) - block_h) as f64 / 2.0 + f64::from(TITLE_SIZE)) as i64;
    let y_desc = start_y + title_block + gap;

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" preserveAspectRatio="xMidYMid meet">
  <rect width="100%" height="100%" fill="{bg}"/>
  <g font-family="{FONT_FAMILY}" fill="{fg}">
    <text y="{start_y}" text-anchor="middle" font-size="{TITLE_SIZE}" font-weight="700" xml:space="preserve">
        {title_spans}
    </text>
    <text y="{y_desc}" text-anchor="middle" font-size="{DESC_SIZE}" xml:space="preserve">
        {desc_spans}
    </text>
  </g>
</svg>"#,
        bg = escape_attr(&style.bg),
        fg = escape_attr(&style.fg),
        title_spans = tspans_center(&title_lines, TITLE_LINE_HEIGHT, cx),
        desc_spans = tspans_center(&desc_lines, DESC_LINE_HEIGHT, cx),
    )
}

/// One `<tspan>` per line, each advancing by `line_height` after the first.
fn tspans_center(lines: &[String], line_height: i64, cx: u32) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let dy = if i == 0 { 0 } else { line_height };
            format!(r#"<tspan x="{}" dy="{}">{}</tspan>"#, cx, dy, escape_text(line))
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

/// Escape character data.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    escape_text(text)
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
