// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Approximate text layout for centred SVG text.

/// Average glyph width as a fraction of the font size.
const AVG_CHAR_WIDTH_RATIO: f64 = 0.55;

/// Lower bound on the characters allowed per line.
const MIN_LINE_CHARS: usize = 8;

/// Number of characters that fit on one line.
pub fn max_line_chars(font_size: u32, width: u32, margin: u32) -> usize {
    let avg_char_width = f64::from(font_size) * AVG_CHAR_WIDTH_RATIO;
    let available = f64::from(width) - 2.0 * f64::from(margin);
    let fitted = (available / avg_char_width) as i64;
    usize::try_from(fitted).unwrap_or(0).max(MIN_LINE_CHARS)
}

/// Greedily wrap `text` into lines that fit the drawable width.
///
/// Words are never split; a word longer than the budget gets its own line.
pub fn wrap_by_width(text: &str, font_size: u32, width: u32, margin: u32) -> Vec<String> {
    let max_chars = max_line_chars(font_size, width, margin);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let added = if current.is_empty() { word_len } else { word_len + 1 };

        if current_len + added <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len += added;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
