// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Front matter parsing for Hugo Markdown files.
//!
//! Supports YAML (`---`) and TOML (`+++`) blocks. Only scalar values are
//! kept; everything else is recorded as an empty string so that the key is
//! still visible.

use std::collections::BTreeMap;
use std::path::Path;

/// Keys recovered by the line-based fallback when YAML parsing fails.
const FALLBACK_KEYS: &[&str] = &["title", "seoTitle", "description", "summary", "layout"];

/// Scalar front matter values keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    values: BTreeMap<String, String>,
}

impl Frontmatter {
    /// Whether the file had no front matter keys at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The trimmed page title, or an empty string.
    pub fn title(&self) -> &str {
        self.get("title").unwrap_or_default().trim()
    }

    /// The trimmed description, falling back to the summary when empty.
    pub fn description(&self) -> &str {
        let primary = self.get("description").unwrap_or_default().trim();
        if primary.is_empty() {
            self.get("summary").unwrap_or_default().trim()
        } else {
            primary
        }
    }
}

impl FromIterator<(String, String)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Read front matter from a Markdown file.
///
/// Unreadable files yield empty front matter.
pub fn read_frontmatter(path: &Path) -> Frontmatter {
    match std::fs::read_to_string(path) {
        Ok(text) => parse_frontmatter(&text),
        Err(e) => {
            tracing::debug!("Cannot read {:?}: {}", path, e);
            Frontmatter::default()
        }
    }
}

/// Parse the front matter at the top of a Markdown document.
pub fn parse_frontmatter(text: &str) -> Frontmatter {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text).trim_start();

    if let Some(block) = delimited_block(text, "---") {
        return parse_yaml(block);
    }
    if let Some(block) = delimited_block(text, "+++") {
        return parse_toml(block);
    }

    Frontmatter::default()
}

/// Return the text between an opening delimiter line and the next line
/// consisting solely of the same delimiter.
fn delimited_block<'a>(text: &'a str, delimiter: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(delimiter)?;
    let (opening, body) = rest.split_once('\n')?;
    if !opening.trim().is_empty() {
        return None;
    }

    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if line.trim_end() == delimiter {
            return Some(&body[..offset]);
        }
        offset += line.len();
    }

    None
}

fn parse_yaml(block: &str) -> Frontmatter {
    match serde_yaml::from_str::<serde_yaml::Value>(block) {
        Ok(serde_yaml::Value::Mapping(mapping)) => mapping
            .into_iter()
            .filter_map(|(key, value)| {
                let key = yaml_scalar(&key)?;
                Some((key, yaml_scalar(&value).unwrap_or_default()))
            })
            .collect(),
        Ok(serde_yaml::Value::Null) => Frontmatter::default(),
        Ok(_) => parse_fallback(block),
        Err(e) => {
            tracing::debug!("Invalid YAML front matter, using line parser: {}", e);
            parse_fallback(block)
        }
    }
}

fn yaml_scalar(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_toml(block: &str) -> Frontmatter {
    match toml::from_str::<toml::Table>(block) {
        Ok(table) => table
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    toml::Value::Datetime(d) => d.to_string(),
                    toml::Value::Array(_) | toml::Value::Table(_) => String::new(),
                };
                (key, value)
            })
            .collect(),
        Err(e) => {
            tracing::debug!("Invalid TOML front matter: {}", e);
            Frontmatter::default()
        }
    }
}

/// Line-based `key: value` parse of the well-known keys.
fn parse_fallback(block: &str) -> Frontmatter {
    block
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim(), strip_quotes(value.trim())))
        .filter(|(key, _)| FALLBACK_KEYS.contains(key))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"').trim_matches('\'')
}
