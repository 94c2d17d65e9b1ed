use std::sync::OnceLock;

use regex::Regex;

use crate::models::Properties;
use crate::parsing::blocks::classify::LineClass;

/// Property sub-block: a reserved child bullet whose descendants are
/// `key: value` pairs rather than article content.
pub struct PropertyBlock;

impl PropertyBlock {
    /// Whether `content` is an outline property declaration (`key:: value`).
    pub fn is_declaration(content: &str) -> bool {
        static DECLARATION_REGEX: OnceLock<Regex> = OnceLock::new();
        let declaration_regex = DECLARATION_REGEX.get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9_.\-]+::(\s|$)").expect("Invalid property regex")
        });
        declaration_regex.is_match(content.trim_start())
    }

    /// Whether `content` opens a property sub-block labelled `label`
    /// (case-insensitive prefix match).
    pub fn opens(content: &str, label: &str) -> bool {
        !label.is_empty()
            && content
                .trim()
                .to_lowercase()
                .starts_with(&label.to_lowercase())
    }

    /// Splits `key: value` (or `key:: value`) once, trimming both sides.
    pub fn split_pair(text: &str) -> Option<(&str, &str)> {
        let (key, value) = text.split_once(':')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        let value = value.trim();
        let value = value.strip_prefix(':').map_or(value, str::trim);
        Some((key, value))
    }

    /// Consumes the lines below the opener at `lines[opener]` that are indented
    /// deeper than it, storing every `key: value` pair into `properties`.
    ///
    /// Stops early when `is_end` matches a line of the sub-block.
    pub fn extract(
        lines: &[LineClass<'_>],
        opener: usize,
        properties: &mut Properties,
        is_end: impl Fn(&LineClass<'_>) -> bool,
    ) -> Extraction {
        let own_width = lines[opener].indent_width;
        let mut next = opener + 1;
        while let Some(line) = lines.get(next) {
            if is_end(line) {
                return Extraction::EndOfDocument;
            }
            if line.is_blank {
                next += 1;
                continue;
            }
            if line.indent_width <= own_width {
                break;
            }
            if let Some((key, value)) = Self::split_pair(line.content.trim()) {
                properties.insert(key, value);
            }
            next += 1;
        }
        Extraction::Resume(next)
    }
}

/// How a property sub-block ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Index of the first line after the sub-block.
    Resume(usize),
    /// The end-of-document token appeared inside the sub-block.
    EndOfDocument,
}
