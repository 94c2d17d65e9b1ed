//! Whole-file mode: a document with a `---` delimited header and no marker blocks.

use serde_yaml_ng::Value;
use thiserror::Error;

use crate::models::{Article, Properties, SourceFile};

use super::blocks::PropertyBlock;

pub const DELIMITER: &str = "---";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("document does not start with a `---` line")]
    Missing,
    #[error("header is never closed by a `---` line")]
    Unterminated,
    #[error("malformed header at line {line}: {message}")]
    MalformedLine { line: usize, message: String },
    #[error("header is not a `key: value` mapping")]
    NotAMapping,
    #[error("header declares no properties")]
    Empty,
}

/// Whether the document opens with a header delimiter line.
pub fn has_header(text: &str) -> bool {
    text.lines().next().is_some_and(|l| l.trim_end() == DELIMITER)
}

/// Parses a whole file into one article.
///
/// The header between the delimiters becomes the properties; everything
/// after the closing delimiter, trimmed, becomes the body. `title` falls
/// back to the file stem.
pub fn parse_whole_file(text: &str, source_file: &str) -> Result<Article, HeaderError> {
    let mut segments = text.split_inclusive('\n');
    let first = segments.next().ok_or(HeaderError::Missing)?;
    if first.trim_end() != DELIMITER {
        return Err(HeaderError::Missing);
    }

    let mut offset = first.len();
    let mut header = Vec::new();
    let mut body_start = None;
    for segment in segments {
        offset += segment.len();
        if segment.trim_end() == DELIMITER {
            body_start = Some(offset);
            break;
        }
        header.push(segment.trim_end_matches(['\r', '\n']));
    }
    let body_start = body_start.ok_or(HeaderError::Unterminated)?;

    let properties = parse_header(&header)?;
    if properties.is_empty() {
        return Err(HeaderError::Empty);
    }

    let title = match properties.get("title") {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => SourceFile::from(source_file).stem().to_string(),
    };
    let body = text[body_start..].trim();

    Ok(Article::whole_file(title, properties, body, source_file))
}

/// Reads the header as YAML after rewriting outline `key:: value` lines to `key: value`.
///
/// Scalars become strings, sequences are joined with `, ` and nested
/// mappings keep their YAML text.
fn parse_header(lines: &[&str]) -> Result<Properties, HeaderError> {
    let yaml = lines
        .iter()
        .map(|line| {
            if PropertyBlock::is_declaration(line) {
                line.replacen("::", ":", 1)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    if yaml.trim().is_empty() {
        return Ok(Properties::new());
    }

    let value: Value = serde_yaml_ng::from_str(&yaml).map_err(|e| HeaderError::MalformedLine {
        // header starts on the second line of the file
        line: e.location().map_or(2, |l| l.line() + 1),
        message: e.to_string(),
    })?;

    match value {
        Value::Null => Ok(Properties::new()),
        Value::Mapping(mapping) => Ok(mapping
            .iter()
            .map(|(key, value)| {
                let key = key.as_str().map_or_else(|| property_value(key), str::to_string);
                (key, property_value(value))
            })
            .collect()),
        _ => Err(HeaderError::NotAMapping),
    }
}

fn property_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => items
            .iter()
            .map(property_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Tagged(tagged) => property_value(&tagged.value),
        Value::Mapping(_) => serde_yaml_ng::to_string(value)
            .map(|yaml| yaml.trim_end().to_string())
            .unwrap_or_default(),
    }
}
