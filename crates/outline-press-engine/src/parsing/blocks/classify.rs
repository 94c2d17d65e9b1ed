use super::{
    indent,
    kinds::{CodeFence, PropertyBlock},
};

/// Bullet prefix of an outline line.
pub const BULLET: &str = "- ";

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block extraction: each line is classified independently
/// without reference to fences, blocks, or property sub-blocks around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The line as it appears in the document (no line terminator).
    pub raw: &'a str,
    /// Leading whitespace.
    pub indent: &'a str,
    /// Leading whitespace length in characters.
    pub indent_width: usize,
    /// Whether the text after the indentation starts with `- `.
    pub has_bullet: bool,
    /// Text after the indentation and bullet.
    pub content: &'a str,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Whether the content starts with a triple-backtick run.
    pub is_fence_delimiter: bool,
    /// Whether the content is a `key:: value` declaration.
    pub is_property_line: bool,
}

/// Classifies individual outline lines.
pub struct OutlineLineClassifier;

impl OutlineLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (lead, rest) = indent::split_indent(line);
        let (has_bullet, content) = match rest.strip_prefix(BULLET) {
            Some(content) => (true, content),
            None => (false, rest),
        };

        LineClass {
            raw: line,
            indent: lead,
            indent_width: indent::width(lead),
            has_bullet,
            content,
            is_blank: rest.is_empty(),
            is_fence_delimiter: CodeFence::is_delimiter(content),
            is_property_line: PropertyBlock::is_declaration(content),
        }
    }
}
