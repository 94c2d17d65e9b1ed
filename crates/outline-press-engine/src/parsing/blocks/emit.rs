//! Re-indentation of block descendants into a flat two-space outline.
//!
//! Level 0 is the marker line itself and is never emitted. Level 1 (the
//! marker's direct children) is promoted to the top, so a line at level `L`
//! is indented by `2 * (L - 1)` spaces.

use super::{
    classify::{BULLET, LineClass},
    kinds::CodeFence,
};

/// One output indentation step.
pub const INDENT_UNIT: &str = "  ";

/// Continuation prefix: aligns a line with the text of the bullet above it.
const CONTINUATION: &str = "  ";

pub fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level.saturating_sub(1))
}

/// A heading is one or more `#` followed by whitespace.
pub fn is_heading(content: &str) -> bool {
    let t = content.trim_start();
    let hashes = t.bytes().take_while(|&b| b == b'#').count();
    hashes > 0 && t[hashes..].starts_with(char::is_whitespace)
}

/// Emits an ordinary outline line.
///
/// Bulleted lines and headings become list items; anything else becomes a
/// continuation of the item above.
pub fn outline_line(level: usize, has_bullet: bool, content: &str) -> String {
    let prefix = if has_bullet || is_heading(content) {
        BULLET
    } else {
        CONTINUATION
    };
    format!("{}{prefix}{content}", indent(level))
}

/// Emits the line that opens a fenced region, language tag lowercased.
pub fn fence_opener(level: usize, line: &LineClass<'_>) -> String {
    let prefix = if line.has_bullet { BULLET } else { CONTINUATION };
    format!(
        "{}{prefix}{}",
        indent(level),
        CodeFence::normalize_opener(line.content)
    )
}

/// Emits one line of code inside a fence, already stripped of the fence baseline.
pub fn fence_line(level: usize, code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    format!("{}{CONTINUATION}{code}", indent(level))
}

pub fn fence_closer(level: usize) -> String {
    format!("{}{CONTINUATION}{}", indent(level), CodeFence::BACKTICKS)
}
