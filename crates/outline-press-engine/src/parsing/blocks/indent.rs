//! Indentation measurement.
//!
//! Outline documents mix literal tabs with runs of spaces, so a line's depth
//! is measured twice: the raw leading-whitespace character count (used for
//! boundary comparisons) and a nesting level relative to an anchor line.

/// Splits a line into its leading whitespace and the rest.
pub fn split_indent(line: &str) -> (&str, &str) {
    let rest = line.trim_start();
    line.split_at(line.len() - rest.len())
}

/// Number of whitespace characters in a line's indentation.
pub fn width(indent: &str) -> usize {
    indent.chars().count()
}

/// Nesting level of `indent` relative to an anchor `anchor_width` characters wide.
///
/// Counts the tabs beyond the anchor's width; when there are none, falls
/// back to pairs of spaces.
pub fn relative_level(indent: &str, anchor_width: usize) -> usize {
    let total = width(indent);
    let beyond: String = indent.chars().skip(anchor_width).collect();
    match beyond.matches('\t').count() {
        0 => total.saturating_sub(anchor_width) / 2,
        tabs => tabs,
    }
}
