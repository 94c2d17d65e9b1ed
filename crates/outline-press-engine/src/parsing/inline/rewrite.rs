//! Line-level rewrites built on [`parse_inline`].

use super::{parse_inline, types::InlineNode};

/// Returns the line with every code span removed.
///
/// Used to decide whether a marker token is really present: a token quoted
/// inside backticks is documentation, not a publish marker.
pub fn text_outside_code(line: &str) -> String {
    parse_inline(line)
        .iter()
        .filter(|node| !matches!(node, InlineNode::CodeSpan { .. }))
        .map(|node| node.span().slice(line))
        .collect()
}

/// Normalises wiki links so they resolve on the published site.
///
/// Inside every `[[...]]` outside code spans, quote characters are removed
/// and `|`, `｜` and spaces become `-`.
pub fn sanitize_links(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for node in parse_inline(line) {
        match node {
            InlineNode::WikiLink { target, .. } => {
                out.push_str("[[");
                out.push_str(&clean_link_target(target.slice(line)));
                out.push_str("]]");
            }
            other => out.push_str(other.span().slice(line)),
        }
    }
    out
}

fn clean_link_target(inner: &str) -> String {
    inner
        .chars()
        .filter(|c| !matches!(c, '"' | '\''))
        .collect::<String>()
        .trim()
        .chars()
        .map(|c| match c {
            '|' | '｜' | ' ' => '-',
            c => c,
        })
        .collect()
}
