use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, WikiLink},
    types::InlineNode,
};

/// Parses one line of inline content into a sequence of [`InlineNode`]s.
///
/// # Raw Zone Precedence
/// Code spans are checked first and suppress all other parsing inside them.
/// `[[link]]` inside backticks is parsed as a code span, not a wikilink.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        // Try constructs in precedence order (code spans first = raw zone)
        if let Some(node) = try_parse_code_span(&mut cur) {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_wikilink(&mut cur) {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        // An unmatched backtick run is literal as a whole.
        match cur.run_len(CodeSpan::TICK) {
            0 => {
                cur.bump();
            }
            n => cur.bump_n(n),
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if no closing run of the same
/// length follows. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let open_len = cur.run_len(CodeSpan::TICK);
    if open_len == 0 {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(open_len);
    let inner_start = cur.pos();

    while !cur.eof() {
        let run = cur.run_len(CodeSpan::TICK);
        if run == open_len {
            let inner_end = cur.pos();
            cur.bump_n(run);
            return Some(InlineNode::CodeSpan {
                full: Span {
                    start,
                    end: cur.pos(),
                },
                inner: Span {
                    start: inner_start,
                    end: inner_end,
                },
            });
        }
        if run > 0 {
            cur.bump_n(run);
        } else {
            cur.bump();
        }
    }

    *cur = saved;
    None
}

/// Attempts to parse a wikilink starting at the current position.
///
/// The target is everything between the brackets, so `[[page|label]]`
/// has the target `page|label`.
/// Returns `None` if not at `[[` or if the wikilink isn't closed.
/// On failure, cursor position is restored.
fn try_parse_wikilink(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(WikiLink::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(WikiLink::OPEN.len());
    let target_start = cur.pos();

    while !cur.eof() && !cur.starts_with(WikiLink::CLOSE) {
        cur.bump();
    }
    let target_end = cur.pos();

    if !cur.starts_with(WikiLink::CLOSE) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump_n(WikiLink::CLOSE.len());
    let end = cur.pos();

    Some(InlineNode::WikiLink {
        full: Span { start, end },
        target: Span {
            start: target_start,
            end: target_end,
        },
    })
}
