use crate::parsing::span::Span;

/// A parsed inline node with byte spans into its line.
#[derive(Debug, Clone)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a raw zone - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// A wiki-style link `[[target]]`.
    WikiLink {
        /// Full span including `[[` and `]]`.
        full: Span,
        /// Span between the brackets.
        target: Span,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } => *full,
            InlineNode::WikiLink { full, .. } => *full,
        }
    }
}
