//! # Inline Parsing
//!
//! Cursor-based inline parsing of a single outline line with explicit raw zones.
//!
//! The block walker only needs two inline facts: whether a marker token sits
//! outside code spans, and where wiki links are so they can be sanitised.
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, WikiLink)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, WikiLink)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//! - **`rewrite`**: line rewrites built on the node list
//!
//! Code spans take precedence: `` `[[not a link]]` `` parses as a single CodeSpan,
//! not as text containing a WikiLink.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rewrite;
pub mod types;

pub use parser::parse_inline;
pub use rewrite::{sanitize_links, text_outside_code};
pub use types::InlineNode;
