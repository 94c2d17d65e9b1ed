//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`WikiLink`**: `OPEN = b"[["`, `CLOSE = b"]]"`
//!
//! The parser calls these constants; it never hardcodes `[[` or `` ` ``.

pub mod code_span;
pub mod wikilink;

pub use code_span::CodeSpan;
pub use wikilink::WikiLink;
