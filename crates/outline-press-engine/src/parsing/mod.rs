//! # Article Extraction
//!
//! Turns the text of one outline document into [`Article`]s.
//!
//! - **Block mode** (`blocks`): every bullet carrying the marker token opens
//!   an article made of its descendants, re-indented into a flat outline.
//! - **Whole-file mode** (`whole_file`): when enabled and no marker block is
//!   found, a document starting with a `---` header becomes one article.
//!
//! Parsing never fails. Malformed indentation truncates a block; a malformed
//! whole-file header yields no article and a warning.

pub mod blocks;
pub mod inline;
pub mod options;
pub mod span;
pub mod whole_file;

#[cfg(test)]
mod tests;

use crate::models::Article;

use blocks::BlockWalker;
pub use options::ParseOptions;

/// Parses a document with the given marker and end-of-document tokens.
///
/// Whole-file mode is enabled; an empty `end_token` disables it.
pub fn parse_document(text: &str, marker_token: &str, end_token: &str) -> Vec<Article> {
    let options = ParseOptions::new(marker_token)
        .with_end_token(end_token)
        .with_whole_file(true);
    parse_source(text, "", &options)
}

/// Parses the text of `source_file` into articles in document order.
pub fn parse_source(text: &str, source_file: &str, options: &ParseOptions) -> Vec<Article> {
    let articles: Vec<Article> = BlockWalker::new(text, source_file, options).collect();
    if !articles.is_empty() || !options.whole_file || !whole_file::has_header(text) {
        return articles;
    }

    match whole_file::parse_whole_file(text, source_file) {
        Ok(article) => vec![article],
        Err(e) => {
            log::warn!("Skipping {source_file}: {e}");
            vec![]
        }
    }
}
