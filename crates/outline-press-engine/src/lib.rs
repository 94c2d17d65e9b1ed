pub mod collect;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use collect::{CollectOptions, collect_articles};
pub use io::*;
pub use models::{Article, ArticleKind, Properties, SourceFile};
pub use parsing::{ParseOptions, parse_document, parse_source};
