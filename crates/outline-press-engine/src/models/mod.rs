pub mod article;
pub mod properties;
pub mod source_file;

pub use article::{Article, ArticleKind};
pub use properties::Properties;
pub use source_file::SourceFile;
