use serde::Serialize;

use super::Properties;

/// How an article was found in its source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleKind {
    /// A marker bullet and its descendants.
    Block,
    /// A whole file with a `---` delimited header.
    WholeFile,
}

/// A self-contained article extracted from an outline document.
///
/// Built once per detected block (or whole-file match) and immutable
/// afterwards: downstream stages read it through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    title: String,
    properties: Properties,
    body: String,
    source_file: String,
    kind: ArticleKind,
}

impl Article {
    pub fn block(
        title: impl Into<String>,
        properties: Properties,
        body: impl Into<String>,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            properties,
            body: body.into(),
            source_file: source_file.into(),
            kind: ArticleKind::Block,
        }
    }

    pub fn whole_file(
        title: impl Into<String>,
        properties: Properties,
        body: impl Into<String>,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            properties,
            body: body.into(),
            source_file: source_file.into(),
            kind: ArticleKind::WholeFile,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    pub fn kind(&self) -> ArticleKind {
        self.kind
    }

    /// Whether the article is excluded from publication (`draft: true`).
    pub fn is_draft(&self) -> bool {
        self.properties
            .get("draft")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }
}
