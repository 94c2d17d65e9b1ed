/// Knobs for a single parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Substring that flags an article-opening bullet.
    pub marker_token: String,
    /// Substring that ends the whole parse; `None` disables it.
    pub end_token: Option<String>,
    /// Label of the child bullet holding the article's properties.
    pub property_label: String,
    /// Allow the `---` header fallback when no marker block is found.
    pub whole_file: bool,
    /// Rewrite `[[wiki links]]` in body lines outside fences.
    pub sanitize_links: bool,
}

impl ParseOptions {
    pub const DEFAULT_END_TOKEN: &'static str = "🏁";
    pub const DEFAULT_PROPERTY_LABEL: &'static str = "frontmatter";

    pub fn new(marker_token: impl Into<String>) -> Self {
        Self {
            marker_token: marker_token.into(),
            end_token: Some(Self::DEFAULT_END_TOKEN.to_string()),
            property_label: Self::DEFAULT_PROPERTY_LABEL.to_string(),
            whole_file: false,
            sanitize_links: true,
        }
    }

    /// An empty token disables end-of-document handling.
    pub fn with_end_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.end_token = (!token.is_empty()).then_some(token);
        self
    }

    pub fn with_property_label(mut self, label: impl Into<String>) -> Self {
        self.property_label = label.into();
        self
    }

    pub fn with_whole_file(mut self, enabled: bool) -> Self {
        self.whole_file = enabled;
        self
    }

    pub fn with_sanitize_links(mut self, enabled: bool) -> Self {
        self.sanitize_links = enabled;
        self
    }
}
