use relative_path::{RelativePath, RelativePathBuf};

/// A markdown source document, identified by its path relative to the notes root
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    relative_path: RelativePathBuf,
}

impl SourceFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        Self { relative_path }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name including extension, e.g. `2024_01_31.md`
    pub fn file_name(&self) -> &str {
        self.relative_path.file_name().unwrap_or_default()
    }

    /// File name without the `.md` extension, used as a fallback title
    pub fn stem(&self) -> &str {
        let name = self.file_name();
        name.strip_suffix(".md").unwrap_or(name)
    }

    /// Whether the file lives under `dir` (first path component)
    pub fn is_under(&self, dir: &str) -> bool {
        self.relative_path
            .components()
            .next()
            .is_some_and(|c| c.as_str() == dir)
    }
}

impl From<RelativePathBuf> for SourceFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for SourceFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
