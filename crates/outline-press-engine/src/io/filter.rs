use glob::Pattern;

use crate::models::SourceFile;

/// Decides which discovered files are worth parsing.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    exclude: Vec<Pattern>,
    max_file_name_len: usize,
}

impl SourceFilter {
    pub const DEFAULT_MAX_FILE_NAME_LEN: usize = 100;

    /// Leading characters of outline-tool namespace artefacts.
    const SKIPPED_PREFIXES: [char; 2] = ['>', '!'];

    pub fn new(exclude: Vec<Pattern>, max_file_name_len: usize) -> Self {
        Self {
            exclude,
            max_file_name_len,
        }
    }

    pub fn allows(&self, file: &SourceFile) -> bool {
        let name = file.file_name();
        if name.starts_with(Self::SKIPPED_PREFIXES) {
            return false;
        }
        if name.chars().count() > self.max_file_name_len {
            return false;
        }
        let path = file.relative_path().as_str();
        !self.exclude.iter().any(|p| p.matches(path))
    }
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::new(Vec::new(), Self::DEFAULT_MAX_FILE_NAME_LEN)
    }
}
